use dioxus::prelude::*;
use dioxus_router::Link;
use services::Step;

use super::section::SectionPanel;
use super::welcome::WelcomePanel;
use crate::context::AssessmentState;
use crate::routes::Route;

#[component]
pub fn AssessmentView() -> Element {
    let state = use_context::<AssessmentState>();
    let step = state.flow.read().step();

    match step {
        Step::Welcome => rsx! { WelcomePanel {} },
        Step::Section(_) => rsx! { SectionPanel {} },
        Step::Results => rsx! {
            section { class: "card",
                p { "Your assessment is complete." }
                Link { to: Route::Results {}, "View your results" }
            }
        },
    }
}
