use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::use_assessment_provider;
use crate::views::{AssessmentView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AssessmentView)] Assessment {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    use_assessment_provider();

    rsx! {
        div { class: "app",
            header { class: "brand-bar",
                span { class: "brand-mark", "EI" }
                span { class: "brand-name", "Self-Assessment" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
