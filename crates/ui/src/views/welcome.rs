use dioxus::prelude::*;
use ei_core::copy;

use crate::context::AssessmentState;

#[component]
pub fn WelcomePanel() -> Element {
    let state = use_context::<AssessmentState>();
    let mut flow = state.flow;
    let mut name = use_signal(String::new);
    let mut organization = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let can_start = !name.read().is_empty() && !organization.read().is_empty();

    let start = move |_| {
        let outcome = flow.write().start(&name.read(), &organization.read());
        match outcome {
            Ok(_) => error.set(None),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        section { class: "card welcome",
            h1 { "{copy::ASSESSMENT_TITLE}" }
            p { class: "tagline", "{copy::ASSESSMENT_TAGLINE}" }

            div { class: "identity-form",
                label { r#for: "participant-name", "Your Name" }
                input {
                    id: "participant-name",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "participant-organization", "Your Organization" }
                input {
                    id: "participant-organization",
                    r#type: "text",
                    value: "{organization}",
                    oninput: move |evt| organization.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "error", role: "alert", "{message}" }
                }
                button {
                    id: "start-assessment",
                    class: "primary",
                    r#type: "button",
                    disabled: !can_start,
                    onclick: start,
                    "Start Assessment"
                }
            }
        }
    }
}
