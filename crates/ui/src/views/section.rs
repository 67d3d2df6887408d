use dioxus::prelude::*;
use dioxus_router::use_navigator;
use ei_core::model::{Answer, QuestionId};

use crate::context::{AppContext, AssessmentState};
use crate::routes::Route;
use crate::vm::{LikertOptionVm, QuestionVm, likert_options, map_section};

#[component]
pub fn SectionPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<AssessmentState>();
    let navigator = use_navigator();
    let mut flow = state.flow;
    let mut error = use_signal(|| None::<String>);

    let Some(section) = map_section(&flow.read()) else {
        return rsx! {};
    };
    let options = likert_options();

    let on_answer = move |(id, value): (u8, u8)| {
        // Radio values always come from `Answer::OPTIONS`.
        if let Ok(answer) = Answer::from_u8(value) {
            if let Err(err) = flow.write().answer(QuestionId::new(id), answer) {
                error.set(Some(err.to_string()));
            }
        }
    };

    let next = move |_| {
        let outcome = flow.write().next_section();
        match outcome {
            Ok(_) => error.set(None),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let previous = move |_| {
        error.set(None);
        flow.write().previous_section();
    };

    let submissions = ctx.submissions();
    let submit = move |_| {
        let outcome = flow.write().submit();
        match outcome {
            Ok(scores) => {
                error.set(None);
                if let Some(participant) = flow.read().participant().cloned() {
                    let submissions = submissions.clone();
                    spawn(async move {
                        // Logged by the service; the results view never waits on this.
                        let _ = submissions.record(&participant, scores).await;
                    });
                }
                navigator.push(Route::Results {});
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    rsx! {
        section { class: "card assessment",
            div { class: "section-header",
                h2 { "{section.heading}" }
                p { class: "muted", "{section.answered_label}" }
                div { class: "progress",
                    div { class: "progress-fill", style: "width: {section.percent}%" }
                }
            }

            h3 { class: "section-title", "{section.title}" }

            for question in section.questions.clone() {
                QuestionCard {
                    key: "{question.id}",
                    question: question.clone(),
                    options: options.clone(),
                    on_answer: on_answer,
                }
            }

            if let Some(message) = error() {
                p { class: "error", role: "alert", "{message}" }
            }

            div { class: "section-actions",
                if section.is_last {
                    button {
                        id: "submit-assessment",
                        class: "primary",
                        r#type: "button",
                        onclick: submit,
                        "Submit & View Results"
                    }
                } else {
                    button {
                        id: "next-section",
                        class: "primary",
                        r#type: "button",
                        onclick: next,
                        "Next Section"
                    }
                }
                if !section.is_first {
                    button {
                        id: "previous-section",
                        class: "secondary",
                        r#type: "button",
                        onclick: previous,
                        "Previous"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuestionVm,
    options: Vec<LikertOptionVm>,
    on_answer: EventHandler<(u8, u8)>,
) -> Element {
    let group = format!("question-{}", question.id);
    rsx! {
        fieldset { class: "question",
            legend { "{question.number}. {question.text}" }
            div { class: "likert",
                for option in options {
                    label { class: "likert-option",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{option.value}",
                            checked: question.selected == Some(option.value),
                            onchange: move |_| on_answer.call((question.id, option.value)),
                        }
                        span { "{option.label}" }
                    }
                }
            }
        }
    }
}
