use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use ei_core::copy;
use tracing::warn;

use super::chart::RadarChart;
use super::state::{DownloadState, ViewError, ViewState};
use crate::context::{AppContext, AssessmentState};
use crate::routes::Route;
use crate::vm::map_results;

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<AssessmentState>();
    let navigator = use_navigator();
    let mut flow = state.flow;
    let mut download = use_signal(|| DownloadState::Idle);

    let (participant, scores) = {
        let flow = flow.read();
        (flow.participant().cloned(), flow.scores())
    };
    let (Some(participant), Some(scores)) = (participant, scores) else {
        return rsx! {
            section { class: "card",
                p { "No results yet. Complete the assessment to see your profile." }
                Link { to: Route::Assessment {}, "Go to the assessment" }
            }
        };
    };

    let vm = map_results(&participant, scores, ctx.clock().today());
    let is_loading = matches!(*download.read(), ViewState::Loading);

    let reports = ctx.reports();
    let report_dir = ctx.report_dir().to_path_buf();
    let on_download = move |_| {
        if matches!(*download.peek(), ViewState::Loading) {
            return;
        }
        download.set(ViewState::Loading);
        let reports = reports.clone();
        let report_dir = report_dir.clone();
        let participant = participant.clone();
        spawn(async move {
            let next = match reports.render(participant, scores, None).await {
                Ok(report) => {
                    let path = report_dir.join(&report.file_name);
                    match tokio::fs::write(&path, &report.bytes).await {
                        Ok(()) => ViewState::Ready(path),
                        Err(err) => {
                            warn!(path = %path.display(), error = %err, "failed to save report");
                            ViewState::Error(ViewError::Unknown)
                        }
                    }
                }
                Err(_) => ViewState::Error(ViewError::ReportFailed),
            };
            download.set(next);
        });
    };

    let start_over = move |_| {
        flow.write().restart();
        download.set(ViewState::Idle);
        navigator.push(Route::Assessment {});
    };

    rsx! {
        section { class: "card results",
            h1 { "Your Results" }
            p { class: "muted", "View your scores, strengths, and areas for improvement" }
            p { class: "participant", "{vm.participant_name}" }

            div { class: "chart-panel",
                RadarChart { chart: vm.chart.clone() }
                p { class: "chart-caption", "{copy::CHART_CAPTION}" }
            }

            div { class: "highlights",
                div { class: "highlight tier-strength",
                    h3 { "Area of Strength" }
                    p { "Your highest score is in:" }
                    p { class: "highlight-value", "{vm.strongest}" }
                }
                div { class: "highlight tier-improvement",
                    h3 { "Area for Improvement" }
                    p { "An area with potential for growth is:" }
                    p { class: "highlight-value", "{vm.weakest}" }
                }
            }

            h2 { "Detailed Breakdown" }
            ul { class: "breakdown",
                for row in vm.breakdown.iter() {
                    li { key: "{row.title}", class: "breakdown-row {row.tier_class}",
                        h4 { "{row.title}" }
                        p { "{row.score_label}{row.encouragement}" }
                    }
                }
            }

            div { class: "results-actions",
                button {
                    id: "download-report",
                    class: "primary",
                    r#type: "button",
                    disabled: is_loading,
                    onclick: on_download,
                    if is_loading { "Generating Report..." } else { "Download Report" }
                }
                button {
                    id: "start-over",
                    class: "secondary",
                    r#type: "button",
                    onclick: start_over,
                    "Start over"
                }
            }

            match download() {
                ViewState::Ready(path) => rsx! {
                    p { class: "notice", "Report saved to {path.display()}" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", role: "alert", "{err.message()}" }
                },
                ViewState::Idle | ViewState::Loading => rsx! {},
            }

            p { class: "muted thanks",
                "Thank you for taking the assessment. Your detailed PDF report will include all scores and interpretations."
            }
        }
    }
}
