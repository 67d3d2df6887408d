use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::prelude::*;
use ei_core::QUESTION_BANK;
use services::{AssessmentFlow, Clock, ReportService, SubmissionService};

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn report_dir(&self) -> PathBuf;

    fn submissions(&self) -> Arc<SubmissionService>;
    fn reports(&self) -> Arc<ReportService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    report_dir: PathBuf,

    submissions: Arc<SubmissionService>,
    reports: Arc<ReportService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            report_dir: app.report_dir(),
            submissions: app.submissions(),
            reports: app.reports(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Directory downloaded reports are written to.
    #[must_use]
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    #[must_use]
    pub fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Wizard state shared by the assessment and results routes.
#[derive(Clone, Copy)]
pub struct AssessmentState {
    pub flow: Signal<AssessmentFlow>,
}

/// Provide a fresh wizard to the component subtree.
pub fn use_assessment_provider() -> AssessmentState {
    use_context_provider(|| AssessmentState {
        flow: Signal::new(AssessmentFlow::new(&QUESTION_BANK)),
    })
}
