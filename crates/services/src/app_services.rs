use std::sync::Arc;
use std::time::Duration;

use render::{PdfRenderer, ReportRenderer};
use storage::repository::Storage;
use storage::sheets::SheetsConfig;

use crate::Clock;
use crate::error::AppServicesError;
use crate::report_service::ReportService;
use crate::submission_service::SubmissionService;

/// Assembles app-facing services over one result sheet and one renderer.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    submissions: Arc<SubmissionService>,
    reports: Arc<ReportService>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        clock: Clock,
        storage: &Storage,
        renderer: Arc<dyn ReportRenderer>,
        render_timeout: Duration,
    ) -> Self {
        let submissions = Arc::new(SubmissionService::new(clock, Arc::clone(&storage.results)));
        let reports = Arc::new(ReportService::new(clock, renderer).with_timeout(render_timeout));
        Self {
            clock,
            submissions,
            reports,
        }
    }

    /// Build services backed by `SQLite` storage and the PDF renderer.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        render_timeout: Duration,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(
            clock,
            &storage,
            Arc::new(PdfRenderer::new()),
            render_timeout,
        ))
    }

    /// Build services that append to a Google Sheet.
    #[must_use]
    pub fn new_google_sheets(config: SheetsConfig, clock: Clock, render_timeout: Duration) -> Self {
        let storage = Storage::google_sheets(config);
        Self::new(
            clock,
            &storage,
            Arc::new(PdfRenderer::new()),
            render_timeout,
        )
    }

    /// In-memory sheet; handy for previews and tests.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(
            clock,
            &Storage::in_memory(),
            Arc::new(PdfRenderer::new()),
            crate::report_service::DEFAULT_RENDER_TIMEOUT,
        )
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
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
