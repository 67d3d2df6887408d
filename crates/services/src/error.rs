//! Shared error types for the services crate.

use std::time::Duration;

use thiserror::Error;

use ei_core::model::{IdentityError, QuestionId};
use ei_core::scoring::ScoringError;
use render::RenderError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Guard failures raised by `AssessmentFlow` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("Please fill out both your name and organization.")]
    Identity(#[from] IdentityError),
    #[error("Please answer all questions in this section to continue.")]
    SectionIncomplete { section: usize },
    #[error("Please answer all questions before submitting.")]
    Incomplete(#[from] ScoringError),
    #[error("question {0} is not part of this assessment")]
    UnknownQuestion(QuestionId),
    #[error("assessment is not in progress")]
    NotInProgress,
    #[error("submission is only available from the last section")]
    NotOnLastSection,
}

/// Request payload problems shared by both boundary operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    #[error("Missing required data.")]
    MissingData,
    #[error(transparent)]
    Invalid(#[from] ei_core::Error),
}

/// Errors emitted by `SubmissionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("chart image is not valid base64: {0}")]
    ChartEncoding(String),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("report rendering exceeded {0:?}")]
    Timeout(Duration),
    #[error("report worker failed: {0}")]
    Worker(String),
}

impl ReportError {
    /// Message shown to the participant whatever the cause.
    pub const USER_MESSAGE: &'static str = "Sorry, we couldn't generate your PDF at this time.";
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
