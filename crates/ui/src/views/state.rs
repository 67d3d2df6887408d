use std::path::PathBuf;

use services::ReportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    ReportFailed,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::ReportFailed => ReportError::USER_MESSAGE,
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

/// Progress of the "Download Report" action.
pub type DownloadState = ViewState<PathBuf>;
