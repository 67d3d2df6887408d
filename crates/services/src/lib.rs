#![forbid(unsafe_code)]

pub mod app_services;
pub mod assessment;
pub mod error;
pub mod report_service;
pub mod requests;
pub mod submission_service;

pub use ei_core::Clock;

pub use app_services::AppServices;
pub use assessment::{AssessmentFlow, AssessmentProgress, Step};
pub use error::{AppServicesError, AssessmentError, ReportError, RequestError, SubmissionError};
pub use report_service::{RenderedReport, ReportService};
pub use requests::{GenerateReportRequest, ScoresPayload, SubmitAck, SubmitResultsRequest};
pub use submission_service::SubmissionService;
