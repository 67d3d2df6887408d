mod flow;
mod progress;

// Public API of the assessment wizard.
pub use crate::error::AssessmentError;
pub use flow::{AssessmentFlow, Step};
pub use progress::AssessmentProgress;
