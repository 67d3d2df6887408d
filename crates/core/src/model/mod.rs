mod answer;
mod category;
mod identity;
mod ids;
mod question;
mod responses;
mod scores;

pub use answer::{Answer, AnswerError};
pub use category::Category;
pub use identity::{IdentityError, Participant};
pub use ids::{QuestionId, SubmissionId};
pub use question::{Question, QuestionBank, Section};
pub use responses::ResponseSet;
pub use scores::{ScoreError, ScoreVector};
