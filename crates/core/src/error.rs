use thiserror::Error;

use crate::model::{AnswerError, IdentityError, ScoreError};
use crate::scoring::ScoringError;

/// Any validation failure raised by the domain layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
