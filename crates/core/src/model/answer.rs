use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("invalid answer value: {0}")]
    InvalidValue(u8),
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// Five-point frequency scale used for every questionnaire item.
///
/// The numeric value (1-5) is what gets summed into category totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Answer {
    NotAtAll,
    Infrequently,
    HalfTheTime,
    Frequently,
    Always,
}

impl Answer {
    /// Every option in ascending order, as offered to the user.
    pub const OPTIONS: [Answer; 5] = [
        Answer::NotAtAll,
        Answer::Infrequently,
        Answer::HalfTheTime,
        Answer::Frequently,
        Answer::Always,
    ];

    /// Converts a numeric answer (1-5) to an `Answer`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::InvalidValue` if the value is not in the range 1-5.
    pub fn from_u8(value: u8) -> Result<Self, AnswerError> {
        match value {
            1 => Ok(Self::NotAtAll),
            2 => Ok(Self::Infrequently),
            3 => Ok(Self::HalfTheTime),
            4 => Ok(Self::Frequently),
            5 => Ok(Self::Always),
            _ => Err(AnswerError::InvalidValue(value)),
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Answer::NotAtAll => 1,
            Answer::Infrequently => 2,
            Answer::HalfTheTime => 3,
            Answer::Frequently => 4,
            Answer::Always => 5,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Answer::NotAtAll => "Not at all",
            Answer::Infrequently => "Infrequently",
            Answer::HalfTheTime => "Half the time",
            Answer::Frequently => "Frequently",
            Answer::Always => "Always",
        }
    }
}

impl TryFrom<u8> for Answer {
    type Error = AnswerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

impl From<Answer> for u8 {
    fn from(answer: Answer) -> Self {
        answer.value()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
