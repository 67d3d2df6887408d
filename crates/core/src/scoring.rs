//! Reduction of a complete response set into category totals.

use thiserror::Error;

use crate::model::{QuestionBank, ResponseSet, ScoreVector};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("responses incomplete: {answered} of {total} answered")]
    Incomplete { answered: usize, total: usize },
}

/// Sums the answers of each category's questions.
///
/// Only complete response sets are scored; a partial set never produces a
/// vector.
///
/// # Errors
///
/// Returns `ScoringError::Incomplete` if any question of the bank is unanswered.
pub fn compute_scores(
    responses: &ResponseSet,
    bank: &QuestionBank,
) -> Result<ScoreVector, ScoringError> {
    let mut totals = [0_u16; 5];
    let mut answered = 0_usize;

    for question in bank.questions() {
        if let Some(answer) = responses.answer(question.id) {
            answered += 1;
            totals[question.category.index()] += u16::from(answer.value());
        }
    }

    let total = bank.question_count();
    if answered != total {
        return Err(ScoringError::Incomplete { answered, total });
    }

    Ok(ScoreVector::from_sums(totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QUESTION_BANK;
    use crate::model::{Answer, Category, QuestionId};

    fn uniform(answer: Answer) -> ResponseSet {
        let mut responses = ResponseSet::new();
        for q in QUESTION_BANK.questions() {
            responses.record_answer(q.id, answer);
        }
        responses
    }

    #[test]
    fn all_threes_score_thirty_everywhere() {
        let scores = compute_scores(&uniform(Answer::HalfTheTime), &QUESTION_BANK).unwrap();
        assert_eq!(scores.totals(), [30; 5]);
    }

    #[test]
    fn extremes_hit_bounds() {
        let low = compute_scores(&uniform(Answer::NotAtAll), &QUESTION_BANK).unwrap();
        let high = compute_scores(&uniform(Answer::Always), &QUESTION_BANK).unwrap();
        assert_eq!(low.totals(), [10; 5]);
        assert_eq!(high.totals(), [50; 5]);
    }

    #[test]
    fn answers_land_in_their_own_category() {
        let mut responses = uniform(Answer::NotAtAll);
        // 4, 9, 14 are Empathy items.
        for raw in [4, 9, 14] {
            responses.record_answer(QuestionId::new(raw), Answer::Always);
        }
        let scores = compute_scores(&responses, &QUESTION_BANK).unwrap();
        assert_eq!(scores.get(Category::Empathy), 10 + 3 * 4);
        assert_eq!(scores.get(Category::SelfAwareness), 10);
    }

    #[test]
    fn incomplete_set_is_refused() {
        let mut responses = uniform(Answer::Frequently);
        let mut partial = ResponseSet::new();
        for (id, answer) in responses.iter().skip(1) {
            partial.record_answer(id, answer);
        }
        responses = partial;

        let err = compute_scores(&responses, &QUESTION_BANK).unwrap_err();
        assert_eq!(
            err,
            ScoringError::Incomplete {
                answered: 49,
                total: 50
            }
        );
    }

    #[test]
    fn recomputation_is_idempotent() {
        let responses = uniform(Answer::Infrequently);
        let first = compute_scores(&responses, &QUESTION_BANK).unwrap();
        let second = compute_scores(&responses, &QUESTION_BANK).unwrap();
        assert_eq!(first, second);
    }
}
