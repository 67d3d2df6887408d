use std::collections::BTreeMap;

use crate::model::answer::Answer;
use crate::model::ids::QuestionId;
use crate::model::question::QuestionBank;

/// Answers collected so far, keyed by question id.
///
/// An id is present only once it has been answered; answering again
/// overwrites the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl ResponseSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites the answer for a question.
    pub fn record_answer(&mut self, id: QuestionId, answer: Answer) {
        self.answers.insert(id, answer);
    }

    #[must_use]
    pub fn answer(&self, id: QuestionId) -> Option<Answer> {
        self.answers.get(&id).copied()
    }

    #[must_use]
    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// True when every question of the section at `index` has an answer.
    ///
    /// Unknown section indices are never complete.
    #[must_use]
    pub fn section_is_complete(&self, bank: &QuestionBank, index: usize) -> bool {
        bank.section(index)
            .is_some_and(|section| section.question_ids().all(|id| self.is_answered(id)))
    }

    /// Answered share of the whole questionnaire, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self, bank: &QuestionBank) -> f64 {
        let total = bank.question_count();
        if total == 0 {
            return 0.0;
        }
        let answered = bank.questions().filter(|q| self.is_answered(q.id)).count();
        answered as f64 / total as f64
    }

    /// True when every question in the bank has an answer.
    #[must_use]
    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.questions().all(|q| self.is_answered(q.id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Answer)> + '_ {
        self.answers.iter().map(|(id, answer)| (*id, *answer))
    }
}
