use ei_core::model::{
    Answer, Participant, QuestionBank, QuestionId, ResponseSet, ScoreVector, Section,
};
use ei_core::scoring::compute_scores;

use super::progress::AssessmentProgress;
use crate::error::AssessmentError;

/// Where the participant currently is in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Section(usize),
    Results,
}

/// In-memory wizard: identity, then one page per section, then results.
///
/// Every transition is guarded; a refused transition leaves the state untouched
/// and returns the message the participant should see.
#[derive(Debug, Clone)]
pub struct AssessmentFlow {
    bank: &'static QuestionBank,
    step: Step,
    participant: Option<Participant>,
    responses: ResponseSet,
    scores: Option<ScoreVector>,
}

impl AssessmentFlow {
    #[must_use]
    pub fn new(bank: &'static QuestionBank) -> Self {
        Self {
            bank,
            step: Step::Welcome,
            participant: None,
            responses: ResponseSet::new(),
            scores: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &'static QuestionBank {
        self.bank
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn participant(&self) -> Option<&Participant> {
        self.participant.as_ref()
    }

    #[must_use]
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Totals, once submitted.
    #[must_use]
    pub fn scores(&self) -> Option<ScoreVector> {
        self.scores
    }

    /// Section shown on the current step, if any.
    #[must_use]
    pub fn current_section(&self) -> Option<&'static Section> {
        match self.step {
            Step::Section(index) => self.bank.section(index),
            Step::Welcome | Step::Results => None,
        }
    }

    #[must_use]
    pub fn is_last_section(&self) -> bool {
        matches!(self.step, Step::Section(i) if i + 1 == self.bank.section_count())
    }

    #[must_use]
    pub fn progress(&self) -> AssessmentProgress {
        AssessmentProgress {
            answered: self.responses.answered_count(),
            total: self.bank.question_count(),
            fraction: self.responses.progress_fraction(self.bank),
            section: match self.step {
                Step::Section(index) => Some(index),
                Step::Welcome | Step::Results => None,
            },
            section_count: self.bank.section_count(),
        }
    }

    /// Welcome -> first section.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Identity` if name or organization is blank.
    /// Returns `AssessmentError::NotInProgress` outside the welcome step.
    pub fn start(&mut self, name: &str, organization: &str) -> Result<Step, AssessmentError> {
        if self.step != Step::Welcome {
            return Err(AssessmentError::NotInProgress);
        }
        let participant = Participant::new(name, organization)?;
        self.participant = Some(participant);
        self.step = Step::Section(0);
        Ok(self.step)
    }

    /// Records or overwrites one answer on a section step.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnknownQuestion` for ids outside the bank.
    /// Returns `AssessmentError::NotInProgress` outside a section step.
    pub fn answer(&mut self, id: QuestionId, answer: Answer) -> Result<(), AssessmentError> {
        if !matches!(self.step, Step::Section(_)) {
            return Err(AssessmentError::NotInProgress);
        }
        if self.bank.question(id).is_none() {
            return Err(AssessmentError::UnknownQuestion(id));
        }
        self.responses.record_answer(id, answer);
        Ok(())
    }

    /// Advances one section when the current one is fully answered.
    ///
    /// On the last section this is a no-op once the guard passes; use [`Self::submit`].
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::SectionIncomplete` if any question is unanswered.
    /// Returns `AssessmentError::NotInProgress` outside a section step.
    pub fn next_section(&mut self) -> Result<Step, AssessmentError> {
        let Step::Section(index) = self.step else {
            return Err(AssessmentError::NotInProgress);
        };
        if !self.responses.section_is_complete(self.bank, index) {
            return Err(AssessmentError::SectionIncomplete { section: index });
        }
        if index + 1 < self.bank.section_count() {
            self.step = Step::Section(index + 1);
        }
        Ok(self.step)
    }

    /// Goes back one section; answers are kept. Stays put on the first section.
    pub fn previous_section(&mut self) -> Step {
        if let Step::Section(index) = self.step {
            self.step = Step::Section(index.saturating_sub(1));
        }
        self.step
    }

    /// Last section -> results. Scores are computed from the full response set.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Incomplete` unless every question is answered.
    /// Returns `AssessmentError::NotOnLastSection` before the final section.
    pub fn submit(&mut self) -> Result<ScoreVector, AssessmentError> {
        if !matches!(self.step, Step::Section(_)) {
            return Err(AssessmentError::NotInProgress);
        }
        if !self.is_last_section() {
            return Err(AssessmentError::NotOnLastSection);
        }
        let scores = compute_scores(&self.responses, self.bank)?;
        self.scores = Some(scores);
        self.step = Step::Results;
        Ok(scores)
    }

    /// Clears everything and returns to the welcome step.
    pub fn restart(&mut self) {
        *self = Self::new(self.bank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ei_core::QUESTION_BANK;

    fn answer_section(flow: &mut AssessmentFlow, index: usize, answer: Answer) {
        let section = QUESTION_BANK.section(index).unwrap();
        for id in section.question_ids() {
            flow.answer(id, answer).unwrap();
        }
    }

    #[test]
    fn start_requires_both_fields() {
        let mut flow = AssessmentFlow::new(&QUESTION_BANK);
        let err = flow.start("Ann", " ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill out both your name and organization."
        );
        assert_eq!(flow.step(), Step::Welcome);
        assert_eq!(flow.start("Ann", "Acme").unwrap(), Step::Section(0));
        assert_eq!(flow.participant().unwrap().organization(), "Acme");
    }

    #[test]
    fn answering_before_start_is_refused() {
        let mut flow = AssessmentFlow::new(&QUESTION_BANK);
        assert_eq!(
            flow.answer(QuestionId::new(1), Answer::Always),
            Err(AssessmentError::NotInProgress)
        );
    }

    #[test]
    fn next_is_guarded_and_back_keeps_answers() {
        let mut flow = AssessmentFlow::new(&QUESTION_BANK);
        flow.start("Ann", "Acme").unwrap();

        let first = QUESTION_BANK.section(0).unwrap();
        let ids: Vec<QuestionId> = first.question_ids().collect();
        for id in &ids[..ids.len() - 1] {
            flow.answer(*id, Answer::Frequently).unwrap();
        }
        let err = flow.next_section().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please answer all questions in this section to continue."
        );
        assert_eq!(flow.step(), Step::Section(0));

        flow.answer(ids[ids.len() - 1], Answer::Frequently).unwrap();
        assert_eq!(flow.next_section().unwrap(), Step::Section(1));
        assert_eq!(flow.previous_section(), Step::Section(0));
        assert_eq!(flow.previous_section(), Step::Section(0));
        assert_eq!(flow.responses().answered_count(), 10);
    }

    #[test]
    fn submit_only_from_last_section_with_everything_answered() {
        let mut flow = AssessmentFlow::new(&QUESTION_BANK);
        flow.start("Ann", "Acme").unwrap();
        assert_eq!(flow.submit(), Err(AssessmentError::NotOnLastSection));

        for index in 0..QUESTION_BANK.section_count() {
            answer_section(&mut flow, index, Answer::HalfTheTime);
            flow.next_section().unwrap();
        }
        assert!(flow.is_last_section());
        let scores = flow.submit().unwrap();
        assert_eq!(scores.totals(), [30; 5]);
        assert_eq!(flow.step(), Step::Results);
        assert!(flow.progress().is_complete());
        assert_eq!(flow.progress().percent(), 100);
    }

    #[test]
    fn submit_refuses_an_unanswered_final_question() {
        let mut flow = AssessmentFlow::new(&QUESTION_BANK);
        flow.start("Ann", "Acme").unwrap();
        let last = QUESTION_BANK.section_count() - 1;
        for index in 0..last {
            answer_section(&mut flow, index, Answer::Frequently);
            flow.next_section().unwrap();
        }
        let ids: Vec<QuestionId> = QUESTION_BANK.section(last).unwrap().question_ids().collect();
        for id in &ids[..ids.len() - 1] {
            flow.answer(*id, Answer::Frequently).unwrap();
        }

        let err = flow.submit().unwrap_err();
        assert!(matches!(err, AssessmentError::Incomplete(_)));
        assert_eq!(err.to_string(), "Please answer all questions before submitting.");
        assert_eq!(flow.step(), Step::Section(last));
        assert_eq!(flow.step(), Step::Section(4));
        assert!(flow.scores().is_none());

        flow.answer(ids[ids.len() - 1], Answer::Frequently).unwrap();
        assert_eq!(flow.submit().unwrap().totals(), [40; 5]);
    }

    #[test]
    fn restart_clears_state() {
        let mut flow = AssessmentFlow::new(&QUESTION_BANK);
        flow.start("Ann", "Acme").unwrap();
        answer_section(&mut flow, 0, Answer::Always);
        flow.restart();
        assert_eq!(flow.step(), Step::Welcome);
        assert!(flow.participant().is_none());
        assert_eq!(flow.responses().answered_count(), 0);
    }
}
