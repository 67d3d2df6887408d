use ei_core::model::Answer;
use services::{AssessmentFlow, Step};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikertOptionVm {
    pub value: u8,
    pub label: &'static str,
}

#[must_use]
pub fn likert_options() -> Vec<LikertOptionVm> {
    Answer::OPTIONS
        .into_iter()
        .map(|answer| LikertOptionVm {
            value: answer.value(),
            label: answer.label(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: u8,
    pub number: usize,
    pub text: &'static str,
    pub selected: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub index: usize,
    pub heading: String,
    pub title: &'static str,
    pub answered_label: String,
    pub percent: u8,
    pub questions: Vec<QuestionVm>,
    pub is_first: bool,
    pub is_last: bool,
}

/// Page model for the section currently shown, or `None` off the section steps.
#[must_use]
pub fn map_section(flow: &AssessmentFlow) -> Option<SectionVm> {
    let Step::Section(index) = flow.step() else {
        return None;
    };
    let bank = flow.bank();
    let section = bank.section(index)?;
    let progress = flow.progress();

    let questions = section
        .questions
        .iter()
        .enumerate()
        .map(|(position, question)| QuestionVm {
            id: question.id.value(),
            number: bank.display_number(index, position),
            text: question.text,
            selected: flow.responses().answer(question.id).map(Answer::value),
        })
        .collect();

    Some(SectionVm {
        index,
        heading: format!("Section {} of {}", index + 1, progress.section_count),
        title: section.title(),
        answered_label: format!(
            "{} of {} questions answered",
            progress.answered, progress.total
        ),
        percent: progress.percent(),
        questions,
        is_first: index == 0,
        is_last: flow.is_last_section(),
    })
}
