use crate::model::category::Category;
use crate::model::ids::QuestionId;

/// A single questionnaire statement answered on the five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub category: Category,
}

impl Question {
    #[must_use]
    pub const fn new(id: u8, category: Category, text: &'static str) -> Self {
        Self {
            id: QuestionId::new(id),
            text,
            category,
        }
    }
}

/// The questions of one category, shown together as one wizard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub questions: &'static [Question],
}

impl Section {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.category.title()
    }

    #[must_use]
    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|q| q.id)
    }
}

/// Ordered collection of sections making up the whole questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionBank {
    sections: &'static [Section],
}

impl QuestionBank {
    #[must_use]
    pub const fn new(sections: &'static [Section]) -> Self {
        Self { sections }
    }

    #[must_use]
    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    #[must_use]
    pub fn section(&self, index: usize) -> Option<&'static Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of questions across all sections.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// Every question in display order (section by section).
    pub fn questions(&self) -> impl Iterator<Item = &'static Question> {
        self.sections.iter().flat_map(|s| s.questions.iter())
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions().find(|q| q.id == id)
    }

    /// Number of questions shown before the given section.
    ///
    /// Indices past the end return the total question count.
    #[must_use]
    pub fn section_offset(&self, index: usize) -> usize {
        self.sections
            .iter()
            .take(index)
            .map(|s| s.questions.len())
            .sum()
    }

    /// 1-based number shown next to a question in the form.
    #[must_use]
    pub fn display_number(&self, section_index: usize, position: usize) -> usize {
        self.section_offset(section_index) + position + 1
    }

    /// Questions tagged with the given category.
    pub fn questions_in(&self, category: Category) -> impl Iterator<Item = &'static Question> {
        self.questions().filter(move |q| q.category == category)
    }
}
