//! Renderer-ready summary of one submission.

use chrono::NaiveDate;

use crate::chart::ChartPayload;
use crate::copy;
use crate::interpretation::{Interpretation, interpret};
use crate::model::{Category, Participant, ScoreVector};

/// One row of the score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryResult {
    pub category: Category,
    pub score: u16,
    pub interpretation: Interpretation,
}

/// Static advice paragraph for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextStep {
    pub category: Category,
    pub advice: &'static str,
}

/// Everything a view or document needs to present one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
    pub participant: Participant,
    pub date: NaiveDate,
    pub scores: ScoreVector,
    pub results: Vec<CategoryResult>,
    pub strongest: Vec<Category>,
    pub weakest: Vec<Category>,
    pub next_steps: Vec<NextStep>,
}

impl ReportContent {
    /// Submission date as printed on the report, e.g. "March 5, 2024".
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    #[must_use]
    pub fn chart(&self) -> ChartPayload {
        ChartPayload::from_scores(&self.scores)
    }

    #[must_use]
    pub fn strongest_titles(&self) -> String {
        join_titles(&self.strongest)
    }

    #[must_use]
    pub fn weakest_titles(&self) -> String {
        join_titles(&self.weakest)
    }
}

fn join_titles(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.title())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Categories sharing the highest total, in display order.
#[must_use]
pub fn strongest_categories(scores: &ScoreVector) -> Vec<Category> {
    let max = scores.max();
    scores
        .iter()
        .filter(|(_, score)| *score == max)
        .map(|(category, _)| category)
        .collect()
}

/// Categories sharing the lowest total, in display order.
#[must_use]
pub fn weakest_categories(scores: &ScoreVector) -> Vec<Category> {
    let min = scores.min();
    scores
        .iter()
        .filter(|(_, score)| *score == min)
        .map(|(category, _)| category)
        .collect()
}

#[must_use]
pub fn build_report(participant: Participant, scores: ScoreVector, date: NaiveDate) -> ReportContent {
    let results = scores
        .iter()
        .map(|(category, score)| CategoryResult {
            category,
            score,
            interpretation: interpret(score),
        })
        .collect();
    let next_steps = Category::ALL
        .into_iter()
        .map(|category| NextStep {
            category,
            advice: copy::next_step(category),
        })
        .collect();

    ReportContent {
        participant,
        date,
        strongest: strongest_categories(&scores),
        weakest: weakest_categories(&scores),
        scores,
        results,
        next_steps,
    }
}
