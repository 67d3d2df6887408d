use chrono::NaiveDate;
use ei_core::copy;
use ei_core::interpretation::Tier;
use ei_core::model::{Participant, ScoreVector};
use ei_core::report::build_report;

use super::chart_vm::{RadarChartVm, map_radar_chart};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownRowVm {
    pub title: &'static str,
    pub score_label: String,
    pub encouragement: &'static str,
    pub tier_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub participant_name: String,
    pub strongest: String,
    pub weakest: String,
    pub breakdown: Vec<BreakdownRowVm>,
    pub chart: RadarChartVm,
}

const fn tier_class(tier: Tier) -> &'static str {
    match tier {
        Tier::Strength => "tier-strength",
        Tier::NeedsConsistentAttention => "tier-attention",
        Tier::NeedsImprovement => "tier-improvement",
    }
}

#[must_use]
pub fn map_results(participant: &Participant, scores: ScoreVector, date: NaiveDate) -> ResultsVm {
    let report = build_report(participant.clone(), scores, date);
    let breakdown = report
        .results
        .iter()
        .map(|result| BreakdownRowVm {
            title: result.category.title(),
            score_label: format!("Score: {} / 50 - ", result.score),
            encouragement: copy::tier_encouragement(result.interpretation.tier),
            tier_class: tier_class(result.interpretation.tier),
        })
        .collect();

    ResultsVm {
        participant_name: report.participant.name().to_owned(),
        strongest: report.strongest_titles(),
        weakest: report.weakest_titles(),
        breakdown,
        chart: map_radar_chart(&report.chart()),
    }
}
