use ei_core::QUESTION_BANK;
use ei_core::model::Answer;
use services::AssessmentFlow;

use super::test_harness::{ViewKind, fresh_flow, setup_view_harness};

fn answer_section(flow: &mut AssessmentFlow, index: usize, answer: Answer) {
    let section = QUESTION_BANK.section(index).expect("section");
    for id in section.question_ids() {
        flow.answer(id, answer).expect("answer");
    }
}

fn started_flow() -> AssessmentFlow {
    let mut flow = fresh_flow();
    flow.start("Grace Hopper", "Navy").expect("start");
    flow
}

fn completed_flow() -> AssessmentFlow {
    let mut flow = started_flow();
    let last = QUESTION_BANK.section_count() - 1;
    for index in 0..=last {
        let answer = match index {
            0 => Answer::Always,
            i if i == last => Answer::NotAtAll,
            _ => Answer::HalfTheTime,
        };
        answer_section(&mut flow, index, answer);
        if index < last {
            flow.next_section().expect("next section");
        }
    }
    flow.submit().expect("submit");
    flow
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_view_smoke_renders_identity_form() {
    let mut harness = setup_view_harness(ViewKind::Assessment, fresh_flow());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Emotional Intelligence"), "missing title in {html}");
    assert!(html.contains("participant-name"), "missing name input in {html}");
    assert!(
        html.contains("participant-organization"),
        "missing organization input in {html}"
    );
    assert!(html.contains("Start Assessment"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn first_section_smoke_renders_questions_without_previous() {
    let mut harness = setup_view_harness(ViewKind::Assessment, started_flow());
    harness.rebuild();
    let html = harness.render();

    let section = QUESTION_BANK.section(0).expect("section");
    assert!(html.contains("Section 1 of 5"), "missing heading in {html}");
    assert!(html.contains("0 of 50 questions answered"), "missing progress in {html}");
    assert!(html.contains(section.title()), "missing section title in {html}");
    assert!(html.contains(section.questions[0].text), "missing question in {html}");
    assert_eq!(html.matches("<fieldset").count(), section.questions.len());
    assert!(html.contains("Next Section"), "missing next button in {html}");
    assert!(!html.contains("previous-section"), "unexpected previous in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn later_section_smoke_counts_answers_and_offers_previous() {
    let mut flow = started_flow();
    answer_section(&mut flow, 0, Answer::Frequently);
    flow.next_section().expect("next section");

    let mut harness = setup_view_harness(ViewKind::Assessment, flow);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Section 2 of 5"), "missing heading in {html}");
    assert!(html.contains("10 of 50 questions answered"), "missing progress in {html}");
    assert!(html.contains("width: 20%"), "missing progress width in {html}");
    assert!(html.contains("previous-section"), "missing previous in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn last_section_smoke_offers_submit() {
    let mut flow = started_flow();
    let last = QUESTION_BANK.section_count() - 1;
    for index in 0..last {
        answer_section(&mut flow, index, Answer::HalfTheTime);
        flow.next_section().expect("next section");
    }

    let mut harness = setup_view_harness(ViewKind::Assessment, flow);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("submit-assessment"), "missing submit in {html}");
    assert!(!html.contains("next-section"), "unexpected next in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_profile() {
    let mut harness = setup_view_harness(ViewKind::Results, completed_flow());
    harness.rebuild();
    let html = harness.render();

    let strongest = QUESTION_BANK.section(0).expect("section").title();
    let weakest = QUESTION_BANK.section(4).expect("section").title();
    assert!(html.contains("Your Results"), "missing heading in {html}");
    assert!(html.contains("<svg"), "missing chart in {html}");
    assert!(html.contains("Area of Strength"), "missing strength card in {html}");
    assert!(html.contains(strongest), "missing {strongest} in {html}");
    assert!(html.contains(weakest), "missing {weakest} in {html}");
    assert!(html.contains("Detailed Breakdown"), "missing breakdown in {html}");
    assert!(html.contains("Score: 50 / 50"), "missing top score in {html}");
    assert!(html.contains("tier-improvement"), "missing tier class in {html}");
    assert!(html.contains("Download Report"), "missing download in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_without_scores_links_back() {
    let mut harness = setup_view_harness(ViewKind::Results, started_flow());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No results yet"), "missing fallback in {html}");
    assert!(!html.contains("<svg"), "unexpected chart in {html}");
    assert!(harness.sheet.rows().expect("rows").is_empty());
}
