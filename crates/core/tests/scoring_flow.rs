use ei_core::QUESTION_BANK;
use ei_core::interpretation::Tier;
use ei_core::model::{Answer, Category, Participant, ResponseSet};
use ei_core::report::build_report;
use ei_core::scoring::compute_scores;
use ei_core::time::fixed_clock;

fn answer_all(pick: impl Fn(u8) -> u8) -> ResponseSet {
    let mut responses = ResponseSet::new();
    for q in QUESTION_BANK.questions() {
        let value = pick(q.id.value());
        responses.record_answer(q.id, Answer::from_u8(value).unwrap());
    }
    responses
}

#[test]
fn all_half_the_time_is_uniform_attention() {
    let responses = answer_all(|_| 3);
    let scores = compute_scores(&responses, &QUESTION_BANK).unwrap();
    for category in Category::ALL {
        assert_eq!(scores.get(category), 30);
    }

    let participant = Participant::new("Sam Doe", "Acme").unwrap();
    let report = build_report(participant, scores, fixed_clock().today());
    assert!(
        report
            .results
            .iter()
            .all(|r| r.interpretation.tier == Tier::NeedsConsistentAttention)
    );
    assert_eq!(report.strongest, Category::ALL.to_vec());
    assert_eq!(report.weakest, report.strongest);
}

#[test]
fn category_totals_equal_sum_of_their_answers() {
    let patterns: [fn(u8) -> u8; 4] = [
        |id| id % 5 + 1,
        |id| (id % 5 * 3) % 5 + 1,
        |id| if id % 2 == 0 { 5 } else { 1 },
        |id| (id / 10) % 5 + 1,
    ];

    for pattern in patterns {
        let responses = answer_all(pattern);
        let scores = compute_scores(&responses, &QUESTION_BANK).unwrap();
        for category in Category::ALL {
            let expected: u16 = QUESTION_BANK
                .questions_in(category)
                .map(|q| u16::from(pattern(q.id.value())))
                .sum();
            assert_eq!(scores.get(category), expected);
            assert!((10..=50).contains(&expected));
        }
    }
}

#[test]
fn shuffled_answer_order_does_not_change_scores() {
    let forward = answer_all(|id| id % 4 + 2);

    let mut backward = ResponseSet::new();
    let mut questions: Vec<_> = QUESTION_BANK.questions().collect();
    questions.reverse();
    for q in questions {
        backward.record_answer(q.id, Answer::from_u8(q.id.value() % 4 + 2).unwrap());
    }

    assert_eq!(
        compute_scores(&forward, &QUESTION_BANK).unwrap(),
        compute_scores(&backward, &QUESTION_BANK).unwrap()
    );
}
