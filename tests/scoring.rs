use quickcheck_macros::quickcheck;
use sr_trainer_wasm::domain::game::{Feedback, GroundTruth, LineKind, Placements, ScoringService};
use sr_trainer_wasm::domain::market_data::Price;

fn gt(support: f32, resistance: f32) -> GroundTruth {
    GroundTruth::new(Price::from(support), Price::from(resistance))
}

#[test]
fn feedback_tiers() {
    let scoring = ScoringService::new();
    let gt = gt(90.0, 110.0); // range 20

    // diff 1 -> accuracy 0.95
    assert_eq!(scoring.instant_feedback(LineKind::Support, 91.0, &gt), Feedback::Excellent);
    // diff 5 -> accuracy 0.75
    assert_eq!(scoring.instant_feedback(LineKind::Support, 95.0, &gt), Feedback::Good);
    // diff 9 -> accuracy 0.55
    assert_eq!(scoring.instant_feedback(LineKind::Support, 99.0, &gt), Feedback::Fair);
    // diff 11 -> accuracy 0.45
    assert_eq!(scoring.instant_feedback(LineKind::Support, 101.0, &gt), Feedback::Poor);
    // resistance grades against its own level
    assert_eq!(scoring.instant_feedback(LineKind::Resistance, 109.0, &gt), Feedback::Excellent);
}

#[test]
fn perfect_placements_score_hundred() {
    let scoring = ScoringService::new();
    let gt = gt(90.0, 110.0);

    let mut placements = Placements::new();
    placements.record(LineKind::Support, 91.0);
    placements.record(LineKind::Support, 90.0);
    placements.record(LineKind::Resistance, 108.0);
    placements.record(LineKind::Resistance, 110.0);

    // The best placement per kind counts: min(1, 0) + min(2, 0) = 0.
    assert_eq!(scoring.panel_score(&placements, &gt), Some(100));
}

#[test]
fn imperfect_placements_scale_linearly() {
    let scoring = ScoringService::new();
    let gt = gt(90.0, 110.0);

    let mut placements = Placements::new();
    placements.record(LineKind::Support, 95.0); // diff 5
    placements.record(LineKind::Resistance, 110.0); // diff 0

    // accuracy = 1 - 5/20 = 0.75
    assert_eq!(scoring.panel_score(&placements, &gt), Some(75));
}

#[test]
fn pathological_placements_go_negative() {
    let scoring = ScoringService::new();
    let gt = gt(90.0, 110.0);

    let mut placements = Placements::new();
    placements.record(LineKind::Support, 150.0); // diff 60
    placements.record(LineKind::Resistance, 110.0);

    // accuracy = 1 - 60/20 = -2.0; the score is deliberately unclamped
    assert_eq!(scoring.panel_score(&placements, &gt), Some(-200));
}

#[test]
fn missing_placements_yield_no_score() {
    let scoring = ScoringService::new();
    let gt = gt(90.0, 110.0);

    let mut placements = Placements::new();
    assert_eq!(scoring.panel_score(&placements, &gt), None);

    placements.record(LineKind::Support, 90.0);
    assert_eq!(scoring.panel_score(&placements, &gt), None);
}

#[test]
fn degenerate_range_never_divides_by_zero() {
    let scoring = ScoringService::new();
    let flat = gt(100.0, 100.0);

    assert_eq!(scoring.instant_feedback(LineKind::Support, 100.0, &flat), Feedback::Excellent);
    assert_eq!(scoring.instant_feedback(LineKind::Support, 100.5, &flat), Feedback::Poor);

    let mut exact = Placements::new();
    exact.record(LineKind::Support, 100.0);
    exact.record(LineKind::Resistance, 100.0);
    assert_eq!(scoring.panel_score(&exact, &flat), Some(100));

    let mut off = Placements::new();
    off.record(LineKind::Support, 100.0);
    off.record(LineKind::Resistance, 101.0);
    assert_eq!(scoring.panel_score(&off, &flat), Some(0));
}

#[quickcheck]
fn score_ignores_placement_order(a: f32, b: f32) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return true;
    }
    let a = a % 200.0;
    let b = b % 200.0;

    let scoring = ScoringService::new();
    let gt = gt(90.0, 110.0);

    let mut forward = Placements::new();
    forward.record(LineKind::Support, a);
    forward.record(LineKind::Support, b);
    forward.record(LineKind::Resistance, 110.0);

    let mut backward = Placements::new();
    backward.record(LineKind::Support, b);
    backward.record(LineKind::Support, a);
    backward.record(LineKind::Resistance, 110.0);

    scoring.panel_score(&forward, &gt) == scoring.panel_score(&backward, &gt)
}
