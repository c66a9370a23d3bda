use sr_trainer_wasm::domain::game::{
    DEFAULT_BARS_PER_PANEL, DEFAULT_PANEL_COUNT, GamePhase, GameSession, LineKind, PlotArea,
    ScoringService,
};

const AREA_TOP: f32 = 10.0;
const AREA_HEIGHT: f32 = 400.0;

/// Play a complete seeded session, clicking exactly on the true levels of
/// every panel, and check the aggregate outcome.
#[test]
fn perfect_session_averages_one_hundred() {
    let mut session = GameSession::start(DEFAULT_PANEL_COUNT, DEFAULT_BARS_PER_PANEL, Some(99))
        .expect("session starts");
    let scoring = ScoringService::new();

    for _ in 0..DEFAULT_PANEL_COUNT {
        let gt = scoring.ground_truth(session.active_panel()).expect("panel has bars");
        let area = PlotArea::for_panel(session.active_panel(), AREA_TOP, AREA_HEIGHT)
            .expect("display area is valid");
        let support_y = area.price_to_y(gt.support.value());
        let resistance_y = area.price_to_y(gt.resistance.value());

        session.select_line(LineKind::Support);
        session.place(support_y, AREA_TOP, AREA_HEIGHT);
        session.place(support_y, AREA_TOP, AREA_HEIGHT);
        session.select_line(LineKind::Resistance);
        session.place(resistance_y, AREA_TOP, AREA_HEIGHT);
        session.place(resistance_y, AREA_TOP, AREA_HEIGHT);

        assert!(session.can_advance());
        session.advance();
    }

    assert_eq!(session.phase(), GamePhase::Finished);
    assert_eq!(session.scores().len(), DEFAULT_PANEL_COUNT);
    assert!(session.scores().iter().all(|s| *s == 100));
    assert_eq!(session.average_score(), Some(100.0));
}

#[test]
fn seeded_sessions_share_ground_truth() {
    let session_a = GameSession::start(3, 20, Some(5)).expect("session starts");
    let session_b = GameSession::start(3, 20, Some(5)).expect("session starts");

    assert_eq!(session_a.ground_truth(), session_b.ground_truth());
    assert_eq!(session_a.active_panel(), session_b.active_panel());
}

#[test]
fn average_is_none_before_any_score() {
    let session = GameSession::start(2, 10, Some(1)).expect("session starts");
    assert!(session.average_score().is_none());
}
