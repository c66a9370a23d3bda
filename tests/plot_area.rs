use quickcheck_macros::quickcheck;
use sr_trainer_wasm::domain::game::PlotArea;
use sr_trainer_wasm::domain::market_data::{Bar, OHLC, Panel, Price};

const AREA_TOP: f32 = 10.0;
const AREA_HEIGHT: f32 = 400.0;

fn panel_with_bounds(low: f32, high: f32) -> Panel {
    let mid = (low + high) / 2.0;
    Panel::new(vec![Bar::new(
        0,
        OHLC::new(Price::from(mid), Price::from(high), Price::from(low), Price::from(mid)),
    )])
}

#[test]
fn mapping_is_affine_in_pixel_y() {
    let panel = panel_with_bounds(90.0, 110.0);
    let area = PlotArea::for_panel(&panel, AREA_TOP, AREA_HEIGHT).unwrap();

    assert_eq!(area.y_to_price(AREA_TOP), 110.0);
    assert_eq!(area.y_to_price(AREA_TOP + AREA_HEIGHT), 90.0);
    assert_eq!(area.y_to_price(AREA_TOP + AREA_HEIGHT / 2.0), 100.0);
}

#[test]
fn bounds_come_from_panel_range() {
    let panel = panel_with_bounds(93.5, 107.25);
    let area = PlotArea::for_panel(&panel, 0.0, 100.0).unwrap();
    assert_eq!(area.min_price, 93.5);
    assert_eq!(area.max_price, 107.25);
}

#[test]
fn zero_height_area_is_rejected() {
    let panel = panel_with_bounds(90.0, 110.0);
    assert!(PlotArea::for_panel(&panel, AREA_TOP, 0.0).is_none());
    assert!(PlotArea::for_panel(&panel, AREA_TOP, -5.0).is_none());
}

#[test]
fn empty_panel_is_rejected() {
    let panel = Panel::new(Vec::new());
    assert!(PlotArea::for_panel(&panel, AREA_TOP, AREA_HEIGHT).is_none());
}

#[quickcheck]
fn pixel_roundtrip_within_half_pixel(y: f32) -> bool {
    let y = if y.is_finite() { y.abs() % AREA_HEIGHT + AREA_TOP } else { AREA_TOP };
    let panel = panel_with_bounds(90.0, 110.0);
    let area = PlotArea::for_panel(&panel, AREA_TOP, AREA_HEIGHT).unwrap();

    let roundtrip = area.price_to_y(area.y_to_price(y));
    (roundtrip - y).abs() <= 0.5
}

#[quickcheck]
fn prices_stay_inside_visible_bounds(y: f32) -> bool {
    let y = if y.is_finite() { y.abs() % AREA_HEIGHT + AREA_TOP } else { AREA_TOP };
    let panel = panel_with_bounds(90.0, 110.0);
    let area = PlotArea::for_panel(&panel, AREA_TOP, AREA_HEIGHT).unwrap();

    let price = area.y_to_price(y);
    (90.0..=110.0).contains(&price)
}
