use sr_trainer_wasm::domain::market_data::{BASE_PRICE, BODY_STEP, PanelGenerator, WICK_EXTENT};

#[test]
fn generates_requested_shape() {
    let mut generator = PanelGenerator::new(Some(1));
    let panels = generator.generate(10, 30);

    assert_eq!(panels.len(), 10);
    for panel in &panels {
        assert_eq!(panel.count(), 30);
        for (i, bar) in panel.bars().iter().enumerate() {
            assert_eq!(bar.index, i);
        }
    }
}

#[test]
fn bars_satisfy_wick_invariants() {
    let mut generator = PanelGenerator::new(Some(2));
    for panel in generator.generate(10, 30) {
        for bar in panel.bars() {
            let body_low = bar.ohlc.open.value().min(bar.ohlc.close.value());
            let body_high = bar.ohlc.open.value().max(bar.ohlc.close.value());
            assert!(bar.ohlc.low.value() <= body_low);
            assert!(bar.ohlc.high.value() >= body_high);
            assert!(bar.ohlc.is_valid());
        }
    }
}

#[test]
fn walk_stays_near_base_price() {
    // 30 bars of at most +-2*BODY_STEP drift plus one wick cannot leave
    // this envelope.
    let limit = BASE_PRICE + 30.0 * 2.0 * BODY_STEP + WICK_EXTENT;
    let mut generator = PanelGenerator::new(Some(3));
    for panel in generator.generate(10, 30) {
        let (min, max) = panel.price_range().unwrap();
        assert!(max.value() < limit);
        assert!(min.value() > BASE_PRICE - (limit - BASE_PRICE));
    }
}

#[test]
fn same_seed_reproduces_panels() {
    let panels_a = PanelGenerator::new(Some(42)).generate(5, 20);
    let panels_b = PanelGenerator::new(Some(42)).generate(5, 20);
    assert_eq!(panels_a, panels_b);
}

#[test]
fn consecutive_bars_chain_on_close() {
    // Each bar opens within one body step of the previous close.
    let mut generator = PanelGenerator::new(Some(4));
    for panel in generator.generate(5, 30) {
        for pair in panel.bars().windows(2) {
            let gap = (pair[1].ohlc.open.value() - pair[0].ohlc.close.value()).abs();
            assert!(gap <= BODY_STEP);
        }
    }
}
