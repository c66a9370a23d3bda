use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Bar, OHLC, Panel, Price};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Starting price for every generated session.
pub const BASE_PRICE: f32 = 100.0;
/// Maximum absolute open/close step per bar.
pub const BODY_STEP: f32 = 5.0;
/// Maximum wick extension beyond the candle body.
pub const WICK_EXTENT: f32 = 5.0;

/// Domain service - synthetic panel generator
///
/// Produces bounded random-walk panels. The random source is an owned,
/// optionally seeded instance so identical seeds reproduce identical
/// sessions.
pub struct PanelGenerator {
    rng: StdRng,
}

impl PanelGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate `panel_count` panels of `bars_per_panel` bars each.
    ///
    /// The walk restarts at `BASE_PRICE` for every panel; within a panel
    /// each bar opens near the previous close.
    pub fn generate(&mut self, panel_count: usize, bars_per_panel: usize) -> Vec<Panel> {
        let panels: Vec<Panel> =
            (0..panel_count).map(|_| self.generate_panel(bars_per_panel)).collect();

        get_logger().debug(
            LogComponent::Domain("PanelGenerator"),
            &format!("Generated {} panels x {} bars", panel_count, bars_per_panel),
        );

        panels
    }

    fn generate_panel(&mut self, bars_per_panel: usize) -> Panel {
        let mut price = BASE_PRICE;
        let mut bars = Vec::with_capacity(bars_per_panel);

        for index in 0..bars_per_panel {
            let bar = self.next_bar(index, price);
            price = bar.ohlc.close.value();
            bars.push(bar);
        }

        Panel::new(bars)
    }

    fn next_bar(&mut self, index: usize, price: f32) -> Bar {
        let open = price + self.rng.gen_range(-BODY_STEP..BODY_STEP);
        let close = open + self.rng.gen_range(-BODY_STEP..BODY_STEP);
        let high = open.max(close) + self.rng.gen_range(0.0..WICK_EXTENT);
        let low = open.min(close) - self.rng.gen_range(0.0..WICK_EXTENT);

        Bar::new(
            index,
            OHLC::new(Price::from(open), Price::from(high), Price::from(low), Price::from(close)),
        )
    }
}
