pub use super::value_objects::{OHLC, Price};
use serde::{Deserialize, Serialize};

/// Domain entity - Bar
///
/// One time step of a synthetic panel. `index` is the bar's position in the
/// panel sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub index: usize,
    pub ohlc: OHLC,
}

impl Bar {
    pub fn new(index: usize, ohlc: OHLC) -> Self {
        Self { index, ohlc }
    }

    pub fn is_bullish(&self) -> bool {
        self.ohlc.close > self.ohlc.open
    }

    pub fn is_bearish(&self) -> bool {
        self.ohlc.close < self.ohlc.open
    }

    pub fn body_size(&self) -> Price {
        Price::from((self.ohlc.close.value() - self.ohlc.open.value()).abs())
    }
}

/// Domain entity - Panel
///
/// An ordered, fixed-length bar sequence shown to the player. Immutable
/// after generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    bars: Vec<Bar>,
}

impl Panel {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn count(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Visible price bounds of the panel: lowest low and highest high.
    /// These are the bounds the coordinate mapping works against.
    pub fn price_range(&self) -> Option<(Price, Price)> {
        if self.bars.is_empty() {
            return None;
        }

        let mut min_price = self.bars[0].ohlc.low;
        let mut max_price = self.bars[0].ohlc.high;

        for bar in &self.bars {
            if bar.ohlc.low < min_price {
                min_price = bar.ohlc.low;
            }
            if bar.ohlc.high > max_price {
                max_price = bar.ohlc.high;
            }
        }

        Some((min_price, max_price))
    }
}
