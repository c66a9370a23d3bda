use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - Price
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Price(f32);

impl Price {
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - OHLC quadruple for one time step
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct OHLC {
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl OHLC {
    /// Checks OHLC consistency: the wicks must enclose the body.
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
    }

    /// Lower end of the candle body.
    pub fn body_low(&self) -> Price {
        Price::from(self.open.value().min(self.close.value()))
    }

    /// Upper end of the candle body.
    pub fn body_high(&self) -> Price {
        Price::from(self.open.value().max(self.close.value()))
    }
}
