use crate::domain::market_data::{Panel, Price};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, Display as StrumDisplay};

/// Value Object - Line kind the player can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum LineKind {
    #[strum(serialize = "support")]
    #[serde(rename = "support")]
    Support,

    #[strum(serialize = "resistance")]
    #[serde(rename = "resistance")]
    Resistance,
}

/// Value Object - Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GamePhase {
    #[display(fmt = "Playing")]
    Playing,
    #[display(fmt = "Finished")]
    Finished,
}

/// Value Object - Instantaneous placement feedback tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
pub enum Feedback {
    #[display(fmt = "poor")]
    Poor,
    #[display(fmt = "fair")]
    Fair,
    #[display(fmt = "good")]
    Good,
    #[display(fmt = "excellent")]
    Excellent,
}

/// Value Object - True support/resistance levels for a panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTruth {
    pub support: Price,
    pub resistance: Price,
}

impl GroundTruth {
    pub fn new(support: Price, resistance: Price) -> Self {
        Self { support, resistance }
    }

    pub fn level_for(&self, kind: LineKind) -> Price {
        match kind {
            LineKind::Support => self.support,
            LineKind::Resistance => self.resistance,
        }
    }

    /// Price band between the two levels. Zero only for an all-flat panel.
    pub fn range(&self) -> f32 {
        self.resistance.value() - self.support.value()
    }
}

/// Value Object - Plot area
///
/// Vertical pixel extent of a panel's display area together with the
/// panel-local visible price bounds. Owns the pixel-to-price mapping for
/// pointer clicks; the renderer uses the inverse for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub top: f32,
    pub height: f32,
    pub min_price: f32,
    pub max_price: f32,
}

impl PlotArea {
    /// Build the plot area for a panel. `None` when the panel is empty or
    /// the display area has no vertical extent.
    pub fn for_panel(panel: &Panel, top: f32, height: f32) -> Option<Self> {
        if height <= 0.0 {
            return None;
        }
        let (min_price, max_price) = panel.price_range()?;
        Some(Self { top, height, min_price: min_price.value(), max_price: max_price.value() })
    }

    pub fn price_range(&self) -> f32 {
        self.max_price - self.min_price
    }

    /// Convert a vertical pixel offset to a price.
    pub fn y_to_price(&self, y: f32) -> f32 {
        self.max_price - ((y - self.top) / self.height) * self.price_range()
    }

    /// Convert a price back to a vertical pixel offset.
    pub fn price_to_y(&self, price: f32) -> f32 {
        if self.price_range() == 0.0 {
            return self.top + self.height / 2.0;
        }
        let normalized = (price - self.min_price) / self.price_range();
        self.top + self.height * (1.0 - normalized) // Invert Y
    }
}
