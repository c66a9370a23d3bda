use crate::domain::game::entities::Placements;
use crate::domain::game::value_objects::{Feedback, GroundTruth, LineKind};
use crate::domain::market_data::Panel;

/// Domain service for grading placements against a panel's ground truth.
#[derive(Debug, Clone, Default)]
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// True support/resistance levels of a panel.
    ///
    /// Both levels are extrema over the COMBINED set of every bar's low and
    /// high. The panel's visible bounds use min(low)/max(high) directly;
    /// the two computations are kept separate on purpose.
    pub fn ground_truth(&self, panel: &Panel) -> Option<GroundTruth> {
        if panel.is_empty() {
            return None;
        }

        let first = panel.bars()[0].ohlc;
        let mut support = first.low.value().min(first.high.value());
        let mut resistance = first.low.value().max(first.high.value());

        for bar in panel.bars() {
            for level in [bar.ohlc.low.value(), bar.ohlc.high.value()] {
                if level < support {
                    support = level;
                }
                if level > resistance {
                    resistance = level;
                }
            }
        }

        Some(GroundTruth::new(support.into(), resistance.into()))
    }

    /// Grade a single placement for on-click feedback.
    pub fn instant_feedback(&self, kind: LineKind, placed: f32, gt: &GroundTruth) -> Feedback {
        let diff = (placed - gt.level_for(kind).value()).abs();
        let accuracy = Self::accuracy(diff, gt.range());

        if accuracy > 0.9 {
            Feedback::Excellent
        } else if accuracy > 0.7 {
            Feedback::Good
        } else if accuracy > 0.5 {
            Feedback::Fair
        } else {
            Feedback::Poor
        }
    }

    /// Final panel score on a 100-point scale.
    ///
    /// Per line kind the best (minimum) absolute difference of the placed
    /// values counts; the two minima sum into the total error. Not clamped,
    /// so pathological inputs can leave 0..100. `None` when either kind has
    /// no placements; the session gating keeps that unreachable.
    pub fn panel_score(&self, placements: &Placements, gt: &GroundTruth) -> Option<i32> {
        let support_diff = placements.min_diff(LineKind::Support, gt.support.value())?;
        let resistance_diff = placements.min_diff(LineKind::Resistance, gt.resistance.value())?;

        let total_diff = support_diff + resistance_diff;
        let accuracy = Self::accuracy(total_diff, gt.range());

        Some((accuracy * 100.0).round() as i32)
    }

    /// Normalized closeness. A flat panel (zero range) grades an exact hit
    /// as perfect and everything else as a miss, avoiding division by zero.
    fn accuracy(diff: f32, range: f32) -> f32 {
        if range == 0.0 {
            if diff == 0.0 { 1.0 } else { 0.0 }
        } else {
            1.0 - diff / range
        }
    }
}
