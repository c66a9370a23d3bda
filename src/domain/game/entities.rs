use crate::domain::errors::{AppError, SessionResult};
use crate::domain::game::services::ScoringService;
use crate::domain::game::value_objects::{GamePhase, GroundTruth, LineKind, PlotArea};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{Panel, PanelGenerator};
use serde::{Deserialize, Serialize};

/// Default number of panels per session.
pub const DEFAULT_PANEL_COUNT: usize = 10;
/// Default number of bars per panel.
pub const DEFAULT_BARS_PER_PANEL: usize = 30;
/// Placement slots per line kind.
pub const MAX_PLACEMENTS: usize = 2;

/// Domain entity - Placements
///
/// The player's placed price levels for the current panel, at most
/// `MAX_PLACEMENTS` per line kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placements {
    support: Vec<f32>,
    resistance: Vec<f32>,
}

impl Placements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a placement. Once both slots are taken, the first value stays
    /// and every later placement overwrites the second slot. Reference
    /// behavior: "first + newest", not a sliding window.
    pub fn record(&mut self, kind: LineKind, price: f32) {
        let values = self.values_mut(kind);
        if values.len() < MAX_PLACEMENTS {
            values.push(price);
        } else {
            values[MAX_PLACEMENTS - 1] = price;
        }
    }

    pub fn values(&self, kind: LineKind) -> &[f32] {
        match kind {
            LineKind::Support => &self.support,
            LineKind::Resistance => &self.resistance,
        }
    }

    pub fn count(&self, kind: LineKind) -> usize {
        self.values(kind).len()
    }

    /// Both line kinds hold a full set of placements.
    pub fn is_complete(&self) -> bool {
        self.support.len() >= MAX_PLACEMENTS && self.resistance.len() >= MAX_PLACEMENTS
    }

    /// Best absolute distance of any placed value to `level`.
    pub fn min_diff(&self, kind: LineKind, level: f32) -> Option<f32> {
        self.values(kind)
            .iter()
            .map(|placed| (placed - level).abs())
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn clear(&mut self) {
        self.support.clear();
        self.resistance.clear();
    }

    fn values_mut(&mut self, kind: LineKind) -> &mut Vec<f32> {
        match kind {
            LineKind::Support => &mut self.support,
            LineKind::Resistance => &mut self.resistance,
        }
    }
}

/// Observable session state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub current_panel_index: usize,
    pub phase: GamePhase,
    pub scores: Vec<i32>,
    pub feedback_text: String,
    pub placements: Placements,
    pub selected_line: Option<LineKind>,
    pub ground_truth: GroundTruth,
}

/// Domain entity - Game session
///
/// Owns the panel sequence and the whole trainer state machine. Panels and
/// their ground truth are read-only once generated; every transition below
/// is total and treats invalid input as a no-op.
#[derive(Debug, Clone)]
pub struct GameSession {
    panels: Vec<Panel>,
    scoring: ScoringService,
    ground_truth: GroundTruth,
    placements: Placements,
    selected_line: Option<LineKind>,
    current: usize,
    phase: GamePhase,
    scores: Vec<i32>,
    feedback_text: String,
}

impl GameSession {
    /// Build a session over pre-generated panels.
    pub fn new(panels: Vec<Panel>) -> SessionResult<Self> {
        if panels.is_empty() {
            return Err(AppError::ValidationError("session needs at least one panel".to_string()));
        }
        if panels.iter().any(|p| p.is_empty()) {
            return Err(AppError::ValidationError("panels must contain bars".to_string()));
        }

        let scoring = ScoringService::new();
        let ground_truth = scoring
            .ground_truth(&panels[0])
            .ok_or_else(|| AppError::ValidationError("first panel has no bars".to_string()))?;

        Ok(Self {
            panels,
            scoring,
            ground_truth,
            placements: Placements::new(),
            selected_line: None,
            current: 0,
            phase: GamePhase::Playing,
            scores: Vec::new(),
            feedback_text: String::new(),
        })
    }

    /// Generate panels and start a fresh session. Passing a seed reproduces
    /// the exact same panel sequence.
    pub fn start(
        panel_count: usize,
        bars_per_panel: usize,
        seed: Option<u64>,
    ) -> SessionResult<Self> {
        if panel_count == 0 || bars_per_panel == 0 {
            return Err(AppError::ValidationError(
                "panel count and bars per panel must be positive".to_string(),
            ));
        }

        let mut generator = PanelGenerator::new(seed);
        let session = Self::new(generator.generate(panel_count, bars_per_panel))?;

        get_logger().info(
            LogComponent::Domain("GameSession"),
            &format!("Session started: {} panels x {} bars", panel_count, bars_per_panel),
        );

        Ok(session)
    }

    // --- transitions -----------------------------------------------------

    /// Arm a line kind for subsequent clicks. The armed kind carries over
    /// when the session advances to the next panel.
    pub fn select_line(&mut self, kind: LineKind) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.selected_line = Some(kind);
    }

    /// Interpret a click at `pixel_y` within the display area as a price
    /// placement for the armed line kind. No-op without an armed kind, in
    /// the finished phase, or for a degenerate display area.
    pub fn place(&mut self, pixel_y: f32, area_top: f32, area_height: f32) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(kind) = self.selected_line else {
            return;
        };
        let Some(area) = PlotArea::for_panel(self.active_panel(), area_top, area_height) else {
            crate::log_warn!(LogComponent::Domain("GameSession"), "Ignoring click on degenerate display area");
            return;
        };

        let price = area.y_to_price(pixel_y);
        self.placements.record(kind, price);

        let feedback = self.scoring.instant_feedback(kind, price, &self.ground_truth);
        self.feedback_text = format!("{}: {}", kind, feedback);
    }

    /// Score the current panel and move on. Gated on both line kinds
    /// holding a full set of placements; the UI mirrors this gate but the
    /// session enforces it regardless.
    pub fn advance(&mut self) {
        if self.phase != GamePhase::Playing || !self.placements.is_complete() {
            return;
        }
        let Some(score) = self.scoring.panel_score(&self.placements, &self.ground_truth) else {
            return;
        };

        self.scores.push(score);
        get_logger().debug(
            LogComponent::Domain("GameSession"),
            &format!("Panel {} scored {}", self.current, score),
        );

        if self.current + 1 == self.panels.len() {
            self.phase = GamePhase::Finished;
            get_logger().info(
                LogComponent::Domain("GameSession"),
                &format!("Session finished after {} panels", self.panels.len()),
            );
            return;
        }

        self.current += 1;
        self.placements.clear();
        self.feedback_text.clear();
        if let Some(gt) = self.scoring.ground_truth(self.active_panel()) {
            self.ground_truth = gt;
        }
    }

    /// Return to the initial state. Panels are session-lifetime-fixed, so
    /// only the state resets; the data does not regenerate.
    pub fn reset(&mut self) {
        self.current = 0;
        self.phase = GamePhase::Playing;
        self.scores.clear();
        self.placements.clear();
        self.selected_line = None;
        self.feedback_text.clear();
        if let Some(gt) = self.scoring.ground_truth(self.active_panel()) {
            self.ground_truth = gt;
        }

        get_logger().debug(LogComponent::Domain("GameSession"), "Session reset");
    }

    // --- observers -------------------------------------------------------

    pub fn active_panel(&self) -> &Panel {
        &self.panels[self.current]
    }

    pub fn current_panel_index(&self) -> usize {
        self.current
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }

    pub fn feedback_text(&self) -> &str {
        &self.feedback_text
    }

    pub fn selected_line(&self) -> Option<LineKind> {
        self.selected_line
    }

    pub fn ground_truth(&self) -> &GroundTruth {
        &self.ground_truth
    }

    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// The advance gate, exposed so the UI can disable its button.
    pub fn can_advance(&self) -> bool {
        self.phase == GamePhase::Playing && self.placements.is_complete()
    }

    /// Mean of the recorded panel scores.
    pub fn average_score(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().map(|s| *s as f64).sum::<f64>() / self.scores.len() as f64)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_panel_index: self.current,
            phase: self.phase,
            scores: self.scores.clone(),
            feedback_text: self.feedback_text.clone(),
            placements: self.placements.clone(),
            selected_line: self.selected_line,
            ground_truth: self.ground_truth,
        }
    }
}
