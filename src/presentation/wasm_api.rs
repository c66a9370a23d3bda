use std::str::FromStr;
use wasm_bindgen::prelude::*;

use crate::domain::{
    game::{DEFAULT_BARS_PER_PANEL, DEFAULT_PANEL_COUNT, GameSession, LineKind, PlotArea},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::rendering::CanvasRenderer;

/// WASM API for driving the trainer from JavaScript
///
/// Thin bridge only: every game rule lives in the domain session. Each
/// operation returns the updated observable state as a JSON snapshot.
#[wasm_bindgen]
pub struct TrainerApi {
    session: GameSession,
}

#[wasm_bindgen]
impl TrainerApi {
    /// Start a session. Zero counts are rejected; a seed reproduces the
    /// exact panel sequence.
    #[wasm_bindgen(constructor)]
    pub fn new(
        panel_count: Option<u32>,
        bars_per_panel: Option<u32>,
        seed: Option<u32>,
    ) -> Result<TrainerApi, JsValue> {
        let panel_count = panel_count.map(|n| n as usize).unwrap_or(DEFAULT_PANEL_COUNT);
        let bars_per_panel = bars_per_panel.map(|n| n as usize).unwrap_or(DEFAULT_BARS_PER_PANEL);

        let session = GameSession::start(panel_count, bars_per_panel, seed.map(u64::from))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        get_logger().info(
            LogComponent::Presentation("TrainerApi"),
            &format!("🎯 Trainer session ready: {} panels", panel_count),
        );

        Ok(Self { session })
    }

    /// Arm a line kind ("support" or "resistance"). Unknown kinds are
    /// ignored, matching the no-op policy for invalid transitions.
    #[wasm_bindgen(js_name = selectLine)]
    pub fn select_line(&mut self, kind: &str) -> String {
        if let Ok(kind) = LineKind::from_str(kind) {
            self.session.select_line(kind);
        }
        self.state()
    }

    /// Interpret a click at `pixel_y` inside the given display area.
    #[wasm_bindgen(js_name = place)]
    pub fn place(&mut self, pixel_y: f32, area_top: f32, area_height: f32) -> String {
        self.session.place(pixel_y, area_top, area_height);
        self.state()
    }

    /// Score the current panel and move to the next one.
    #[wasm_bindgen(js_name = advance)]
    pub fn advance(&mut self) -> String {
        self.session.advance();
        self.state()
    }

    /// Return to the initial session state over the same panels.
    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&mut self) -> String {
        self.session.reset();
        self.state()
    }

    /// Observable session state as JSON.
    #[wasm_bindgen(js_name = state)]
    pub fn state(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Bars of the active panel as JSON, for callers drawing their own chart.
    #[wasm_bindgen(js_name = activePanel)]
    pub fn active_panel(&self) -> String {
        serde_json::to_string(self.session.active_panel().bars())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Mean of the recorded panel scores, once any exist.
    #[wasm_bindgen(js_name = averageScore)]
    pub fn average_score(&self) -> Option<f64> {
        self.session.average_score()
    }

    /// Draw the active panel and placed lines onto a canvas, using the full
    /// canvas height as the display area.
    #[wasm_bindgen(js_name = renderToCanvas)]
    pub fn render_to_canvas(
        &self,
        canvas_id: &str,
        width: u32,
        height: u32,
    ) -> Result<(), JsValue> {
        let panel = self.session.active_panel();
        let area = PlotArea::for_panel(panel, 0.0, height as f32)
            .ok_or_else(|| JsValue::from_str("degenerate display area"))?;

        CanvasRenderer::new(canvas_id.to_string(), width, height).render_panel(
            panel,
            self.session.placements(),
            &area,
        )
    }
}
