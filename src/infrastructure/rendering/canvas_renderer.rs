use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    game::{LineKind, Placements, PlotArea},
    logging::{LogComponent, get_logger},
    market_data::{Bar, Panel},
};

const BACKGROUND_COLOR: &str = "#1a1a1a";
const WICK_COLOR: &str = "#888888";
const BULLISH_COLOR: &str = "#00ff88";
const BEARISH_COLOR: &str = "#ff4444";
const SUPPORT_LINE_COLOR: &str = "#44ddff";
const RESISTANCE_LINE_COLOR: &str = "#ffaa00";
const SIDE_PADDING: f64 = 10.0;

/// Canvas 2D renderer for trainer panels - Infrastructure implementation
///
/// Pure presentation: prices map to pixels through the same `PlotArea` the
/// session uses to interpret clicks, so drawn levels and graded levels
/// always agree.
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

impl CanvasRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    /// Get canvas element and context
    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window not available"))?;
        let document =
            window.document().ok_or_else(|| JsValue::from_str("Document not available"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Failed to get canvas element"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Render one panel with the player's placed lines.
    pub fn render_panel(
        &self,
        panel: &Panel,
        placements: &Placements,
        area: &PlotArea,
    ) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;

        // Clear and paint the dark background
        context.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        context.set_fill_style(&JsValue::from(BACKGROUND_COLOR));
        context.fill_rect(0.0, 0.0, self.width as f64, self.height as f64);

        let bars = panel.bars();
        if bars.is_empty() {
            return Ok(());
        }

        let chart_width = self.width as f64 - SIDE_PADDING * 2.0;
        let candle_width = chart_width / bars.len() as f64;

        for (i, bar) in bars.iter().enumerate() {
            let x = SIDE_PADDING + (i as f64 * candle_width) + (candle_width / 2.0);
            self.render_bar(&context, bar, x, candle_width, area)?;
        }

        self.render_placed_lines(&context, placements, area)?;

        get_logger().debug(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Rendered panel with {} bars", bars.len()),
        );

        Ok(())
    }

    fn render_bar(
        &self,
        context: &CanvasRenderingContext2d,
        bar: &Bar,
        x: f64,
        candle_width: f64,
        area: &PlotArea,
    ) -> Result<(), JsValue> {
        let high_y = area.price_to_y(bar.ohlc.high.value()) as f64;
        let low_y = area.price_to_y(bar.ohlc.low.value()) as f64;
        let open_y = area.price_to_y(bar.ohlc.open.value()) as f64;
        let close_y = area.price_to_y(bar.ohlc.close.value()) as f64;

        // Wick (high-low)
        context.set_stroke_style(&JsValue::from(WICK_COLOR));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(x, high_y);
        context.line_to(x, low_y);
        context.stroke();

        // Body
        let color = if bar.is_bearish() { BEARISH_COLOR } else { BULLISH_COLOR };
        let body_width = candle_width * 0.6;
        let body_top = open_y.min(close_y);
        let body_height = (open_y - close_y).abs().max(1.0);

        context.set_fill_style(&JsValue::from(color));
        context.fill_rect(x - body_width / 2.0, body_top, body_width, body_height);

        Ok(())
    }

    fn render_placed_lines(
        &self,
        context: &CanvasRenderingContext2d,
        placements: &Placements,
        area: &PlotArea,
    ) -> Result<(), JsValue> {
        let dash = js_sys::Array::of2(&JsValue::from_f64(6.0), &JsValue::from_f64(4.0));
        context.set_line_dash(&dash)?;
        context.set_line_width(2.0);

        for (kind, color) in [
            (LineKind::Support, SUPPORT_LINE_COLOR),
            (LineKind::Resistance, RESISTANCE_LINE_COLOR),
        ] {
            context.set_stroke_style(&JsValue::from(color));
            for price in placements.values(kind) {
                let y = area.price_to_y(*price) as f64;
                context.begin_path();
                context.move_to(0.0, y);
                context.line_to(self.width as f64, y);
                context.stroke();
            }
        }

        // Back to solid lines for subsequent draws
        context.set_line_dash(&js_sys::Array::new())?;

        Ok(())
    }
}
