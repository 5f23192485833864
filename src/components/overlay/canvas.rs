// 2D-context rendering of the overlay shapes.

use super::*;
use crate::components::web_helpers::OVERLAY_CANVAS_ID;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

pub struct OverlayCanvas {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl OverlayCanvas {
    pub fn find() -> Option<Self> {
        let canvas: HtmlCanvasElement = window()?
            .document()?
            .get_element_by_id(OVERLAY_CANVAS_ID)?
            .dyn_into()
            .ok()?;
        let context: CanvasRenderingContext2d =
            canvas.get_context("2d").ok()??.dyn_into().ok()?;
        Some(Self { canvas, context })
    }

    /// Sizes the backing store to CSS size × devicePixelRatio and scales the
    /// context so drawing stays in CSS pixels. Run once at mount; later
    /// resizes are not tracked.
    pub fn adjust_for_hidpi(&self) {
        let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let rect = self.canvas.get_bounding_client_rect();
        let (width, height) = hidpi_backing_size(Size::new(rect.width(), rect.height()), dpr);
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let _ = self.context.scale(dpr, dpr);
    }

    pub fn clear(&self) {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    pub fn draw_edge_feedback(&self, direction: Direction, size: Size) {
        let band = edge_band(direction, size);
        self.context.set_fill_style_str(EDGE_BAND_FILL);
        self.context
            .fill_rect(band.x, band.y, band.width, band.height);

        let [first, tip, last] = arrow_points(direction, size);
        self.context.set_fill_style_str(ARROW_FILL);
        self.context.begin_path();
        self.context.move_to(first.x, first.y);
        self.context.line_to(tip.x, tip.y);
        self.context.line_to(last.x, last.y);
        self.context.close_path();
        self.context.fill();
    }

    pub fn draw_readout(&self, tap: Point, size: Size, text: &str) {
        self.context.set_font(READOUT_FONT);
        let text_width = self
            .context
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or(0.0);
        let anchor = readout_anchor(tap, size, text_width);
        self.context.set_fill_style_str(READOUT_FILL);
        let _ = self.context.fill_text(text, anchor.x, anchor.y);
    }
}
