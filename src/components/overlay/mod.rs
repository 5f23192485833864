//! Transient feedback drawn on a transparent canvas over the playback
//! element: edge shading with an arrow after navigation taps, and an
//! optional coordinate readout after centre taps.
//!
//! Shapes are computed here in CSS pixels; `canvas.rs` only replays them on
//! the 2D context.

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::*;

use crate::slideshow::{Direction, Point, Size, HOT_ZONE_DIVISIONS};

/// How long feedback stays on the overlay.
pub const OVERLAY_CLEAR_MS: u32 = 3_000;

pub const ARROW_WIDTH: f64 = 40.0;
pub const ARROW_HEIGHT: f64 = 30.0;
pub const ARROW_FILL: &str = "rgba(255, 255, 255, 0.82)";
pub const EDGE_BAND_FILL: &str = "rgba(73, 73, 73, 0.65)";
pub const READOUT_FILL: &str = "rgba(255, 255, 255, 0.9)";
pub const READOUT_FONT: &str = "14px sans-serif";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The shaded column for the tapped edge: one eighth of the width, full height.
pub fn edge_band(direction: Direction, size: Size) -> Rect {
    let width = size.width / HOT_ZONE_DIVISIONS;
    let x = match direction {
        Direction::Back => 0.0,
        Direction::Forward => size.width - width,
    };
    Rect {
        x,
        y: 0.0,
        width,
        height: size.height,
    }
}

/// Triangle pointing toward the tapped edge, centred in its eighth.
pub fn arrow_points(direction: Direction, size: Size) -> [Point; 3] {
    let centre_x = match direction {
        Direction::Back => size.width / 16.0,
        Direction::Forward => size.width * 15.0 / 16.0,
    };
    let left = centre_x - ARROW_WIDTH / 2.0;
    let right = left + ARROW_WIDTH;
    let top = (size.height - ARROW_HEIGHT) / 2.0;
    let middle = top + ARROW_HEIGHT / 2.0;
    let bottom = top + ARROW_HEIGHT;
    match direction {
        Direction::Back => [
            Point::new(right, top),
            Point::new(left, middle),
            Point::new(right, bottom),
        ],
        Direction::Forward => [
            Point::new(left, top),
            Point::new(right, middle),
            Point::new(left, bottom),
        ],
    }
}

/// Backing-store size for a canvas shown at `css` size on a display with the
/// given device pixel ratio. Non-positive ratios count as 1.
pub fn hidpi_backing_size(css: Size, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    (
        (css.width * dpr).round().max(0.0) as u32,
        (css.height * dpr).round().max(0.0) as u32,
    )
}

pub fn readout_text(x_percent: f64, y_percent: f64) -> String {
    format!("X: {x_percent:.1}%, Y: {y_percent:.1}%")
}

/// Where to anchor the readout: just right of and above the tap, pulled
/// back inside the element when that would overflow.
pub fn readout_anchor(tap: Point, size: Size, text_width: f64) -> Point {
    const OFFSET: f64 = 12.0;
    const LINE_HEIGHT: f64 = 16.0;
    let mut x = tap.x + OFFSET;
    if x + text_width > size.width {
        x = (tap.x - OFFSET - text_width).max(0.0);
    }
    let y = (tap.y - OFFSET).max(LINE_HEIGHT);
    Point::new(x, y)
}

/// Scales the canvas for the display once, at mount.
#[cfg(target_arch = "wasm32")]
pub fn prepare_overlay() {
    if let Some(canvas) = OverlayCanvas::find() {
        canvas.adjust_for_hidpi();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prepare_overlay() {}

#[cfg(target_arch = "wasm32")]
pub fn paint_edge_feedback(direction: Direction, size: Size) {
    if let Some(canvas) = OverlayCanvas::find() {
        canvas.clear();
        canvas.draw_edge_feedback(direction, size);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn paint_edge_feedback(_direction: Direction, _size: Size) {}

#[cfg(target_arch = "wasm32")]
pub fn paint_readout(tap: Point, size: Size, text: &str) {
    if let Some(canvas) = OverlayCanvas::find() {
        canvas.clear();
        canvas.draw_readout(tap, size, text);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn paint_readout(_tap: Point, _size: Size, _text: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn clear_overlay() {
    if let Some(canvas) = OverlayCanvas::find() {
        canvas.clear();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_overlay() {}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 800.0,
        height: 400.0,
    };

    #[test]
    fn edge_bands_cover_outer_eighths() {
        assert_eq!(
            edge_band(Direction::Back, SIZE),
            Rect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 400.0
            }
        );
        assert_eq!(edge_band(Direction::Forward, SIZE).x, 700.0);
    }

    #[test]
    fn arrows_are_centred_in_their_eighth_and_point_outward() {
        let back = arrow_points(Direction::Back, SIZE);
        assert_eq!(back[1], Point::new(30.0, 200.0));
        assert_eq!(back[0], Point::new(70.0, 185.0));
        assert_eq!(back[2], Point::new(70.0, 215.0));

        let forward = arrow_points(Direction::Forward, SIZE);
        assert_eq!(forward[1], Point::new(770.0, 200.0));
        assert_eq!(forward[0], Point::new(730.0, 185.0));
    }

    #[test]
    fn backing_store_scales_with_pixel_ratio() {
        assert_eq!(hidpi_backing_size(Size::new(640.0, 360.0), 2.0), (1280, 720));
        assert_eq!(hidpi_backing_size(Size::new(641.0, 361.0), 1.5), (962, 542));
        assert_eq!(hidpi_backing_size(Size::new(640.0, 360.0), 0.0), (640, 360));
    }

    #[test]
    fn readout_formats_and_stays_inside() {
        assert_eq!(readout_text(12.345, 50.0), "X: 12.3%, Y: 50.0%");
        assert_eq!(
            readout_anchor(Point::new(100.0, 100.0), SIZE, 120.0),
            Point::new(112.0, 88.0)
        );
        assert_eq!(
            readout_anchor(Point::new(780.0, 5.0), SIZE, 120.0),
            Point::new(648.0, 16.0)
        );
    }
}
