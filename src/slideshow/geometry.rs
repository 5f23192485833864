// Tap-zone geometry for the playback element.

use super::Direction;

/// The element width is split into this many columns; the outermost column
/// on each side is a navigation hot zone.
pub const HOT_ZONE_DIVISIONS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Edge(Direction),
    Centre,
}

/// Classifies a tap at `x`, measured from the element's left edge.
pub fn classify_tap(x: f64, width: f64) -> TapZone {
    if !(width.is_finite() && width > 0.0 && x.is_finite()) {
        return TapZone::Centre;
    }
    let zone = width / HOT_ZONE_DIVISIONS;
    if x < zone {
        TapZone::Edge(Direction::Back)
    } else if x > width - zone {
        TapZone::Edge(Direction::Forward)
    } else {
        TapZone::Centre
    }
}

/// Tap position as percentages of the element size.
pub fn tap_percentages(x: f64, y: f64, width: f64, height: f64) -> Option<(f64, f64)> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((x / width * 100.0, y / height * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighths_split_into_back_centre_forward() {
        let width = 800.0;
        assert_eq!(classify_tap(0.0, width), TapZone::Edge(Direction::Back));
        assert_eq!(classify_tap(99.9, width), TapZone::Edge(Direction::Back));
        assert_eq!(classify_tap(100.0, width), TapZone::Centre);
        assert_eq!(classify_tap(400.0, width), TapZone::Centre);
        assert_eq!(classify_tap(700.0, width), TapZone::Centre);
        assert_eq!(classify_tap(700.1, width), TapZone::Edge(Direction::Forward));
        assert_eq!(classify_tap(800.0, width), TapZone::Edge(Direction::Forward));
    }

    #[test]
    fn unmeasured_element_always_toggles() {
        assert_eq!(classify_tap(5.0, 0.0), TapZone::Centre);
        assert_eq!(classify_tap(f64::NAN, 800.0), TapZone::Centre);
    }

    #[test]
    fn percentages_are_relative_to_element() {
        assert_eq!(tap_percentages(200.0, 90.0, 800.0, 450.0), Some((25.0, 20.0)));
        assert_eq!(tap_percentages(1.0, 1.0, 0.0, 450.0), None);
    }
}
