//! Wheel geometry: mapping pointer positions to hue/saturation selections.
//!
//! Angle around the wheel center maps to hue, distance from the center maps
//! to saturation. Positions outside the wheel are projected onto the rim, so
//! a selection always lies on the disk.

use floem::kurbo::Point;

use crate::color::{Hsv, CHANNEL_MAX};

/// A position on the wheel, expressed as polar coordinates from the center.
///
/// `hue` is in degrees, normalized to [0, 360). `distance` never exceeds the
/// wheel radius used to resolve it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSelection {
    pub hue: f64,
    pub distance: f64,
}

impl WheelSelection {
    /// The on-wheel point for this selection, used to draw the marker.
    pub fn marker_position(&self, center: Point) -> Point {
        let angle = self.hue.to_radians();
        Point::new(
            center.x + angle.cos() * self.distance,
            center.y + angle.sin() * self.distance,
        )
    }

    /// Map to an HSV color: saturation scales with distance, value is pinned
    /// at the channel maximum (tonal variants come from palette generation).
    pub fn to_hsv(&self, radius: f64) -> Hsv {
        let sat = if radius > 0.0 {
            ((self.distance / radius) * CHANNEL_MAX as f64).round() as u8
        } else {
            0
        };
        Hsv::new(self.hue.round() as u16, sat, CHANNEL_MAX)
    }

    /// Polar coordinates for a color, for placing the marker after an
    /// external selection change.
    pub fn from_hsv(color: Hsv, radius: f64) -> Self {
        Self {
            hue: color.h() as f64,
            distance: color.s() as f64 / CHANNEL_MAX as f64 * radius,
        }
    }
}

/// Resolve a pointer position against a wheel of the given center and radius.
///
/// The distance is clamped to the radius; clamping preserves the angle, so
/// dragging past the rim slides the selection along the rim.
pub fn resolve_pointer(pos: Point, center: Point, radius: f64) -> WheelSelection {
    if radius <= 0.0 {
        return WheelSelection {
            hue: 0.0,
            distance: 0.0,
        };
    }

    let dx = pos.x - center.x;
    let dy = pos.y - center.y;
    let dist = (dx * dx + dy * dy).sqrt().min(radius);

    // atan2 gives -180..180 degrees; normalize to [0, 360)
    let mut hue = dy.atan2(dx).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }

    WheelSelection {
        hue,
        distance: dist,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(100.0, 100.0);
    const RADIUS: f64 = 80.0;

    #[test]
    fn hue_stays_in_range() {
        for i in 0..360 {
            let angle = (i as f64).to_radians();
            let pos = Point::new(
                CENTER.x + angle.cos() * 40.0,
                CENTER.y + angle.sin() * 40.0,
            );
            let sel = resolve_pointer(pos, CENTER, RADIUS);
            assert!((0.0..360.0).contains(&sel.hue), "hue {} out of range", sel.hue);
            assert!(sel.distance <= RADIUS);
        }
    }

    #[test]
    fn cardinal_directions() {
        let right = resolve_pointer(Point::new(140.0, 100.0), CENTER, RADIUS);
        assert!(right.hue.abs() < 1e-9);
        let down = resolve_pointer(Point::new(100.0, 140.0), CENTER, RADIUS);
        assert!((down.hue - 90.0).abs() < 1e-9);
        let left = resolve_pointer(Point::new(60.0, 100.0), CENTER, RADIUS);
        assert!((left.hue - 180.0).abs() < 1e-9);
        let up = resolve_pointer(Point::new(100.0, 60.0), CENTER, RADIUS);
        assert!((up.hue - 270.0).abs() < 1e-9);
    }

    #[test]
    fn outside_positions_clamp_to_rim() {
        let far = Point::new(CENTER.x + 500.0, CENTER.y - 500.0);
        let sel = resolve_pointer(far, CENTER, RADIUS);
        assert_eq!(sel.distance, RADIUS);

        // Clamping projects along the same angle.
        let near = Point::new(CENTER.x + 50.0, CENTER.y - 50.0);
        let unclamped = resolve_pointer(near, CENTER, RADIUS);
        assert!((sel.hue - unclamped.hue).abs() < 1e-9);
    }

    #[test]
    fn saturation_scales_with_distance() {
        let center = resolve_pointer(CENTER, CENTER, RADIUS);
        assert_eq!(center.to_hsv(RADIUS).s(), 0);

        let rim = resolve_pointer(Point::new(CENTER.x + RADIUS, CENTER.y), CENTER, RADIUS);
        assert_eq!(rim.to_hsv(RADIUS).s(), 255);

        let mid = resolve_pointer(Point::new(CENTER.x + RADIUS / 2.0, CENTER.y), CENTER, RADIUS);
        assert_eq!(mid.to_hsv(RADIUS).s(), 128);
    }

    #[test]
    fn selection_value_is_pinned_at_max() {
        let sel = resolve_pointer(Point::new(130.0, 70.0), CENTER, RADIUS);
        assert_eq!(sel.to_hsv(RADIUS).v(), 255);
    }

    #[test]
    fn marker_follows_selection() {
        let pos = Point::new(CENTER.x + 30.0, CENTER.y + 40.0);
        let sel = resolve_pointer(pos, CENTER, RADIUS);
        let marker = sel.marker_position(CENTER);
        assert!((marker.x - pos.x).abs() < 1e-9);
        assert!((marker.y - pos.y).abs() < 1e-9);
    }

    #[test]
    fn degenerate_radius_resolves_to_center() {
        let sel = resolve_pointer(Point::new(10.0, 10.0), CENTER, 0.0);
        assert_eq!(sel.distance, 0.0);
        assert_eq!(sel.to_hsv(0.0).s(), 0);
    }
}
