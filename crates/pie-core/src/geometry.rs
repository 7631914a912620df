// File: crates/pie-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and the chart's ring geometry.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{PieError, Result};
use crate::types::PieConfig;

/// A point in the host view's local pixel space (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Ring geometry in pixels, derived from a [`PieConfig`].
/// Contract: `0 <= inner_radius <= outer_radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub center: Point,
}

impl ChartGeometry {
    /// Build geometry directly; fails when the inner radius would be negative.
    pub fn new(center: Point, outer_radius: f64, arc_width: f64) -> Result<Self> {
        let inner_radius = outer_radius - arc_width;
        if !(inner_radius >= 0.0) || !outer_radius.is_finite() {
            return Err(PieError::InvalidGeometry { outer_radius, arc_width });
        }
        Ok(Self { outer_radius, inner_radius, center })
    }

    /// Derive the ring from the host configuration: the pie's bounding box sits at
    /// the configured margins and the outer radius is half the pie width.
    pub fn from_config(cfg: &PieConfig) -> Result<Self> {
        let center = Point::new(
            cfg.margins.left + cfg.pie_width / 2.0,
            cfg.margins.top + cfg.pie_height / 2.0,
        );
        Self::new(center, cfg.pie_width / 2.0, cfg.arc_width)
    }

    pub fn arc_width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Screen position of `angle` (wedge-angle space) at `radius` from the center.
    pub fn point_at(&self, angle: f64, radius: f64) -> Point {
        let (dx, dy) = polar_offset(angle, radius);
        self.center.offset(dx, dy)
    }
}

/// Offset from the center for a wedge angle: 0 points up, angles grow clockwise.
#[inline]
pub fn polar_offset(angle: f64, radius: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

/// Convert a raw `atan2` angle (0 along +x, clockwise in y-down space) into
/// wedge-angle space, reduced into `[0, 2π)` for every quadrant.
#[inline]
pub fn normalize_angle(raw: f64) -> f64 {
    let a = (raw + FRAC_PI_2).rem_euclid(TAU);
    // rem_euclid can round a tiny negative input up to exactly TAU
    if a >= TAU { 0.0 } else { a }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn geometry_from_default_config() {
        let g = ChartGeometry::from_config(&PieConfig::default()).unwrap();
        assert_eq!(g.outer_radius, 100.0);
        assert_eq!(g.inner_radius, 60.0);
        assert_eq!(g.center, Point::new(140.0, 140.0));
        assert_eq!(g.arc_width(), 40.0);
    }

    #[test]
    fn negative_inner_radius_is_rejected() {
        let cfg = PieConfig::new(100.0, 100.0, 60.0, 60.0);
        let err = ChartGeometry::from_config(&cfg).unwrap_err();
        assert_eq!(err, PieError::InvalidGeometry { outer_radius: 30.0, arc_width: 40.0 });
    }

    #[test]
    fn zero_inner_radius_is_a_full_pie() {
        let g = ChartGeometry::new(Point::default(), 40.0, 40.0).unwrap();
        assert_eq!(g.inner_radius, 0.0);
    }

    #[test]
    fn normalize_maps_up_to_zero_and_wraps() {
        assert!(normalize_angle(-PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(0.0) - PI / 2.0).abs() < 1e-12);
        assert!((normalize_angle(PI) - 3.0 * PI / 2.0).abs() < 1e-12);
        // lower-left quadrant in raw terms lands in the last quarter turn
        let a = normalize_angle(-3.0 * PI / 4.0);
        assert!((a - 7.0 * PI / 4.0).abs() < 1e-12);
        assert!(normalize_angle(-PI / 2.0 - 1e-18) < TAU);
    }

    #[test]
    fn point_at_matches_normalized_angle() {
        let g = ChartGeometry::new(Point::new(10.0, 10.0), 50.0, 10.0).unwrap();
        let p = g.point_at(PI / 2.0, 45.0);
        assert!((p.x - 55.0).abs() < 1e-9 && (p.y - 10.0).abs() < 1e-9);
        let q = g.point_at(0.0, 45.0);
        assert!((q.x - 10.0).abs() < 1e-9 && (q.y + 35.0).abs() < 1e-9);
    }
}
