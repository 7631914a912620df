// File: crates/pie-core/src/hit.rs
// Summary: Hit testing of a tap point against the ring and the wedge angle intervals.

use tracing::debug;

use crate::geometry::{normalize_angle, ChartGeometry, Point};
use crate::layout::WedgeDescriptor;

/// Inclusive ring membership: `inner² <= d² <= outer²`.
pub fn is_within_ring(point: Point, geometry: &ChartGeometry) -> bool {
    let d2 = point.distance_sq(geometry.center);
    d2 <= geometry.outer_radius * geometry.outer_radius
        && d2 >= geometry.inner_radius * geometry.inner_radius
}

/// Angle of `point` around the chart center, in wedge-angle space `[0, 2π)`.
pub fn tap_angle(point: Point, geometry: &ChartGeometry) -> f64 {
    let dx = point.x - geometry.center.x;
    let dy = point.y - geometry.center.y;
    normalize_angle(dy.atan2(dx))
}

/// First wedge (input order) whose inclusive interval contains `angle`.
/// Zero-span wedges are skipped; they are not drawn and cannot be tapped.
pub fn resolve_angle(angle: f64, wedges: &[WedgeDescriptor]) -> Option<usize> {
    wedges
        .iter()
        .find(|w| w.span() > 0.0 && w.contains(angle))
        .map(|w| w.index)
}

/// Resolve a tap to a wedge index, or `None` when it misses the ring or every interval.
pub fn hit_test(point: Point, geometry: &ChartGeometry, wedges: &[WedgeDescriptor]) -> Option<usize> {
    if !is_within_ring(point, geometry) {
        debug!(x = point.x, y = point.y, "tap outside ring");
        return None;
    }
    let angle = tap_angle(point, geometry);
    let hit = resolve_angle(angle, wedges);
    debug!(x = point.x, y = point.y, angle, hit = ?hit, "tap inside ring");
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::layout;
    use crate::series::from_pairs;
    use std::f64::consts::{PI, TAU};

    fn geometry() -> ChartGeometry {
        ChartGeometry::new(Point::new(140.0, 140.0), 100.0, 40.0).unwrap()
    }

    #[test]
    fn ring_boundaries_are_inclusive() {
        let g = geometry();
        assert!(is_within_ring(Point::new(240.0, 140.0), &g));
        assert!(is_within_ring(Point::new(200.0, 140.0), &g));
        assert!(!is_within_ring(Point::new(200.0 - 1e-6, 140.0), &g));
        assert!(!is_within_ring(Point::new(240.0 + 1e-6, 140.0), &g));
        assert!(!is_within_ring(g.center, &g));
    }

    #[test]
    fn straight_up_is_angle_zero() {
        let g = geometry();
        let a = tap_angle(Point::new(140.0, 60.0), &g);
        assert!(a.abs() < 1e-12);
    }

    #[test]
    fn each_quadrant_resolves_to_its_quarter() {
        let data = from_pairs([("q0", 1.0), ("q1", 1.0), ("q2", 1.0), ("q3", 1.0)]);
        let wedges = layout(&data).unwrap();
        let g = geometry();
        let d = 80.0 / 2f64.sqrt();
        // up-right, down-right, down-left, up-left (y grows downwards)
        let taps = [(d, -d, 0), (d, d, 1), (-d, d, 2), (-d, -d, 3)];
        for (dx, dy, want) in taps {
            let p = g.center.offset(dx, dy);
            assert_eq!(hit_test(p, &g, &wedges), Some(want), "tap offset ({dx}, {dy})");
            let a = tap_angle(p, &g);
            assert!(a >= 0.0 && a < TAU);
        }
    }

    #[test]
    fn boundary_ties_resolve_to_earlier_wedge() {
        let data = from_pairs([("A", 1.0), ("B", 1.0)]);
        let wedges = layout(&data).unwrap();
        assert_eq!(resolve_angle(PI, &wedges), Some(0));
        assert_eq!(resolve_angle(0.0, &wedges), Some(0));
        assert_eq!(resolve_angle(TAU, &wedges), Some(1));
    }

    #[test]
    fn empty_wedges_are_never_hit() {
        let data = from_pairs([("zero", 0.0), ("all", 3.0)]);
        let wedges = layout(&data).unwrap();
        assert_eq!(resolve_angle(0.0, &wedges), Some(1));
    }

    #[test]
    fn no_wedges_means_no_hit() {
        let g = geometry();
        assert_eq!(hit_test(Point::new(140.0, 60.0), &g, &[]), None);
    }
}
