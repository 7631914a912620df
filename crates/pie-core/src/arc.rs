// File: crates/pie-core/src/arc.rs
// Summary: Wedge-to-path parameters: radii and padding per wedge, plus pad-adjusted outline angles.

use crate::geometry::{clamp, polar_offset, ChartGeometry};
use crate::layout::WedgeDescriptor;
use crate::types::ArcStyle;

const EPSILON: f64 = 1e-12;

/// Descriptive parameters for drawing one wedge. Angles are in wedge-angle space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcParams {
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Total angular gap shared with the neighbours (half on each side).
    pub pad_angle: f64,
}

/// Outline angles after padding is applied. The inner edge loses more angle than the
/// outer edge so the gap between wedges has parallel sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaddedAngles {
    pub outer_start: f64,
    pub outer_end: f64,
    pub inner_start: f64,
    pub inner_end: f64,
}

/// Rendering parameters for `wedge`. The highlighted wedge grows outwards by
/// `style.highlight_boost` and uses the wider highlighted pad.
pub fn path_params(
    wedge: &WedgeDescriptor,
    geometry: &ChartGeometry,
    style: &ArcStyle,
    highlighted: bool,
) -> ArcParams {
    let (outer_radius, pad_angle) = if highlighted {
        (geometry.outer_radius + style.highlight_boost, style.highlighted_pad_angle)
    } else {
        (geometry.outer_radius, style.pad_angle)
    };
    ArcParams {
        outer_radius,
        inner_radius: geometry.inner_radius,
        start_angle: wedge.start_angle,
        end_angle: wedge.end_angle,
        pad_angle,
    }
}

impl ArcParams {
    /// Label anchor relative to the chart center: mid-angle, mid-radius.
    pub fn centroid(&self) -> (f64, f64) {
        let r = (self.inner_radius + self.outer_radius) * 0.5;
        let a = (self.start_angle + self.end_angle) * 0.5;
        polar_offset(a, r)
    }

    /// Pad-adjusted angles for the outer and inner edges.
    ///
    /// The linear gap width is `pad_radius * pad_angle / 2` on each side, with
    /// `pad_radius = sqrt(r0² + r1²)`; each edge is inset by the angle subtending that
    /// width at its own radius. An edge thinner than its padding collapses to the
    /// wedge's mid-angle.
    pub fn padded_angles(&self) -> PaddedAngles {
        let (r0, r1) = if self.outer_radius < self.inner_radius {
            (self.outer_radius, self.inner_radius)
        } else {
            (self.inner_radius, self.outer_radius)
        };
        let (a0, a1) = (self.start_angle, self.end_angle);
        let mid = (a0 + a1) * 0.5;
        let da = (a1 - a0).abs();
        let cw = if a1 >= a0 { 1.0 } else { -1.0 };

        let mut out = PaddedAngles { outer_start: a0, outer_end: a1, inner_start: a0, inner_end: a1 };
        let ap = self.pad_angle * 0.5;
        if ap <= EPSILON {
            return out;
        }
        let rp = (r0 * r0 + r1 * r1).sqrt();
        if rp <= EPSILON {
            return out;
        }

        let inset = |r: f64| -> f64 { clamp(rp / r * ap.sin(), -1.0, 1.0).asin() };
        let p0 = inset(r0);
        let p1 = inset(r1);
        if da - p0 * 2.0 > EPSILON {
            out.inner_start = a0 + p0 * cw;
            out.inner_end = a1 - p0 * cw;
        } else {
            out.inner_start = mid;
            out.inner_end = mid;
        }
        if da - p1 * 2.0 > EPSILON {
            out.outer_start = a0 + p1 * cw;
            out.outer_end = a1 - p1 * cw;
        } else {
            out.outer_start = mid;
            out.outer_end = mid;
        }
        out
    }
}
