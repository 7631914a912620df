// File: crates/pie-core/src/layout.rs
// Summary: Series-to-angles layout: partitions the full turn into proportional wedges.
// Notes:
// - Angles are in radians, 0 points up and angles grow clockwise (y-down screen space).
//   `geometry::normalize_angle` maps tap angles into the same frame.
// - Descriptors are always returned in input order; `PieSort` only changes which
//   wedge occupies which part of the circle.

use std::f64::consts::TAU;

use tracing::{debug, warn};

use crate::error::{PieError, Result};
use crate::series::{checked_total, DataItem};

/// Angular slice for one data item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgeDescriptor {
    /// Position of the item in the input series.
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

impl WedgeDescriptor {
    #[inline]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }

    /// Inclusive containment test in wedge-angle space.
    #[inline]
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle <= self.end_angle
    }
}

/// Angular ordering of wedges around the circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PieSort {
    /// Wedges follow the input order clockwise from the top.
    #[default]
    Input,
    /// Largest value first.
    Descending,
    /// Smallest value first.
    Ascending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutOptions {
    pub sort: PieSort,
}

/// Lay out `data` in input order. Fails on invalid values and on empty or all-zero input.
pub fn layout(data: &[DataItem]) -> Result<Vec<WedgeDescriptor>> {
    layout_with(data, &LayoutOptions::default())
}

pub fn layout_with(data: &[DataItem], opts: &LayoutOptions) -> Result<Vec<WedgeDescriptor>> {
    let total = checked_total(data)?;
    if total <= 0.0 {
        return Err(PieError::DegenerateSeries);
    }
    let values = data.iter().map(|d| d.number).collect::<Vec<_>>();
    let wedges = assign_angles(&values, &values, opts.sort);
    debug!(items = wedges.len(), total, "pie layout");
    Ok(wedges)
}

/// Like [`layout_with`], but a non-empty all-zero series falls back to equal wedges
/// (each keeping its zero `value`). Empty input yields no wedges.
pub fn layout_or_equal(data: &[DataItem], opts: &LayoutOptions) -> Result<Vec<WedgeDescriptor>> {
    match layout_with(data, opts) {
        Err(PieError::DegenerateSeries) if data.is_empty() => Ok(Vec::new()),
        Err(PieError::DegenerateSeries) => {
            warn!(items = data.len(), "all-zero series; using equal wedges");
            let values = vec![0.0; data.len()];
            let weights = vec![1.0; data.len()];
            Ok(assign_angles(&values, &weights, opts.sort))
        }
        other => other,
    }
}

/// Walk the items in angular order, giving each `weight / total` of the turn.
/// The last wedge in angular order is pinned to end exactly at `2π`.
/// Weights are divided by their maximum first, so subnormal or near-`f64::MAX`
/// series neither blow `2π / total` up to infinity nor sum to infinity.
/// Requires at least one positive weight.
fn assign_angles(values: &[f64], weights: &[f64], sort: PieSort) -> Vec<WedgeDescriptor> {
    let n = values.len();
    let mut order = (0..n).collect::<Vec<_>>();
    match sort {
        PieSort::Input => {}
        PieSort::Descending => order.sort_by(|&a, &b| weights[b].total_cmp(&weights[a])),
        PieSort::Ascending => order.sort_by(|&a, &b| weights[a].total_cmp(&weights[b])),
    }

    let max = weights.iter().copied().fold(0.0f64, f64::max);
    let scaled = weights.iter().map(|w| w / max).collect::<Vec<_>>();
    let total = scaled.iter().sum::<f64>();

    let mut out = vec![WedgeDescriptor { index: 0, start_angle: 0.0, end_angle: 0.0, value: 0.0 }; n];
    let mut a0 = 0.0f64;
    for (pos, &i) in order.iter().enumerate() {
        let a1 = if pos + 1 == n { TAU } else { a0 + scaled[i] / total * TAU };
        out[i] = WedgeDescriptor { index: i, start_angle: a0, end_angle: a1, value: values[i] };
        a0 = a1;
    }
    out
}
