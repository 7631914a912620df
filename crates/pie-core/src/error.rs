// File: crates/pie-core/src/error.rs
// Summary: Error type for layout and geometry construction.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PieError {
    /// Empty series, or every value is zero: there is nothing to partition.
    #[error("degenerate series: total value is zero")]
    DegenerateSeries,
    /// A value is negative, NaN, or infinite.
    #[error("invalid value {value} at index {index}: values must be finite and >= 0")]
    InvalidValue { index: usize, value: f64 },
    /// Same check for a single item built outside a series.
    #[error("invalid item value {value}: values must be finite and >= 0")]
    InvalidItemValue { value: f64 },
    /// The ring would have a negative inner radius.
    #[error("invalid geometry: outer radius {outer_radius} is smaller than arc width {arc_width}")]
    InvalidGeometry { outer_radius: f64, arc_width: f64 },
}

pub type Result<T> = std::result::Result<T, PieError>;
