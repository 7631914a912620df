// File: crates/pie-core/src/series.rs
// Summary: Data series model for the pie: labeled, non-negative magnitudes.

use crate::error::{PieError, Result};

/// One input entry of the pie.
#[derive(Clone, Debug, PartialEq)]
pub struct DataItem {
    pub name: String,
    pub number: f64,
}

impl DataItem {
    pub fn new(name: impl Into<String>, number: f64) -> Self {
        Self { name: name.into(), number }
    }

    /// Construct an item enforcing `number` finite and `>= 0`.
    pub fn try_new(name: impl Into<String>, number: f64) -> Result<Self> {
        if !is_valid_value(number) {
            return Err(PieError::InvalidItemValue { value: number });
        }
        Ok(Self::new(name, number))
    }
}

#[inline]
fn is_valid_value(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Check every value and return the series total.
/// An empty series has a total of zero; degeneracy is the caller's decision.
pub fn checked_total(data: &[DataItem]) -> Result<f64> {
    let mut sum = 0.0f64;
    for (index, item) in data.iter().enumerate() {
        if !is_valid_value(item.number) {
            return Err(PieError::InvalidValue { index, value: item.number });
        }
        sum += item.number;
    }
    Ok(sum)
}

/// Build a series from `(name, number)` pairs.
pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Vec<DataItem> {
    pairs.into_iter().map(|(name, number)| DataItem::new(name, number)).collect()
}
