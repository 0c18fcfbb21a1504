// =============================================================================
// Windowed Series: borrowed views over an ordered price series
// =============================================================================
//
// Input is oldest first and never mutated.  Windows are sub-slices of the
// caller's data, so nothing is copied until a column is projected.
// =============================================================================

use crate::contract::{require_len, validate_period};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct WindowedSeries<'a, T> {
    points: &'a [T],
}

impl<'a, T> WindowedSeries<'a, T> {
    pub fn new(points: &'a [T]) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.points
    }

    pub fn last(&self) -> Option<&'a T> {
        self.points.last()
    }

    /// The last `len` points.
    pub fn trailing(&self, len: usize) -> Result<&'a [T]> {
        require_len(len, self.points.len())?;
        Ok(&self.points[self.points.len() - len..])
    }

    /// Every contiguous window of `len` points, oldest first.
    pub fn sliding(&self, len: usize) -> Result<std::slice::Windows<'a, T>> {
        validate_period("window", len)?;
        Ok(self.points.windows(len))
    }

    /// Same-length projection of one field, e.g. `series.column(|p| p.high)`.
    pub fn column<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&T) -> f64,
    {
        self.points.iter().map(f).collect()
    }
}

impl<'a, T> From<&'a [T]> for WindowedSeries<'a, T> {
    fn from(points: &'a [T]) -> Self {
        Self::new(points)
    }
}

/// `values[i + lag] - values[i]` for every valid `i`.
///
/// Empty when `values.len() <= lag`.
pub fn lagged_differences(values: &[f64], lag: usize) -> Result<Vec<f64>> {
    validate_period("lag", lag)?;
    Ok(values
        .iter()
        .zip(values.iter().skip(lag))
        .map(|(old, new)| new - old)
        .collect())
}
