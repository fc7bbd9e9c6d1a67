//! Output fields of the escape-time engine.

use crate::mandelbrot::EscapeResult;
use serde::{Deserialize, Serialize};

/// A `height × width` array of per-cell results, row-major, shaped like the
/// coordinate grid it was computed from.
///
/// Fields are written once by the engine and handed to the caller; there is
/// no mutable access afterwards. Deserialized fields are shape-checked, so
/// `values.len() == width * height` always holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "FieldParts<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Field<T> {
    width: usize,
    height: usize,
    /// Iteration budget the field was computed with (the sentinel value for
    /// bounded cells in an [`EscapeField`]).
    max_iterations: u32,
    values: Vec<T>,
}

/// Unchecked wire form of a [`Field`].
#[derive(Deserialize)]
struct FieldParts<T> {
    width: usize,
    height: usize,
    max_iterations: u32,
    values: Vec<T>,
}

impl<T> TryFrom<FieldParts<T>> for Field<T> {
    type Error = String;

    fn try_from(parts: FieldParts<T>) -> Result<Self, Self::Error> {
        let FieldParts {
            width,
            height,
            max_iterations,
            values,
        } = parts;
        if width == 0 || height == 0 {
            return Err(format!("field shape {width}x{height} must be non-empty"));
        }
        match width.checked_mul(height) {
            Some(area) if area == values.len() => Ok(Self {
                width,
                height,
                max_iterations,
                values,
            }),
            _ => Err(format!(
                "field shape {width}x{height} does not match {} values",
                values.len()
            )),
        }
    }
}

/// Integer escape counts. Bounded cells hold `max_iterations`.
pub type EscapeField = Field<u32>;

/// Continuous iteration values in `[0, max_iterations]`; only bounded cells
/// reach `max_iterations`.
pub type SmoothField = Field<f64>;

impl<T: Copy> Field<T> {
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        max_iterations: u32,
        values: Vec<T>,
    ) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            max_iterations,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.values[row * self.width + col])
    }

    /// One row; panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[T] {
        &self.values[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.values.chunks(self.width)
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Apply `f` to every cell, keeping the shape and budget.
    pub fn map<U, F>(&self, f: F) -> Field<U>
    where
        F: Fn(T) -> U,
    {
        Field {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Convert every cell to `f64`, keeping the shape.
    pub fn to_f64(&self) -> Field<f64>
    where
        T: Into<f64>,
    {
        self.map(|v| v.into())
    }
}

impl<T: Copy + PartialOrd> Field<T> {
    /// Smallest and largest value, ignoring incomparable ones (NaN).
    pub fn value_range(&self) -> Option<(T, T)> {
        let mut iter = self.values.iter().copied().filter(|v| v.partial_cmp(v).is_some());
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| {
            (
                if v < lo { v } else { lo },
                if v > hi { v } else { hi },
            )
        }))
    }

    pub fn min(&self) -> Option<T> {
        self.value_range().map(|(lo, _)| lo)
    }

    pub fn max(&self) -> Option<T> {
        self.value_range().map(|(_, hi)| hi)
    }
}

impl EscapeField {
    /// Whether the cell holds the "did not escape" sentinel.
    pub fn is_bounded(&self, row: usize, col: usize) -> Option<bool> {
        self.get(row, col).map(|v| v == self.max_iterations)
    }

    /// Number of cells whose orbit never exceeded the escape radius.
    pub fn bounded_count(&self) -> usize {
        self.values
            .iter()
            .filter(|&&v| v == self.max_iterations)
            .count()
    }

    /// Fraction of cells that escaped, in `[0, 1]`.
    pub fn escaped_fraction(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        1.0 - self.bounded_count() as f64 / self.values.len() as f64
    }
}

/// Raw per-cell kernel output, from which both the integer and the smooth
/// field can be derived without iterating the grid again.
pub type ResultField = Field<EscapeResult>;

impl ResultField {
    /// Integer escape counts.
    pub fn counts(&self) -> EscapeField {
        self.map(|r| r.iterations)
    }

    /// Continuous iteration values.
    pub fn smooth(&self) -> SmoothField {
        let max_iterations = self.max_iterations;
        self.map(|r| r.smooth_iterations(max_iterations))
    }
}
