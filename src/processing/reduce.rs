//! Numeric aggregation over a single [`crate::types::Frame`] column.
//!
//! Only [`Scalar::Number`] entries take part; text and empty cells are ignored.

use crate::error::FrameResult;
use crate::types::{Frame, Scalar};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count numeric entries.
    Count,
    /// Sum numeric entries.
    Sum,
    /// Minimum numeric entry.
    Min,
    /// Maximum numeric entry.
    Max,
    /// Arithmetic mean of numeric entries.
    Mean,
}

/// Sum the numeric entries of `column` in storage order.
///
/// Returns `0.0` when the column holds no numbers. A missing column is an error, never a zero sum.
pub fn sum(frame: &Frame, column: &str) -> FrameResult<f64> {
    let col = frame.column(column)?;
    Ok(col.numbers().fold(0.0, |acc, v| acc + v))
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - `Count` and `Sum` always return a [`Scalar::Number`].
/// - `Min`/`Max`/`Mean` return [`Scalar::Empty`] if the column holds no numbers.
pub fn reduce(frame: &Frame, column: &str, op: ReduceOp) -> FrameResult<Scalar> {
    let col = frame.column(column)?;
    let numbers = col.numbers();

    let out = match op {
        ReduceOp::Count => Some(numbers.count() as f64),
        ReduceOp::Sum => Some(numbers.fold(0.0, |acc, v| acc + v)),
        ReduceOp::Min => numbers.reduce(f64::min),
        ReduceOp::Max => numbers.reduce(f64::max),
        ReduceOp::Mean => {
            let (total, n) = numbers.fold((0.0, 0usize), |(t, n), v| (t + v, n + 1));
            (n > 0).then(|| total / n as f64)
        }
    };
    Ok(out.map(Scalar::Number).unwrap_or(Scalar::Empty))
}
