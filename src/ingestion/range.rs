//! Range ingestion: turn a block of raw text cells into a typed [`Frame`].
//!
//! Rules:
//!
//! - The header row names the columns; a missing or blank header cell at position `p` becomes
//!   `Col_<p+1>`.
//! - Data rows are read downward from the row after the header. The first row whose cells in the
//!   column span are all blank (or absent) ends the block; nothing below it is read.
//! - Cells that parse as a finite base-10 float become [`Scalar::Number`], other present cells
//!   become [`Scalar::Text`] and cells past the end of a ragged row become [`Scalar::Empty`].
//! - Duplicate header names collapse into one column; the rightmost position wins.

use crate::error::{FrameError, FrameResult};
use crate::types::{Frame, Scalar};

use super::cell_ref::SheetRange;

/// How a present-but-blank cell inside a data row is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankCellPolicy {
    /// Keep the raw text: `Text("")`.
    #[default]
    Text,
    /// Store as [`Scalar::Empty`], the same as an absent cell.
    Empty,
}

/// Options for range ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeOptions {
    pub blank_cells: BlankCellPolicy,
}

/// Ingest `rows` with default [`RangeOptions`].
///
/// `header_row`, `start_col` and `end_col` are 0-based; `end_col` is inclusive. Fails with
/// [`FrameError::MalformedRange`] if the header row does not exist or `start_col > end_col`.
///
/// ```rust
/// use sheet_frame::ingestion::ingest_range;
/// use sheet_frame::types::Scalar;
///
/// let rows = vec![
///     vec!["Date", "Amount"],
///     vec!["2024-01-01", "100.5"],
///     vec!["", ""],
///     vec!["2024-01-03", "50"],
/// ];
/// let frame = ingest_range(&rows, 0, 0, 1).unwrap();
/// assert_eq!(frame.column("Amount").unwrap().values(), &[Scalar::Number(100.5)]);
/// ```
pub fn ingest_range<S: AsRef<str>>(
    rows: &[Vec<S>],
    header_row: usize,
    start_col: usize,
    end_col: usize,
) -> FrameResult<Frame> {
    let range = SheetRange {
        header_row,
        start_col,
        end_col,
    };
    ingest_range_with(rows, range, &RangeOptions::default())
}

/// Ingest `rows` over `range` using explicit options.
pub fn ingest_range_with<S: AsRef<str>>(
    rows: &[Vec<S>],
    range: SheetRange,
    options: &RangeOptions,
) -> FrameResult<Frame> {
    range.check_columns()?;
    let header_cells = rows
        .get(range.header_row)
        .ok_or_else(|| FrameError::MalformedRange {
            message: format!(
                "header row {} is past the last row ({} rows)",
                range.header_row,
                rows.len()
            ),
        })?;

    let headers: Vec<String> = range
        .columns()
        .map(|p| match header_cells.get(p).map(AsRef::as_ref) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Col_{}", p + 1),
        })
        .collect();

    let mut data: Vec<Vec<Scalar>> = vec![Vec::new(); headers.len()];
    for (offset, row) in rows[range.header_row + 1..].iter().enumerate() {
        if is_blank_row(row, &range) {
            log::debug!(
                "range ingestion stopped at blank row {}",
                range.header_row + 1 + offset
            );
            break;
        }
        for (values, p) in data.iter_mut().zip(range.columns()) {
            values.push(parse_cell(row.get(p).map(AsRef::as_ref), options.blank_cells));
        }
    }

    let mut frame = Frame::new();
    for (name, values) in headers.into_iter().zip(data) {
        frame.add_column(name, values);
    }
    Ok(frame)
}

/// Type a single raw cell. `None` means the row ends before this column.
pub fn parse_cell(raw: Option<&str>, blank_cells: BlankCellPolicy) -> Scalar {
    match raw {
        None => Scalar::Empty,
        Some("") => match blank_cells {
            BlankCellPolicy::Text => Scalar::Text(String::new()),
            BlankCellPolicy::Empty => Scalar::Empty,
        },
        Some(text) => match text.parse::<f64>() {
            Ok(v) if v.is_finite() => Scalar::Number(v),
            _ => Scalar::Text(text.to_string()),
        },
    }
}

fn is_blank_row<S: AsRef<str>>(row: &[S], range: &SheetRange) -> bool {
    range
        .columns()
        .filter_map(|p| row.get(p))
        .all(|cell| cell.as_ref().is_empty())
}
