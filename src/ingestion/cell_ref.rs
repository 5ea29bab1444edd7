//! A1-style cell references and the rectangular span used for range ingestion.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{FrameError, FrameResult};

/// Largest column count of a worksheet (`XFD`).
pub const MAX_COLUMNS: usize = 16_384;
/// Largest row count of a worksheet.
pub const MAX_ROWS: usize = 1_048_576;

/// A single cell position.
///
/// Rows and columns are **0-indexed**: `A1` is `row = 0, col = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse an A1 reference such as `A5`, `bc32` or `$B$2`.
    pub fn from_a1(a1: &str) -> FrameResult<Self> {
        let invalid = |message: &str| FrameError::InvalidCellRef {
            reference: a1.to_string(),
            message: message.to_string(),
        };

        let s = a1.trim();
        if s.is_empty() {
            return Err(invalid("empty reference"));
        }

        let bytes = s.as_bytes();
        let mut idx = 0usize;
        if bytes.first() == Some(&b'$') {
            idx += 1;
        }

        let col_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_alphabetic() {
            idx += 1;
        }
        if idx == col_start {
            return Err(invalid("missing column letters"));
        }
        let col_str = &s[col_start..idx];

        if bytes.get(idx) == Some(&b'$') {
            idx += 1;
        }

        let row_start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx == row_start {
            return Err(invalid("missing row number"));
        }
        if idx != bytes.len() {
            return Err(invalid("trailing characters"));
        }

        let col = name_to_col(col_str).ok_or_else(|| invalid("column out of range"))?;
        let row_1_based: usize = s[row_start..idx]
            .parse()
            .map_err(|_| invalid("row out of range"))?;
        if row_1_based == 0 || row_1_based > MAX_ROWS {
            return Err(invalid("row out of range"));
        }

        Ok(Self::new(row_1_based - 1, col))
    }

    /// Render as A1 notation (e.g. `A1`, `BC32`).
    pub fn to_a1(self) -> String {
        format!("{}{}", col_to_name(self.col), self.row + 1)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_a1())
    }
}

fn col_to_name(col: usize) -> String {
    let mut n = col + 1;
    let mut out = Vec::<u8>::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

fn name_to_col(s: &str) -> Option<usize> {
    let mut col: usize = 0;
    for b in s.bytes() {
        let v = (b.to_ascii_uppercase() - b'A') as usize + 1;
        col = col.checked_mul(26)?.checked_add(v)?;
        if col > MAX_COLUMNS {
            return None;
        }
    }
    col.checked_sub(1)
}

/// The rectangular block read by range ingestion.
///
/// The header sits on `header_row`; data rows follow it downward until the first blank row.
/// `start_col..=end_col` is the inclusive column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetRange {
    pub header_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl SheetRange {
    /// Build a range, rejecting `start_col > end_col`.
    pub fn new(header_row: usize, start_col: usize, end_col: usize) -> FrameResult<Self> {
        let range = Self {
            header_row,
            start_col,
            end_col,
        };
        range.check_columns()?;
        Ok(range)
    }

    /// Build a range from two A1 references.
    ///
    /// `start` fixes the header row and the first column; only the column of `end` is used,
    /// since rows are read downward until the data block ends.
    pub fn from_a1(start: &str, end: &str) -> FrameResult<Self> {
        let start = CellRef::from_a1(start)?;
        let end = CellRef::from_a1(end)?;
        Self::new(start.row, start.col, end.col)
    }

    /// Number of columns in the span.
    pub fn width(&self) -> usize {
        self.end_col.saturating_sub(self.start_col) + 1
    }

    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start_col..=self.end_col
    }

    pub(crate) fn check_columns(&self) -> FrameResult<()> {
        if self.start_col > self.end_col {
            return Err(FrameError::MalformedRange {
                message: format!(
                    "start column {} is after end column {}",
                    self.start_col, self.end_col
                ),
            });
        }
        if self.end_col >= MAX_COLUMNS {
            return Err(FrameError::MalformedRange {
                message: format!(
                    "end column {} is past the last sheet column ({MAX_COLUMNS} columns)",
                    self.end_col
                ),
            });
        }
        Ok(())
    }
}
