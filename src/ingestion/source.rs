//! Grid sources: anything that can hand over a sheet as rows of text cells.

use std::borrow::Cow;

use crate::error::{FrameError, FrameResult};

/// A reader that yields a sheet as an ordered sequence of rows of text cells.
///
/// Blank cells are empty strings; rows may have different lengths.
pub trait GridSource {
    /// Return the rows of `sheet`, or of the first sheet when `sheet` is `None`.
    ///
    /// Sources that already hold their rows lend them; sources that decode on demand return
    /// an owned grid.
    fn sheet_rows(&mut self, sheet: Option<&str>) -> FrameResult<Cow<'_, [Vec<String>]>>;
}

/// In-memory grid source holding one or more named sheets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryGrid {
    sheets: Vec<(String, Vec<Vec<String>>)>,
}

impl MemoryGrid {
    /// A single sheet named `Sheet1`.
    pub fn new<S: Into<String>>(rows: Vec<Vec<S>>) -> Self {
        Self::default().with_sheet("Sheet1", rows)
    }

    /// Append a named sheet.
    pub fn with_sheet<S: Into<String>>(mut self, name: impl Into<String>, rows: Vec<Vec<S>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.sheets.push((name.into(), rows));
        self
    }

    /// Sheet names in insertion order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl GridSource for MemoryGrid {
    fn sheet_rows(&mut self, sheet: Option<&str>) -> FrameResult<Cow<'_, [Vec<String>]>> {
        let found = match sheet {
            Some(name) => self.sheets.iter().find(|(n, _)| n == name),
            None => self.sheets.first(),
        };
        found
            .map(|(_, rows)| Cow::Borrowed(rows.as_slice()))
            .ok_or_else(|| FrameError::SheetNotFound {
                name: sheet.unwrap_or("<first>").to_string(),
            })
    }
}
