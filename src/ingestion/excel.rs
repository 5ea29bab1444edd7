#![cfg(feature = "excel")]

//! Excel grid source (`.xlsx`, `.xls`, `.xlsm`, `.xlsb`, `.ods`), backed by `calamine`.
//!
//! Typed cells are rendered back to text the way a sheet displays them, so range ingestion can
//! re-type them uniformly. Rows are padded so indices match absolute sheet coordinates (`A1` is
//! `rows[0][0]`), and trailing blank cells are trimmed from each row.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use crate::error::{FrameError, FrameResult};

use super::source::GridSource;

/// An opened workbook.
pub struct ExcelWorkbook {
    workbook: Sheets<BufReader<File>>,
}

impl ExcelWorkbook {
    /// Open a workbook, detecting the format from the file extension.
    pub fn open(path: impl AsRef<Path>) -> FrameResult<Self> {
        Ok(Self {
            workbook: open_workbook_auto(path)?,
        })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }
}

impl std::fmt::Debug for ExcelWorkbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExcelWorkbook")
            .field("sheets", &self.workbook.sheet_names())
            .finish()
    }
}

impl GridSource for ExcelWorkbook {
    fn sheet_rows(&mut self, sheet: Option<&str>) -> FrameResult<Cow<'_, [Vec<String>]>> {
        let names = self.sheet_names();
        let name = match sheet {
            Some(name) if names.iter().any(|n| n == name) => name.to_string(),
            Some(name) => {
                return Err(FrameError::SheetNotFound {
                    name: name.to_string(),
                });
            }
            None => names
                .into_iter()
                .next()
                .ok_or_else(|| FrameError::UnsupportedSource {
                    message: "workbook has no sheets".to_string(),
                })?,
        };

        let range = self.workbook.worksheet_range(&name)?;
        Ok(Cow::Owned(range_to_grid(&range)))
    }
}

fn range_to_grid(range: &Range<Data>) -> Vec<Vec<String>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut grid: Vec<Vec<String>> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells: Vec<String> = vec![String::new(); first_col as usize];
        cells.extend(row.iter().map(cell_to_string));
        while cells.last().is_some_and(|c| c.is_empty()) {
            cells.pop();
        }
        grid.push(cells);
    }
    grid
}

fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
        Data::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use calamine::{Data, Range};

    use super::{cell_to_string, range_to_grid};

    #[test]
    fn cells_render_as_displayed_text() {
        assert_eq!(cell_to_string(&Data::Float(200.0)), "200");
        assert_eq!(cell_to_string(&Data::Float(100.5)), "100.5");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_to_string(&Data::String("Ada".to_string())), "Ada");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn grid_is_padded_to_absolute_coordinates() {
        // Data starts at B2.
        let mut range: Range<Data> = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::String("Amount".to_string()));
        range.set_value((2, 1), Data::Float(10.0));
        range.set_value((2, 2), Data::String("note".to_string()));

        let grid = range_to_grid(&range);
        assert_eq!(grid.len(), 3);
        assert!(grid[0].is_empty());
        assert_eq!(grid[1], vec!["", "Amount"]);
        assert_eq!(grid[2], vec!["", "10", "note"]);
    }
}
