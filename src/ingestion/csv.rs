//! CSV grid source.
//!
//! A CSV file is treated as a single sheet of raw text cells: no header handling, no trimming,
//! and rows may differ in length. Row `n` of the grid is line `n + 1` of the file, so A1
//! references line up with what a spreadsheet shows when it opens the same file. Empty lines,
//! which the CSV reader itself steps over, come back as empty rows; a quoted field spanning
//! several lines still counts as a single row.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::FrameResult;

use super::source::GridSource;

/// Rows read from a CSV document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvGrid {
    rows: Vec<Vec<String>>,
}

impl CsvGrid {
    /// Read a CSV file.
    pub fn from_path(path: impl AsRef<Path>) -> FrameResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Read CSV data from an in-memory string.
    pub fn from_csv_str(input: &str) -> FrameResult<Self> {
        Self::from_bytes(input.as_bytes())
    }

    /// Read CSV data from any reader.
    ///
    /// The input is buffered whole so empty lines can be located.
    pub fn from_reader<R: Read>(mut input: R) -> FrameResult<Self> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    fn from_bytes(bytes: &[u8]) -> FrameResult<Self> {
        let mut rdr = reader_builder().from_reader(bytes);
        let mut record = StringRecord::new();
        let mut rows: Vec<Vec<String>> = Vec::new();

        while rdr.read_record(&mut record)? {
            // A record's position is taken before the reader skips empty lines.
            if let Some(pos) = record.position() {
                let skipped = empty_lines_at(bytes, pos.byte() as usize);
                rows.extend(std::iter::repeat_with(Vec::new).take(skipped));
            }
            rows.push(record.iter().map(str::to_string).collect());
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl GridSource for CsvGrid {
    /// CSV has a single sheet; the sheet name is ignored.
    fn sheet_rows(&mut self, sheet: Option<&str>) -> FrameResult<Cow<'_, [Vec<String>]>> {
        if let Some(name) = sheet {
            log::debug!("csv source has a single sheet; ignoring sheet name '{name}'");
        }
        Ok(Cow::Borrowed(self.rows.as_slice()))
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

/// Number of empty lines in the run of line terminators starting at byte `from`.
///
/// The previous record's terminator may not have been consumed yet when `from` is taken; it
/// is not an empty line. `\r\n` counts once.
fn empty_lines_at(bytes: &[u8], from: usize) -> usize {
    let mut prev = from.checked_sub(1).and_then(|i| bytes.get(i)).copied();
    let mut pending_terminator = matches!(prev, Some(b) if b != b'\r' && b != b'\n');
    let mut lines = 0;

    let gap = bytes.get(from..).unwrap_or_default();
    for &b in gap.iter().take_while(|b| matches!(b, b'\r' | b'\n')) {
        let crlf_tail = b == b'\n' && prev == Some(b'\r');
        if !crlf_tail {
            if pending_terminator {
                pending_terminator = false;
            } else {
                lines += 1;
            }
        }
        prev = Some(b);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{empty_lines_at, CsvGrid};
    use crate::ingestion::source::GridSource;

    #[test]
    fn keeps_header_and_ragged_rows() {
        let mut grid = CsvGrid::from_csv_str("Date,Amount\n2024-01-01,100.5\n2024-01-02\n").unwrap();
        let rows = grid.sheet_rows(None).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Date", "Amount"]);
        assert_eq!(rows[2], vec!["2024-01-02"]);
    }

    #[test]
    fn delimiter_only_line_is_a_row_of_blanks() {
        let grid = CsvGrid::from_csv_str("a,b\n,\n").unwrap();
        assert_eq!(grid.rows()[1], vec!["", ""]);
    }

    #[test]
    fn empty_lines_keep_their_row_index() {
        let grid = CsvGrid::from_csv_str("Ledger\n\nDate,Amount\n2024-01-01,1\n\n2024-02-01,50\n").unwrap();
        let rows = grid.rows();

        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0], vec!["Ledger"]);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2], vec!["Date", "Amount"]);
        assert!(rows[4].is_empty());
        assert_eq!(rows[5], vec!["2024-02-01", "50"]);
    }

    #[test]
    fn crlf_and_leading_empty_lines() {
        let grid = CsvGrid::from_csv_str("\r\n\r\na,b\r\n\r\nc,d").unwrap();
        assert_eq!(
            grid.rows(),
            &[vec![], vec![], vec!["a".to_string(), "b".to_string()], vec![], vec!["c".to_string(), "d".to_string()]]
        );
    }

    #[test]
    fn multiline_quoted_field_is_one_row() {
        let grid = CsvGrid::from_csv_str("note,n\n\"two\nlines\",1\nnext,2\n").unwrap();
        assert_eq!(grid.rows().len(), 3);
        assert_eq!(grid.rows()[1], vec!["two\nlines", "1"]);
    }

    #[test]
    fn terminator_run_counting() {
        assert_eq!(empty_lines_at(b"a\n\nb", 1), 1);
        assert_eq!(empty_lines_at(b"a\n\nb", 2), 1);
        assert_eq!(empty_lines_at(b"a\r\n\r\nb", 2), 1);
        assert_eq!(empty_lines_at(b"\n\na", 0), 2);
        assert_eq!(empty_lines_at(b"a", 0), 0);
    }

    #[test]
    fn sheet_rows_lends_the_grid() {
        let mut grid = CsvGrid::from_csv_str("a\nb\n").unwrap();
        assert_eq!(grid.sheet_rows(Some("ignored")).unwrap().len(), 2);
        assert_eq!(grid.sheet_rows(None).unwrap().len(), 2);
    }
}
