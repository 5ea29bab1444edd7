//! Unified range ingestion entrypoints.
//!
//! - [`read_range`] reads an A1-bounded range from any [`GridSource`].
//! - [`ingest_from_path`] opens a CSV or spreadsheet file, reads the range and reports the outcome
//!   to an optional [`IngestionObserver`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FrameError, FrameResult};
use crate::types::Frame;

use super::cell_ref::SheetRange;
use super::csv::CsvGrid;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::range::{ingest_range_with, RangeOptions};
use super::source::GridSource;

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values (a single sheet).
    Csv,
    /// Spreadsheet/workbook formats (feature-gated behind `excel`).
    Excel,
}

impl SourceFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(Self::Excel),
            _ => None,
        }
    }
}

/// Which sheet to read the range from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SheetSelection {
    /// The first sheet of the workbook.
    #[default]
    First,
    /// A single named sheet.
    Sheet(String),
}

impl SheetSelection {
    pub fn name(&self) -> Option<&str> {
        match self {
            SheetSelection::First => None,
            SheetSelection::Sheet(name) => Some(name.as_str()),
        }
    }
}

/// Options controlling path-based ingestion.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// If `None`, detect the format from the file extension.
    pub format: Option<SourceFormat>,
    /// Sheet to read (ignored for CSV).
    pub sheet: SheetSelection,
    /// Cell typing options.
    pub range: RangeOptions,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("sheet", &self.sheet)
            .field("range", &self.range)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            sheet: SheetSelection::default(),
            range: RangeOptions::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Read the block starting at `start_cell` (header row + first column) and spanning to the column
/// of `end_cell`.
///
/// ```rust
/// use sheet_frame::ingestion::{read_range, MemoryGrid, RangeOptions};
/// use sheet_frame::processing::sum;
///
/// let mut grid = MemoryGrid::new(vec![
///     vec!["Ledger", ""],
///     vec!["Date", "Amount"],
///     vec!["2024-01-01", "100.5"],
///     vec!["2024-01-02", "200"],
/// ]);
/// let frame = read_range(&mut grid, None, "A2", "B2", &RangeOptions::default()).unwrap();
/// assert_eq!(sum(&frame, "Amount").unwrap(), 300.5);
/// ```
pub fn read_range<G: GridSource + ?Sized>(
    source: &mut G,
    sheet: Option<&str>,
    start_cell: &str,
    end_cell: &str,
    options: &RangeOptions,
) -> FrameResult<Frame> {
    let range = SheetRange::from_a1(start_cell, end_cell)?;
    let rows = source.sheet_rows(sheet)?;
    ingest_range_with(&*rows, range, options)
}

/// Open `path` and read the range `start_cell`..`end_cell` into a [`Frame`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use sheet_frame::ingestion::{ingest_from_path, IngestionOptions, LogObserver, SheetSelection};
///
/// # fn main() -> Result<(), sheet_frame::FrameError> {
/// let opts = IngestionOptions {
///     sheet: SheetSelection::Sheet("January".to_string()),
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let frame = ingest_from_path("ledger.xlsx", "A5", "C5", &opts)?;
/// println!("columns={:?}", frame.column_names());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(
    path: impl AsRef<Path>,
    start_cell: &str,
    end_cell: &str,
    options: &IngestionOptions,
) -> FrameResult<Frame> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format,
        sheet: options.sheet.name().map(str::to_string),
        range: format!("{start_cell}:{end_cell}"),
    };

    let sheet = options.sheet.name();
    let result = match format {
        SourceFormat::Csv => CsvGrid::from_path(path)
            .and_then(|mut grid| read_range(&mut grid, sheet, start_cell, end_cell, &options.range)),
        SourceFormat::Excel => read_excel_range(path, sheet, start_cell, end_cell, &options.range),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(frame) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: frame.row_count(),
                    columns: frame.len(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &FrameError) -> IngestionSeverity {
    match e {
        FrameError::Io(_) => IngestionSeverity::Critical,
        FrameError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        #[cfg(feature = "excel")]
        FrameError::Excel(err) => match err {
            calamine::Error::Io(_) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        FrameError::UnsupportedSource { .. }
        | FrameError::SheetNotFound { .. }
        | FrameError::InvalidCellRef { .. }
        | FrameError::MalformedRange { .. } => IngestionSeverity::Error,
        FrameError::ColumnNotFound { .. }
        | FrameError::RowIndexOutOfRange { .. }
        | FrameError::TypeMismatch { .. }
        | FrameError::Json(_) => IngestionSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> FrameResult<SourceFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| FrameError::UnsupportedSource {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    SourceFormat::from_extension(ext).ok_or_else(|| FrameError::UnsupportedSource {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

fn read_excel_range(
    path: &Path,
    sheet: Option<&str>,
    start_cell: &str,
    end_cell: &str,
    options: &RangeOptions,
) -> FrameResult<Frame> {
    // Avoid unused warnings when the feature is off.
    let _ = (path, sheet, start_cell, end_cell, options);

    #[cfg(feature = "excel")]
    {
        let mut workbook = super::excel::ExcelWorkbook::open(path)?;
        read_range(&mut workbook, sheet, start_cell, end_cell, options)
    }

    #[cfg(not(feature = "excel"))]
    {
        Err(FrameError::UnsupportedSource {
            message: "excel ingestion not enabled (enable cargo feature 'excel')".to_string(),
        })
    }
}

/// An owned ingestion request, e.g. for queuing work.
#[derive(Clone)]
pub struct RangeRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Header row and first column, e.g. `A5`.
    pub start_cell: String,
    /// Any cell in the last column, e.g. `C5`.
    pub end_cell: String,
    /// Options controlling ingestion.
    pub options: IngestionOptions,
}

impl fmt::Debug for RangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeRequest")
            .field("path", &self.path)
            .field("range", &format_args!("{}:{}", self.start_cell, self.end_cell))
            .field("options", &self.options)
            .finish()
    }
}

impl RangeRequest {
    /// Execute the request by calling [`ingest_from_path`].
    pub fn run(&self) -> FrameResult<Frame> {
        ingest_from_path(&self.path, &self.start_cell, &self.end_cell, &self.options)
    }
}
