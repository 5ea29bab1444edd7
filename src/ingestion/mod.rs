//! Range ingestion: building a [`crate::types::Frame`] from a block of raw text cells.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - detects the file format by extension (or you can override via [`IngestionOptions`])
//! - resolves the A1 range and reads the block below the header row
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Lower-level pieces:
//! - [`range`]: the grid → frame algorithm ([`ingest_range`])
//! - [`cell_ref`]: A1 references and [`SheetRange`]
//! - [`source`]: the [`GridSource`] trait and [`MemoryGrid`]
//! - [`csv`] and `excel` (feature `excel`): file-backed grid sources

pub mod cell_ref;
pub mod csv;
#[cfg(feature = "excel")]
pub mod excel;
pub mod observability;
pub mod range;
pub mod source;
pub mod unified;

pub use cell_ref::{CellRef, SheetRange};
pub use self::csv::CsvGrid;
#[cfg(feature = "excel")]
pub use excel::ExcelWorkbook;
pub use observability::{
    CompositeObserver, EventSink, FileObserver, IngestionContext, IngestionEvent, IngestionObserver,
    IngestionSeverity, IngestionStats, LogObserver, StdErrObserver,
};
pub use range::{ingest_range, ingest_range_with, parse_cell, BlankCellPolicy, RangeOptions};
pub use source::{GridSource, MemoryGrid};
pub use unified::{ingest_from_path, read_range, IngestionOptions, RangeRequest, SheetSelection, SourceFormat};
