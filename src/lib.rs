//! `sheet-frame` is a small column-oriented data frame for spreadsheet ranges.
//!
//! A bounded range of a sheet (header row plus the data block below it) is ingested into an
//! in-memory [`types::Frame`], transformed with [`processing`] (column projection, row filtering),
//! summarized (numeric aggregation) and exported as a row-oriented JSON document with [`export`].
//!
//! ## Data model
//!
//! - [`types::Scalar`]: one cell, `Number(f64)`, `Text(String)` or `Empty`
//! - [`types::Column`]: an immutable, cheaply shared sequence of scalars
//! - [`types::Frame`]: column name → column; no schema, no stored row count
//!
//! ## Quick example: ingest a range
//!
//! ```rust
//! use sheet_frame::ingestion::ingest_range;
//! use sheet_frame::types::Scalar;
//!
//! let rows = vec![
//!     vec!["Date", "Amount"],
//!     vec!["2024-01-01", "100.5"],
//!     vec!["2024-01-02", "200"],
//!     vec!["", ""],
//!     vec!["2024-01-03", "50"], // below the blank row: not read
//! ];
//!
//! let frame = ingest_range(&rows, 0, 0, 1).unwrap();
//! assert_eq!(
//!     frame.column("Amount").unwrap().values(),
//!     &[Scalar::Number(100.5), Scalar::Number(200.0)]
//! );
//! ```
//!
//! Files are read through [`ingestion::ingest_from_path`], which accepts CSV and (with the `excel`
//! feature) spreadsheet workbooks, and takes the range as A1 references:
//!
//! ```no_run
//! use sheet_frame::ingestion::{ingest_from_path, IngestionOptions};
//!
//! # fn main() -> Result<(), sheet_frame::FrameError> {
//! // Header on row 5, columns A through C.
//! let frame = ingest_from_path("ledger.csv", "A5", "C5", &IngestionOptions::default())?;
//! println!("rows={}", frame.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline example
//!
//! ```rust
//! use sheet_frame::export::to_json;
//! use sheet_frame::ingestion::ingest_range;
//! use sheet_frame::processing::{filter, select, sum};
//! use sheet_frame::types::Scalar;
//!
//! let rows = vec![
//!     vec!["Date", "Amount", "Memo"],
//!     vec!["2024-01-01", "100.5", "salary"],
//!     vec!["2024-01-02", "-20", "coffee"],
//! ];
//! let frame = ingest_range(&rows, 0, 0, 2).unwrap();
//!
//! let ledger = select(&frame, &["Date", "Amount"]).unwrap();
//! let spending = filter(&ledger, "Amount", |v| matches!(v, Scalar::Number(n) if *n < 0.0));
//!
//! assert_eq!(sum(&spending, "Amount").unwrap(), -20.0);
//! println!("{}", to_json(&spending).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`types`]: scalar, column and frame types
//! - [`processing`]: select / filter / sum / reduce
//! - [`export`]: records and JSON output
//! - [`ingestion`]: range ingestion and grid sources (CSV, Excel, in-memory)
//! - [`prompt`]: analysis prompt text built from summarized values
//! - [`error`]: the error type shared across the crate
//!
//! ## Cargo features
//!
//! - `excel`: read `.xlsx`/`.xls`/`.xlsm`/`.xlsb`/`.ods` workbooks (adds `calamine`)
//! - `excel_test_writer`: Excel integration tests that generate a workbook at runtime

pub mod error;
pub mod export;
pub mod ingestion;
pub mod processing;
pub mod prompt;
pub mod types;

pub use error::{FrameError, FrameResult};
