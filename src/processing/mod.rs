//! In-memory frame transformations.
//!
//! The processing layer operates on [`crate::types::Frame`] values, usually produced by range
//! ingestion. Every operation returns a new frame and leaves its input untouched.
//!
//! Currently implemented:
//!
//! - [`select()`]: column projection (output columns alias the input)
//! - [`filter()`] / [`try_filter()`]: row filtering by a predicate on a reference column
//! - [`sum()`] / [`reduce()`]: numeric aggregation (count/sum/min/max/mean)
//!
//! ## Example: select → filter → sum
//!
//! ```rust
//! use sheet_frame::processing::{filter, select, sum};
//! use sheet_frame::types::{Frame, Scalar};
//!
//! let frame = Frame::new()
//!     .with_column("date", vec![Scalar::from("2024-01-01"), Scalar::from("2024-01-02")])
//!     .with_column("amount", vec![Scalar::Number(100.5), Scalar::Number(-20.0)])
//!     .with_column("memo", vec![Scalar::from("salary"), Scalar::from("coffee")]);
//!
//! let ledger = select(&frame, &["date", "amount"]).unwrap();
//!
//! // Keep only incoming money.
//! let income = filter(&ledger, "amount", |v| matches!(v, Scalar::Number(n) if *n > 0.0));
//!
//! assert_eq!(sum(&income, "amount").unwrap(), 100.5);
//! ```

pub mod filter;
pub mod reduce;
pub mod select;

pub use filter::{filter, try_filter};
pub use reduce::{reduce, sum, ReduceOp};
pub use select::select;
