//! Row filtering for [`crate::types::Frame`].
//!
//! The predicate is evaluated against a single reference column; the matching row positions are
//! then gathered from every column so rows stay aligned across columns.

use crate::error::{FrameError, FrameResult};
use crate::types::{Column, Frame, Scalar};

/// Returns a new [`Frame`] containing the rows for which `predicate` holds on `reference`.
///
/// Best-effort semantics:
///
/// - a missing reference column yields an empty frame (no columns);
/// - a column too short to hold every matching row is left out of the result.
///
/// Both cases are logged at `warn`. Use [`try_filter`] to get an error instead.
pub fn filter<F>(frame: &Frame, reference: &str, predicate: F) -> Frame
where
    F: FnMut(&Scalar) -> bool,
{
    let reference_col = match frame.column(reference) {
        Ok(col) => col,
        Err(e) => {
            log::warn!("filter: {e}; returning an empty frame");
            return Frame::new();
        }
    };

    let rows = matching_rows(reference_col, predicate);
    let mut out = Frame::new();
    for (name, column) in frame.iter() {
        match gather(column, &rows) {
            Some(filtered) => out.add_column(name, filtered),
            None => log::warn!(
                "filter: skipping column '{name}' (len {}) shorter than the selected rows",
                column.len()
            ),
        }
    }
    out
}

/// Strict form of [`filter`].
///
/// Fails with [`FrameError::ColumnNotFound`] when `reference` is missing and with
/// [`FrameError::RowIndexOutOfRange`] when a column cannot hold every matching row. Columns are
/// checked in name order.
pub fn try_filter<F>(frame: &Frame, reference: &str, predicate: F) -> FrameResult<Frame>
where
    F: FnMut(&Scalar) -> bool,
{
    let rows = matching_rows(frame.column(reference)?, predicate);

    let mut out = Frame::new();
    for name in frame.column_names() {
        let column = frame.column(name)?;
        if let Some(&index) = rows.iter().find(|&&i| i >= column.len()) {
            return Err(FrameError::RowIndexOutOfRange {
                column: name.to_string(),
                index,
                len: column.len(),
            });
        }
        if let Some(filtered) = gather(column, &rows) {
            out.add_column(name, filtered);
        }
    }
    Ok(out)
}

fn matching_rows<F>(column: &Column, mut predicate: F) -> Vec<usize>
where
    F: FnMut(&Scalar) -> bool,
{
    column
        .iter()
        .enumerate()
        .filter(|(_, v)| predicate(v))
        .map(|(i, _)| i)
        .collect()
}

/// `None` if any row is past the end of `column`.
fn gather(column: &Column, rows: &[usize]) -> Option<Column> {
    rows.iter().map(|&i| column.get(i).cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::{filter, try_filter};
    use crate::error::FrameError;
    use crate::types::{Frame, Scalar};

    fn sample_frame() -> Frame {
        Frame::new()
            .with_column(
                "date",
                vec![
                    Scalar::from("2024-01-01"),
                    Scalar::from("2024-01-02"),
                    Scalar::from("2024-01-03"),
                ],
            )
            .with_column(
                "amount",
                vec![Scalar::Number(100.5), Scalar::from("n/a"), Scalar::Number(50.0)],
            )
    }

    fn is_number(v: &Scalar) -> bool {
        v.is_number()
    }

    #[test]
    fn filter_keeps_rows_aligned_across_columns() {
        let frame = sample_frame();
        let out = filter(&frame, "amount", is_number);

        assert_eq!(out.len(), 2);
        assert_eq!(
            out.column("date").unwrap().values(),
            &[Scalar::from("2024-01-01"), Scalar::from("2024-01-03")]
        );
        assert_eq!(
            out.column("amount").unwrap().values(),
            &[Scalar::Number(100.5), Scalar::Number(50.0)]
        );
    }

    #[test]
    fn filter_with_numeric_threshold() {
        let frame = sample_frame();
        let out = filter(&frame, "amount", |v| matches!(v, Scalar::Number(n) if *n > 60.0));
        assert_eq!(out.row_count(), 1);
        assert_eq!(out.column("date").unwrap().values(), &[Scalar::from("2024-01-01")]);
    }

    #[test]
    fn filter_on_missing_reference_returns_empty_frame() {
        let frame = sample_frame();
        let out = filter(&frame, "missing", |_| true);
        assert!(out.is_empty());
    }

    #[test]
    fn filter_with_no_matches_keeps_every_column_empty() {
        let frame = sample_frame();
        let out = filter(&frame, "amount", |_| false);

        assert_eq!(out.column_names(), vec!["amount", "date"]);
        assert!(out.column("amount").unwrap().is_empty());
        assert!(out.column("date").unwrap().is_empty());
    }

    #[test]
    fn filter_always_true_is_value_equal() {
        let frame = sample_frame();
        let out = filter(&frame, "date", |_| true);
        assert_eq!(out, frame);
    }

    #[test]
    fn filter_skips_columns_shorter_than_selected_rows() {
        let frame = sample_frame().with_column("short", vec![Scalar::Number(1.0)]);
        let out = filter(&frame, "date", |_| true);

        assert!(!out.contains_column("short"));
        assert_eq!(out.column("date").unwrap().len(), 3);
    }

    #[test]
    fn filter_keeps_short_column_when_matches_fit() {
        let frame = sample_frame().with_column("short", vec![Scalar::Number(1.0)]);
        let out = filter(&frame, "date", |v| v.as_text() == Some("2024-01-01"));
        assert_eq!(out.column("short").unwrap().values(), &[Scalar::Number(1.0)]);
    }

    #[test]
    fn try_filter_reports_short_column() {
        let frame = sample_frame().with_column("short", vec![Scalar::Number(1.0)]);
        let err = try_filter(&frame, "date", |_| true).unwrap_err();
        assert!(matches!(
            err,
            FrameError::RowIndexOutOfRange { ref column, index: 1, len: 1 } if column == "short"
        ));
    }

    #[test]
    fn try_filter_reports_missing_reference() {
        let frame = sample_frame();
        let err = try_filter(&frame, "missing", |_| true).unwrap_err();
        assert!(matches!(err, FrameError::ColumnNotFound { ref name } if name == "missing"));
    }

    #[test]
    fn try_filter_matches_filter_on_consistent_frames() {
        let frame = sample_frame();
        let strict = try_filter(&frame, "amount", Scalar::is_number).unwrap();
        assert_eq!(strict, filter(&frame, "amount", Scalar::is_number));
    }
}
