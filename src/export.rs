//! Row-major export of a [`Frame`].
//!
//! [`to_records`] flattens the frame into one [`Record`] per row; [`to_json`] renders those records
//! as a pretty-printed JSON array.
//!
//! The row count is the length of the column whose name sorts first (see [`Frame::row_count`]).
//! Rows past the end of a shorter column simply omit that key.

use std::collections::BTreeMap;

use crate::error::FrameResult;
use crate::types::{Frame, Scalar};

/// One exported row: column name → value.
pub type Record = BTreeMap<String, Scalar>;

/// Flatten `frame` into records ordered by row index.
pub fn to_records(frame: &Frame) -> Vec<Record> {
    let row_count = frame.row_count();
    let mut records = vec![Record::new(); row_count];

    for (name, column) in frame.iter() {
        for (record, value) in records.iter_mut().zip(column.iter()) {
            record.insert(name.to_string(), value.clone());
        }
    }
    records
}

/// Render `frame` as a JSON array of objects, indented by two spaces.
///
/// An empty frame renders as `[]`.
pub fn to_json(frame: &Frame) -> FrameResult<String> {
    Ok(serde_json::to_string_pretty(&to_records(frame))?)
}

#[cfg(test)]
mod tests {
    use super::{to_json, to_records};
    use crate::types::{Frame, Scalar};

    #[test]
    fn empty_frame_exports_nothing() {
        let frame = Frame::new();
        assert!(to_records(&frame).is_empty());
        assert_eq!(to_json(&frame).unwrap(), "[]");
    }

    #[test]
    fn records_follow_row_order() {
        let frame = Frame::new()
            .with_column("amount", vec![Scalar::Number(1.0), Scalar::Number(2.0)])
            .with_column("memo", vec![Scalar::from("a"), Scalar::from("b")]);

        let records = to_records(&frame);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["amount"], Scalar::Number(1.0));
        assert_eq!(records[1]["memo"], Scalar::from("b"));
    }

    #[test]
    fn ragged_columns_omit_missing_keys() {
        let frame = Frame::new()
            .with_column("a", vec![Scalar::Number(1.0), Scalar::Number(2.0), Scalar::Number(3.0)])
            .with_column("b", vec![Scalar::from("x")]);

        let records = to_records(&frame);
        assert_eq!(records.len(), 3);
        assert!(records[0].contains_key("b"));
        assert!(!records[1].contains_key("b"));
        assert!(!records[2].contains_key("b"));
    }

    #[test]
    fn row_count_comes_from_first_sorted_column() {
        let frame = Frame::new()
            .with_column("zeta", vec![Scalar::Number(1.0), Scalar::Number(2.0)])
            .with_column("alpha", vec![Scalar::Number(9.0)]);

        let records = to_records(&frame);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["zeta"], Scalar::Number(1.0));
    }

    #[test]
    fn json_renders_each_scalar_kind() {
        let frame = Frame::new()
            .with_column("n", vec![Scalar::Number(100.5)])
            .with_column("t", vec![Scalar::from("rent")])
            .with_column("e", vec![Scalar::Empty]);

        let json = to_json(&frame).unwrap();
        let expected = "[\n  {\n    \"e\": \"\",\n    \"n\": 100.5,\n    \"t\": \"rent\"\n  }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn json_parses_back_as_array_of_objects() {
        let frame = Frame::new().with_column("n", vec![Scalar::Number(1.0), Scalar::Number(2.5)]);
        let json = to_json(&frame).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["n"], serde_json::json!(2.5));
    }
}
