//! Core data model: [`Scalar`] cells, [`Column`]s and the column-oriented [`Frame`].
//!
//! A [`Frame`] maps column names to [`Column`]s. Columns are immutable once built and share their
//! storage on clone, so a frame produced by [`crate::processing::select`] aliases the source
//! frame's columns instead of copying them.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::error::{FrameError, FrameResult};

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Double-precision number.
    Number(f64),
    /// Raw text, possibly empty.
    Text(String),
    /// No value (e.g. a cell past the end of a ragged row).
    Empty,
}

impl Scalar {
    /// Returns the number if this is a [`Scalar::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text if this is a [`Scalar::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::Number(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Scalar::Empty)
    }

    /// Short tag name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Number(_) => "number",
            Scalar::Text(_) => "text",
            Scalar::Empty => "empty",
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// `Empty` is written as `""` so every JSON value is a number or a string.
impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Number(v) => serializer.serialize_f64(*v),
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Empty => serializer.serialize_str(""),
        }
    }
}

/// An ordered, immutable sequence of [`Scalar`] values.
///
/// Cloning a column is cheap: clones point at the same storage (see [`Column::ptr_eq`]). There is
/// no in-place mutation, so aliased columns never observe each other's writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    values: Arc<[Scalar]>,
}

impl Column {
    /// Create a column from owned values.
    pub fn new(values: Vec<Scalar>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Number of rows held by this column.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Scalar> {
        self.values.get(row)
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.values.iter()
    }

    /// Returns `true` if both handles share the same underlying storage.
    pub fn ptr_eq(&self, other: &Column) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }

    /// Iterate the numeric entries in storage order, skipping text and empty cells.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(Scalar::as_number)
    }

    /// Collect the numeric entries, failing on the first text cell.
    ///
    /// Empty cells are skipped. `name` is only used to label the error.
    pub fn to_f64_vec(&self, name: &str) -> FrameResult<Vec<f64>> {
        let mut out = Vec::with_capacity(self.values.len());
        for (row, v) in self.values.iter().enumerate() {
            match v {
                Scalar::Number(n) => out.push(*n),
                Scalar::Empty => {}
                Scalar::Text(_) => {
                    return Err(FrameError::TypeMismatch {
                        column: name.to_string(),
                        row,
                        expected: "number",
                        found: v.kind(),
                    });
                }
            }
        }
        Ok(out)
    }
}

impl From<Vec<Scalar>> for Column {
    fn from(values: Vec<Scalar>) -> Self {
        Column::new(values)
    }
}

impl FromIterator<Scalar> for Column {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Column::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Column-oriented table: a mapping from column name to [`Column`].
///
/// Column order is not tracked; [`Frame::column_names`] returns names sorted. No row count is
/// stored and columns are not required to agree in length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: HashMap<String, Column>,
}

impl Frame {
    /// Create an empty frame (no columns).
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `column` under `name`, replacing any existing column with that name.
    ///
    /// Lengths are not checked against the other columns.
    pub fn add_column(&mut self, name: impl Into<String>, column: impl Into<Column>) {
        self.columns.insert(name.into(), column.into());
    }

    /// Builder form of [`Frame::add_column`].
    pub fn with_column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.add_column(name, column);
        self
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> FrameResult<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| FrameError::ColumnNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Column names in lexicographic order.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.columns.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate `(name, column)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Canonical row count: the length of the column whose name sorts first.
    ///
    /// Returns `0` for a frame without columns.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .min_by(|a, b| a.0.cmp(b.0))
            .map(|(_, col)| col.len())
            .unwrap_or(0)
    }
}
