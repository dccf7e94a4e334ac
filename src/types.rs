//! Core data model types for ingestion.
//!
//! A loaded source becomes an in-memory [`DataSet`]: a [`Schema`] taken from the header row plus
//! row-major text cells. Cells are kept verbatim, so writing a dataset back out reproduces the
//! source values exactly.

/// A single named column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordered list of columns, as they appear in the source header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Build a schema from header names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Field::new).collect())
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<String>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major cell storage.
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<String>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// Create a new dataset holding copies of the rows at `positions`, in that order.
    ///
    /// The returned dataset preserves the original schema.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds.
    pub fn take_rows(&self, positions: &[usize]) -> Self {
        let rows = positions.iter().map(|&i| self.rows[i].clone()).collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }
}
