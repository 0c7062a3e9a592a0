//! In-memory tables and sample extraction.
//!
//! Reading files is left to the caller. A [`Table`] is built from records
//! that have already been split into fields, and every statistical input is
//! pulled out of it through the helpers here, so the test functions never
//! see table filtering.
//!
//! ```ignore
//! let table = Table::from_records(&["student_id", "teaching_method", "math_score"], rows)?;
//! let a = table.extract_sample_by_label("teaching_method", "A", "math_score")?;
//! let b = table.extract_sample_by_label("teaching_method", "B", "math_score")?;
//! ```

use crate::error::DataError;

/// Field values treated as missing.
const MISSING_MARKERS: [&str; 4] = ["", "na", "nan", "null"];

/// A single table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// A finite number.
    Number(f64),
    /// Non-numeric text (typically a group label).
    Text(String),
    /// Empty field or an NA marker.
    Missing,
}

impl Cell {
    /// Classify a raw field.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if MISSING_MARKERS.contains(&trimmed.to_ascii_lowercase().as_str()) {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number(value),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    /// True if the cell's text form equals `label`. Numeric cells compare by value.
    fn matches_label(&self, label: &str) -> bool {
        match self {
            Cell::Text(text) => text == label,
            Cell::Number(value) => label.trim().parse::<f64>().is_ok_and(|l| l == *value),
            Cell::Missing => false,
        }
    }
}

/// A column-oriented table of cells.
#[derive(Debug, Clone, Default)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table from a header and string records.
    ///
    /// Every record must have exactly as many fields as the header.
    pub fn from_records<H, R, F>(header: &[H], records: R) -> Result<Self, DataError>
    where
        H: AsRef<str>,
        R: IntoIterator<Item = Vec<F>>,
        F: AsRef<str>,
    {
        let names: Vec<String> = header.iter().map(|h| h.as_ref().trim().to_string()).collect();
        let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); names.len()];

        for (row, record) in records.into_iter().enumerate() {
            if record.len() != names.len() {
                return Err(DataError::RaggedRow {
                    row,
                    expected: names.len(),
                    found: record.len(),
                });
            }
            for (column, field) in columns.iter_mut().zip(&record) {
                column.push(Cell::parse(field.as_ref()));
            }
        }

        Ok(Self { names, columns })
    }

    /// Build a table from already-typed columns of equal length.
    pub fn from_columns(columns: Vec<(String, Vec<Cell>)>) -> Result<Self, DataError> {
        let expected = columns.first().map_or(0, |(_, cells)| cells.len());
        let mut table = Self::default();
        for (name, cells) in columns {
            if cells.len() != expected {
                return Err(DataError::RaggedRow {
                    row: expected.min(cells.len()),
                    expected,
                    found: cells.len(),
                });
            }
            table.names.push(name);
            table.columns.push(cells);
        }
        Ok(table)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names, in order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Fail with the first missing name if any of `names` is absent.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), DataError> {
        for name in names {
            self.column(name)?;
        }
        Ok(())
    }

    fn column(&self, name: &str) -> Result<&[Cell], DataError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// All numeric values of a column, skipping missing cells.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, DataError> {
        let cells = self.column(name)?;
        let mut values = Vec::with_capacity(cells.len());
        for (row, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Number(value) => values.push(*value),
                Cell::Missing => {}
                Cell::Text(text) => {
                    return Err(DataError::NotNumeric {
                        column: name.to_string(),
                        row,
                        value: text.clone(),
                    })
                }
            }
        }
        Ok(values)
    }

    /// Values of `value_col` on rows where `group_col == label`, skipping missing values.
    ///
    /// Errors when either column is absent, when no row carries `label`, or
    /// when a selected value is not numeric.
    pub fn extract_sample_by_label(
        &self,
        group_col: &str,
        label: &str,
        value_col: &str,
    ) -> Result<Vec<f64>, DataError> {
        let groups = self.column(group_col)?;
        let values = self.column(value_col)?;

        let mut matched = false;
        let mut sample = Vec::new();
        for (row, (group, value)) in groups.iter().zip(values).enumerate() {
            if !group.matches_label(label) {
                continue;
            }
            matched = true;
            match value {
                Cell::Number(v) => sample.push(*v),
                Cell::Missing => {}
                Cell::Text(text) => {
                    return Err(DataError::NotNumeric {
                        column: value_col.to_string(),
                        row,
                        value: text.clone(),
                    })
                }
            }
        }

        if !matched {
            return Err(DataError::UnknownLabel {
                column: group_col.to_string(),
                label: label.to_string(),
            });
        }
        Ok(sample)
    }

    /// Matched `(before, after)` samples from two columns.
    ///
    /// A row is kept only when both cells are numeric, so the outputs always
    /// have equal length and stay aligned row by row.
    pub fn paired_columns(
        &self,
        before_col: &str,
        after_col: &str,
    ) -> Result<(Vec<f64>, Vec<f64>), DataError> {
        let before_cells = self.column(before_col)?;
        let after_cells = self.column(after_col)?;

        let mut before = Vec::with_capacity(before_cells.len());
        let mut after = Vec::with_capacity(after_cells.len());
        for (row, pair) in before_cells.iter().zip(after_cells).enumerate() {
            match pair {
                (Cell::Number(b), Cell::Number(a)) => {
                    before.push(*b);
                    after.push(*a);
                }
                (Cell::Text(text), _) => {
                    return Err(DataError::NotNumeric {
                        column: before_col.to_string(),
                        row,
                        value: text.clone(),
                    })
                }
                (_, Cell::Text(text)) => {
                    return Err(DataError::NotNumeric {
                        column: after_col.to_string(),
                        row,
                        value: text.clone(),
                    })
                }
                _ => {}
            }
        }
        Ok((before, after))
    }
}
