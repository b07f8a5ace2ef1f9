//! Backend-neutral table representation and typed cell conversion.
//!
//! Both the SQLite and the CSV backend read a table into a [`RawTable`];
//! the conversion into agent/KPI records happens once, here.

use crate::errors::DataSourceError;
use rusqlite::types::ValueRef;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    pub fn from_sql(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Null => Cell::Null,
            ValueRef::Integer(i) => Cell::Integer(i),
            ValueRef::Real(f) => Cell::Real(f),
            ValueRef::Text(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Cell::Text(String::from_utf8_lossy(b).into_owned()),
        }
    }

    fn as_number(&self) -> Result<f64, String> {
        match self {
            Cell::Null => Err("empty value".into()),
            Cell::Integer(i) => Ok(*i as f64),
            Cell::Real(f) => Ok(*f),
            Cell::Text(t) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err("empty value".into());
                }
                t.parse::<f64>()
                    .map_err(|_| format!("'{t}' is not a number"))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(name: &str, columns: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of every required column, in the order given.
    pub fn require_columns<const N: usize>(
        &self,
        required: [&str; N],
    ) -> Result<[usize; N], DataSourceError> {
        let mut idx = [0usize; N];
        for (slot, col) in idx.iter_mut().zip(required) {
            *slot = self
                .columns
                .iter()
                .position(|c| c.trim() == col)
                .ok_or_else(|| DataSourceError::MissingColumn {
                    table: self.name.clone(),
                    column: col.to_string(),
                })?;
        }
        Ok(idx)
    }

    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|col| !self.columns.iter().any(|c| c.trim() == **col))
            .map(|c| c.to_string())
            .collect()
    }
}

/// 2^63: integral floats at or above this do not fit an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// `"100234.0"` -> `"100234"`. Only plain digits followed by a zero fraction
/// qualify, so `"00123"` or `"A100.0"` are left alone.
fn integral_digits(s: &str) -> Option<&str> {
    let (whole, fraction) = s.split_once('.')?;
    let digits = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let zeros = !fraction.is_empty() && fraction.bytes().all(|b| b == b'0');
    (digits && zeros).then_some(whole)
}

/// Cursor over one row that converts cells with table/column/row context.
pub struct RowReader<'a> {
    table: &'a RawTable,
    row: usize,
}

impl<'a> RowReader<'a> {
    pub fn new(table: &'a RawTable, row: usize) -> Self {
        Self { table, row }
    }

    fn cell(&self, col: usize) -> &'a Cell {
        static NULL: Cell = Cell::Null;
        // short CSV records leave trailing columns empty
        self.table.rows[self.row].get(col).unwrap_or(&NULL)
    }

    fn invalid(&self, col: usize, reason: impl Into<String>) -> DataSourceError {
        DataSourceError::InvalidCell {
            table: self.table.name.clone(),
            column: self.table.columns[col].clone(),
            // 1-based, header excluded, like a spreadsheet data row
            row: self.row + 1,
            reason: reason.into(),
        }
    }

    /// Text of a key column. Integral numbers (e.g. MIS 100234 stored as a
    /// number, or written as `100234.0` in a CSV export) come back as their
    /// decimal digits.
    pub fn key(&self, col: usize) -> Result<String, DataSourceError> {
        let s = self.text(col)?;
        if s.is_empty() {
            return Err(self.invalid(col, "empty identifier"));
        }
        match integral_digits(&s) {
            Some(digits) => Ok(digits.to_string()),
            None => Ok(s),
        }
    }

    pub fn text(&self, col: usize) -> Result<String, DataSourceError> {
        match self.cell(col) {
            Cell::Null => Ok(String::new()),
            Cell::Text(t) => Ok(t.clone()),
            Cell::Integer(i) => Ok(i.to_string()),
            Cell::Real(f) if f.fract() == 0.0 && f.abs() < I64_LIMIT => {
                Ok(format!("{}", *f as i64))
            }
            Cell::Real(f) => Ok(f.to_string()),
        }
    }

    /// Like [`text`](Self::text), but a NULL or empty cell is `None`.
    pub fn optional_text(&self, col: usize) -> Result<Option<String>, DataSourceError> {
        let s = self.text(col)?;
        Ok((!s.is_empty()).then_some(s))
    }

    pub fn count(&self, col: usize) -> Result<u64, DataSourceError> {
        let n = self.cell(col).as_number().map_err(|r| self.invalid(col, r))?;
        if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
            return Err(self.invalid(col, format!("{n} is not a non-negative whole number")));
        }
        Ok(n as u64)
    }

    pub fn ratio(&self, col: usize) -> Result<f64, DataSourceError> {
        let n = self.number(col)?;
        if !(0.0..=1.0).contains(&n) {
            return Err(self.invalid(col, format!("{n} is outside [0, 1]")));
        }
        Ok(n)
    }

    pub fn number(&self, col: usize) -> Result<f64, DataSourceError> {
        let n = self.cell(col).as_number().map_err(|r| self.invalid(col, r))?;
        if !n.is_finite() {
            return Err(self.invalid(col, "not a finite number"));
        }
        Ok(n)
    }
}
