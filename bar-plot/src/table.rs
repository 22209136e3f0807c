//! Minimal ordered, named-column table feeding the plot helpers.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// A single cell, mirroring the handful of dtypes the helpers care about.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
    Null,
}

impl Value {
    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => Ok(()),
        }
    }
}

/// Rows keep their insertion order; nothing here ever sorts them.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row. The cell count must match the column count.
    pub fn push_row(&mut self, cells: Vec<Value>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(Error::RowShape {
                want: self.columns.len(),
                got: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Read a table from CSV. The header row names the columns; cells that
    /// parse as numbers become `Number`, empty cells `Null`, the rest `Text`.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut r = csv::Reader::from_reader(reader);
        let columns: Vec<String> = r.headers()?.iter().map(str::to_owned).collect();
        let mut table = Table::new(columns);
        for record in r.records() {
            let row = record?;
            table.push_row(row.iter().map(parse_cell).collect())?;
        }
        Ok(table)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv(File::open(path)?)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_owned()))
    }

    /// The named column as numbers.
    pub fn numbers(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells[idx].as_f64().ok_or_else(|| Error::NotNumeric {
                    column: name.to_owned(),
                    row,
                })
            })
            .collect()
    }

    /// The named column as display strings.
    pub fn labels(&self, name: &str) -> Result<Vec<String>> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|cells| cells[idx].to_string()).collect())
    }
}

fn parse_cell(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::Text(cell.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(vec!["route".to_owned(), "duration_ms".to_owned()]);
        t.push_row(vec![
            Value::Text("Airport Express".to_owned()),
            Value::Number(5_400_000.0),
        ])
        .unwrap();
        t.push_row(vec![
            Value::Text("Harbor Loop".to_owned()),
            Value::Number(3_661_000.0),
        ])
        .unwrap();
        t
    }

    #[test]
    fn column_lookup() {
        let t = sample();
        assert_eq!(t.column_index("route").unwrap(), 0);
        assert!(matches!(
            t.column_index("nope"),
            Err(Error::ColumnNotFound(name)) if name == "nope"
        ));
    }

    #[test]
    fn numbers_rejects_text_cells() {
        let t = sample();
        assert_eq!(t.numbers("duration_ms").unwrap(), vec![5_400_000.0, 3_661_000.0]);
        assert!(matches!(
            t.numbers("route"),
            Err(Error::NotNumeric { row: 0, .. })
        ));
    }

    #[test]
    fn labels_format_numbers_plainly() {
        let t = sample();
        assert_eq!(
            t.labels("duration_ms").unwrap(),
            vec!["5400000".to_owned(), "3661000".to_owned()]
        );
    }

    #[test]
    fn push_row_checks_arity() {
        let mut t = Table::new(vec!["a".to_owned(), "b".to_owned()]);
        assert!(matches!(
            t.push_row(vec![Value::Null]),
            Err(Error::RowShape { want: 2, got: 1 })
        ));
    }

    #[test]
    fn csv_cells_are_typed() {
        let csv = "route,duration_ms,note\nA,5400000,fast\nB,,\n";
        let t = Table::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(t.columns(), ["route", "duration_ms", "note"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.numbers("duration_ms").unwrap_err().to_string(),
            "column 'duration_ms' is not numeric at row 1");
        assert_eq!(t.labels("note").unwrap(), vec!["fast".to_owned(), String::new()]);
    }

    #[test]
    fn row_order_is_insertion_order() {
        let t = sample();
        assert_eq!(
            t.labels("route").unwrap(),
            vec!["Airport Express".to_owned(), "Harbor Loop".to_owned()]
        );
    }
}
