use std::path::PathBuf;
use thiserror::Error;

/// Coarse grouping of failures, used to decide how a failed request is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad file, bad table, or a request that does not fit the table.
    Input,
    /// Data that would make a chart degenerate (zero axis, zero-sum pie).
    Geometry,
    /// Surface allocation, encoding, or output write failures.
    Render,
}

/// Everything that can go wrong between reading the table and writing a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("missing file {}", .0.display())]
    MissingFile(PathBuf),
    #[error("{} can't be read", .0.display())]
    Unreadable(PathBuf),
    #[error("{} is not a .csv file", .0.display())]
    NotCsv(PathBuf),
    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(String),
    #[error("input has no heading row with at least one data column")]
    EmptyInput,
    #[error("line {line}: expected {expected} cells, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}, column {column}: {cell:?} is not a finite number")]
    NotANumber {
        line: usize,
        column: usize,
        cell: String,
    },
    #[error("line {line}, column {column}: negative value {value}")]
    NegativeValue {
        line: usize,
        column: usize,
        value: f64,
    },
    #[error("empty request: no columns selected")]
    EmptyRequest,
    #[error("column {column} is out of range (table has {columns} data columns)")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[error("scatter plot needs exactly 2 columns, got {0}")]
    ScatterColumns(usize),
    #[error("{heading:?} has {found} entries, expected {expected}")]
    LengthMismatch {
        heading: String,
        expected: usize,
        found: usize,
    },
    #[error("no rows to plot")]
    NoRows,
    #[error("{0:?}: all values are zero, the axis would be degenerate")]
    DegenerateAxis(String),
    #[error("{0:?}: values sum to zero, no pie can be drawn")]
    ZeroSum(String),
    #[error("render failed: {0}")]
    Render(String),
    #[error("encoding failed: {0}")]
    Encode(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ChartError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ChartError::DegenerateAxis(_) | ChartError::ZeroSum(_) => ErrorClass::Geometry,
            ChartError::Render(_) | ChartError::Encode(_) | ChartError::Io(_) => {
                ErrorClass::Render
            }
            _ => ErrorClass::Input,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
