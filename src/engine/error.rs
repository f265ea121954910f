/// Top-level error type for the report engine.
/// Any of these aborts loading of the current source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("Missing pay rate column, expected one of: {}", expected.join(", "))]
    MissingRateColumn { expected: &'static [&'static str] },
}

/// Soft (row-level) errors during `EmployeeRecord` validation.
/// These don't stop loading, we log and skip the row.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Field '{field}' is missing or empty")]
    MissingField { field: &'static str },

    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' is negative: {value}")]
    Negative { field: &'static str, value: String },

    #[error("Field '{field}' is outside the supported decimal range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("Computing '{field}' overflowed")]
    Overflow { field: &'static str },

    #[error("Row has {got} fields, header has {expected}")]
    ColumnCount { expected: usize, got: usize },
}
