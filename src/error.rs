// src/error.rs

use thiserror::Error;

/// Fatal conditions raised by validation or rendering.
///
/// A degenerate column range (minimum == maximum) is *not* an error; it is
/// handled by the fixed-midpoint policy in [`crate::scale::scale_value`].
#[derive(Debug, Error)]
pub enum ParallelError {
    #[error("`data` must be a non-empty sequence of records")]
    EmptyData,

    #[error("`columns` must list at least two columns, got {0}")]
    TooFewColumns(usize),

    #[error("columns in `data` are not consistent across records")]
    SchemaMismatch,

    #[error("unknown column(s) {requested:?}; data has columns {available:?}")]
    UnknownColumn {
        requested: Vec<String>,
        available: Vec<String>,
    },

    #[error("custom bounds are missing entries for column(s) {0:?}")]
    MissingBounds(Vec<String>),

    #[error("unknown colormap '{0}'")]
    UnknownColormap(String),

    #[error("failed to parse '{value}' in column '{column}' as a numeric literal")]
    Literal { column: String, value: String },

    #[error("failed to read input: {0}")]
    Csv(#[from] csv::Error),

    #[error("drawing failed: {0}")]
    Draw(String),
}

impl ParallelError {
    /// Wraps a drawing-backend failure. Backend error types vary per surface,
    /// so only the rendered message is carried.
    pub fn draw<E: std::fmt::Display>(err: E) -> Self {
        ParallelError::Draw(err.to_string())
    }
}
