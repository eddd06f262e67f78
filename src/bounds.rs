// src/bounds.rs

use std::collections::HashMap;

use crate::data_input::dataset::{record_value, Record};
use crate::error::ParallelError;

/// Per-column `(minimum, maximum)` used to normalize values into unit space.
pub type Bounds = HashMap<String, (f64, f64)>;

/// Computes per-column bounds as the exact min/max over the dataset.
/// No smoothing or padding is applied. Caller-supplied custom bounds bypass
/// this entirely; see [`crate::chart::ParallelConfig::custom_bounds`].
pub fn data_bounds(data: &[Record], columns: &[String]) -> Result<Bounds, ParallelError> {
    let mut bounds = Bounds::with_capacity(columns.len());
    for column in columns {
        let mut minimum = f64::INFINITY;
        let mut maximum = f64::NEG_INFINITY;
        for row in data {
            let value = record_value(row, column)?;
            minimum = minimum.min(value);
            maximum = maximum.max(value);
        }
        bounds.insert(column.clone(), (minimum, maximum));
    }
    Ok(bounds)
}
