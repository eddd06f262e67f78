// src/data_input/dataset.rs

use std::collections::{BTreeSet, HashMap};

use crate::error::ParallelError;

/// One tabular record: column name mapped to its numeric value.
///
/// Within one dataset every record carries the identical set of column
/// names; [`probe_schema`] spot-checks this invariant.
pub type Record = HashMap<String, f64>;

/// Returns the dataset's column set after probing schema consistency.
///
/// Consistency is checked against the first, second, and last record as a
/// cheap probe, not exhaustively. A mismatch in an unprobed record surfaces
/// later, at first use, and aborts the rendering call.
pub fn probe_schema(data: &[Record]) -> Result<BTreeSet<&str>, ParallelError> {
    if data.is_empty() {
        return Err(ParallelError::EmptyData);
    }
    let schema: BTreeSet<&str> = data[0].keys().map(String::as_str).collect();
    let probes = [1.min(data.len() - 1), data.len() - 1];
    for &idx in &probes {
        let other: BTreeSet<&str> = data[idx].keys().map(String::as_str).collect();
        if other != schema {
            return Err(ParallelError::SchemaMismatch);
        }
    }
    Ok(schema)
}

/// Checks element-wise that every requested name exists in the schema.
/// The error enumerates the offending names against the available columns.
pub fn check_columns(requested: &[String], schema: &BTreeSet<&str>) -> Result<(), ParallelError> {
    let missing: Vec<String> = requested
        .iter()
        .filter(|name| !schema.contains(name.as_str()))
        .cloned()
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ParallelError::UnknownColumn {
            requested: missing,
            available: schema.iter().map(|s| s.to_string()).collect(),
        })
    }
}

/// Looks one value up in one record, for use mid-render where the schema
/// probe may not have covered this record.
pub fn record_value(row: &Record, column: &str) -> Result<f64, ParallelError> {
    row.get(column)
        .copied()
        .ok_or_else(|| ParallelError::UnknownColumn {
            requested: vec![column.to_string()],
            available: row.keys().cloned().collect(),
        })
}
