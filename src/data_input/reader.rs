// src/data_input/reader.rs

use csv::ReaderBuilder;
use log::debug;
use std::path::Path;

use crate::data_input::dataset::Record;
use crate::error::ParallelError;

/// Reads a delimited file into a dataset of records.
///
/// The first row must be a header naming the columns. Every field is parsed
/// as a typed numeric literal: integers, floats, and booleans (`true`/`false`
/// coerce to 1.0/0.0). Raw strings are rejected — plotting is numeric-only.
pub fn read_records(path: &Path) -> Result<Vec<Record>, ParallelError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut data = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record = Record::with_capacity(headers.len());
        for (name, field) in headers.iter().zip(row.iter()) {
            record.insert(name.clone(), parse_literal(name, field)?);
        }
        data.push(record);
    }

    if data.is_empty() {
        return Err(ParallelError::EmptyData);
    }
    debug!(
        "read {} records with {} columns from {}",
        data.len(),
        headers.len(),
        path.display()
    );
    Ok(data)
}

/// Parses one trimmed CSV field as a numeric literal.
fn parse_literal(column: &str, field: &str) -> Result<f64, ParallelError> {
    if field.eq_ignore_ascii_case("true") {
        return Ok(1.0);
    }
    if field.eq_ignore_ascii_case("false") {
        return Ok(0.0);
    }
    field
        .parse::<f64>()
        .map_err(|_| ParallelError::Literal {
            column: column.to_string(),
            value: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_numbers() {
        assert_eq!(parse_literal("a", "3").unwrap(), 3.0);
        assert_eq!(parse_literal("a", "-2.5").unwrap(), -2.5);
        assert_eq!(parse_literal("a", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_parse_literal_booleans() {
        assert_eq!(parse_literal("a", "true").unwrap(), 1.0);
        assert_eq!(parse_literal("a", "False").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_literal_rejects_strings() {
        let err = parse_literal("species", "setosa").unwrap_err();
        match err {
            ParallelError::Literal { column, value } => {
                assert_eq!(column, "species");
                assert_eq!(value, "setosa");
            }
            other => panic!("expected Literal error, got {:?}", other),
        }
    }
}
