// src/axis.rs

use crate::scale::{invert_fraction, scale_value};

/// Tick layout for one vertical axis: unit-space positions paired with their
/// display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
}

/// Derives tick positions and labels for one column's axis.
///
/// - A degenerate column (`minimum == maximum`) gets a single tick at the
///   axis midpoint labeled with the constant value.
/// - Otherwise `n_ticks + 1` evenly spaced positions span `[0, 1]`, with
///   labels evenly spaced across `[minimum, maximum]` rounded to `precision`
///   decimal places.
/// - A custom tick sequence replaces both: positions come from scaling each
///   custom value against the bounds, labels are the custom values verbatim
///   (unrounded).
/// - Inversion reflects every position about the midpoint; the underlying
///   coordinate space stays `[0, 1]`.
pub fn format_axis(
    minimum: f64,
    maximum: f64,
    invert: bool,
    custom_ticks: Option<&[f64]>,
    n_ticks: usize,
    precision: usize,
) -> AxisTicks {
    if minimum == maximum {
        return AxisTicks {
            positions: vec![0.5],
            labels: vec![format_value(maximum)],
        };
    }

    let (mut positions, labels) = match custom_ticks {
        Some(ticks) => {
            let positions: Vec<f64> = ticks
                .iter()
                .map(|&t| scale_value(t, minimum, maximum))
                .collect();
            let labels = ticks.iter().map(|&t| format_value(t)).collect();
            (positions, labels)
        }
        None => {
            let positions: Vec<f64> = (0..=n_ticks)
                .map(|i| i as f64 / n_ticks as f64)
                .collect();
            let labels = positions
                .iter()
                .map(|&p| format_value(round_to(minimum + p * (maximum - minimum), precision)))
                .collect();
            (positions, labels)
        }
    };

    if invert {
        for p in positions.iter_mut() {
            *p = invert_fraction(*p);
        }
    }

    AxisTicks { positions, labels }
}

pub(crate) fn round_to(value: f64, precision: usize) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Shortest display form of a tick value: `5` rather than `5.0`, `0.5` as is.
pub(crate) fn format_value(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_ticks_span_unit_interval() {
        let ticks = format_axis(0.0, 100.0, false, None, 10, 2);
        assert_eq!(ticks.positions.len(), 11);
        assert_eq!(ticks.positions[0], 0.0);
        assert_eq!(*ticks.positions.last().unwrap(), 1.0);
        assert_eq!(ticks.labels[0], "0");
        assert_eq!(ticks.labels[5], "50");
        assert_eq!(ticks.labels[10], "100");
    }

    #[test]
    fn test_labels_are_rounded_to_precision() {
        let ticks = format_axis(0.0, 1.0, false, None, 3, 2);
        assert_eq!(ticks.labels, vec!["0", "0.33", "0.67", "1"]);
    }

    #[test]
    fn test_degenerate_range_single_midpoint_tick() {
        let ticks = format_axis(7.0, 7.0, false, None, 10, 2);
        assert_eq!(ticks.positions, vec![0.5]);
        assert_eq!(ticks.labels, vec!["7"]);
    }

    #[test]
    fn test_custom_ticks_replace_even_spacing() {
        let custom = [1.0, 2.5, 9.0];
        let ticks = format_axis(0.0, 10.0, false, Some(&custom), 10, 2);
        assert_eq!(ticks.positions, vec![0.1, 0.25, 0.9]);
        assert_eq!(ticks.labels, vec!["1", "2.5", "9"]);
    }

    #[test]
    fn test_custom_tick_labels_are_unrounded() {
        let custom = [0.123456];
        let ticks = format_axis(0.0, 1.0, false, Some(&custom), 10, 2);
        assert_eq!(ticks.labels, vec!["0.123456"]);
    }

    #[test]
    fn test_inversion_reflects_positions() {
        let plain = format_axis(0.0, 10.0, false, None, 4, 2);
        let flipped = format_axis(0.0, 10.0, true, None, 4, 2);
        for (p, q) in plain.positions.iter().zip(flipped.positions.iter()) {
            assert!((q - (1.0 - p)).abs() < 1e-12);
        }
        // Labels are untouched by inversion.
        assert_eq!(plain.labels, flipped.labels);
    }

    #[test]
    fn test_inversion_is_involutive() {
        let flipped = format_axis(0.0, 10.0, true, None, 4, 2);
        let plain = format_axis(0.0, 10.0, false, None, 4, 2);
        let unflipped: Vec<f64> = flipped.positions.iter().map(|&p| 1.0 - p).collect();
        for (p, q) in plain.positions.iter().zip(unflipped.iter()) {
            assert!((p - q).abs() < 1e-12);
        }
    }

    #[test]
    fn test_custom_ticks_with_inversion() {
        let custom = [2.0];
        let ticks = format_axis(0.0, 10.0, true, Some(&custom), 10, 2);
        assert!((ticks.positions[0] - 0.8).abs() < 1e-12);
        assert_eq!(ticks.labels, vec!["2"]);
    }
}
