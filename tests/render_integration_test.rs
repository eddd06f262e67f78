// tests/render_integration_test.rs

use plotters::backend::BitMapBackend;
use plotters::drawing::IntoDrawingArea;

use parcoord_render::bounds::{data_bounds, Bounds};
use parcoord_render::scale::scale_value;
use parcoord_render::{render_parallel, ParallelConfig, ParallelError, Record};

fn record(pairs: &[(&str, f64)]) -> Record {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// The three-record dataset used for end-to-end checks: columns a and b
/// both span [0, 10].
fn sample_data() -> Vec<Record> {
    vec![
        record(&[("a", 0.0), ("b", 10.0)]),
        record(&[("a", 5.0), ("b", 0.0)]),
        record(&[("a", 10.0), ("b", 5.0)]),
    ]
}

/// Renders into an in-memory RGB buffer so no display or file is needed.
fn render_to_buffer(
    data: &[Record],
    config: &ParallelConfig,
    size: (u32, u32),
) -> (Result<(), ParallelError>, Vec<u8>) {
    let mut buffer = vec![0u8; (size.0 * size.1 * 3) as usize];
    let result = {
        let area = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        render_parallel(&area, data, config)
    };
    (result, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_columns_yield_one_subplot_and_render() {
        let data = sample_data();
        let config = ParallelConfig::new(["a", "b"]);
        let (result, buffer) = render_to_buffer(&data, &config, (400, 400));
        result.unwrap();
        // The white background fill alone proves drawing happened; segments
        // and axes add non-white pixels on top.
        assert!(buffer.iter().any(|&b| b == 255));
        assert!(buffer.iter().any(|&b| b != 255));
    }

    #[test]
    fn test_end_to_end_scaled_endpoints() {
        // Record 1's segment must run from (x=0, y=0.5) to (x=1, y=0.0).
        let data = sample_data();
        let columns = vec!["a".to_string(), "b".to_string()];
        let bounds = data_bounds(&data, &columns).unwrap();
        assert_eq!(bounds["a"], (0.0, 10.0));
        assert_eq!(bounds["b"], (0.0, 10.0));

        let (a_lo, a_hi) = bounds["a"];
        let (b_lo, b_hi) = bounds["b"];
        assert_eq!(scale_value(data[1]["a"], a_lo, a_hi), 0.5);
        assert_eq!(scale_value(data[1]["b"], b_lo, b_hi), 0.0);
    }

    #[test]
    fn test_schema_mismatch_detected_before_any_drawing() {
        let data = vec![
            record(&[("a", 1.0), ("b", 2.0)]),
            record(&[("a", 3.0), ("b", 4.0), ("c", 5.0)]),
        ];
        let config = ParallelConfig::new(["a", "b"]);
        let (result, buffer) = render_to_buffer(&data, &config, (200, 200));
        assert!(matches!(result, Err(ParallelError::SchemaMismatch)));
        // Validation failed before the background fill, so the buffer is
        // still untouched.
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_unknown_column_enumerates_both_sides() {
        let data = sample_data();
        let config = ParallelConfig::new(["a", "z"]);
        let (result, buffer) = render_to_buffer(&data, &config, (200, 200));
        match result {
            Err(ParallelError::UnknownColumn {
                requested,
                available,
            }) => {
                assert_eq!(requested, vec!["z".to_string()]);
                assert_eq!(available, vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("expected UnknownColumn, got {:?}", other),
        }
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_empty_data_and_too_few_columns() {
        let config = ParallelConfig::new(["a", "b"]);
        let (result, _) = render_to_buffer(&[], &config, (100, 100));
        assert!(matches!(result, Err(ParallelError::EmptyData)));

        let single = ParallelConfig::new(["a"]);
        let (result, _) = render_to_buffer(&sample_data(), &single, (100, 100));
        assert!(matches!(result, Err(ParallelError::TooFewColumns(1))));
    }

    #[test]
    fn test_custom_bounds_must_cover_every_plotted_column() {
        let data = sample_data();
        let mut config = ParallelConfig::new(["a", "b"]);
        let mut bounds = Bounds::new();
        bounds.insert("a".to_string(), (0.0, 20.0));
        config.custom_bounds = Some(bounds);
        let (result, _) = render_to_buffer(&data, &config, (200, 200));
        match result {
            Err(ParallelError::MissingBounds(missing)) => {
                assert_eq!(missing, vec!["b".to_string()]);
            }
            other => panic!("expected MissingBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_colormap_is_fatal() {
        let data = sample_data();
        let mut config = ParallelConfig::new(["a", "b"]);
        config.color_column = Some("a".to_string());
        config.colormap = "not-a-colormap".to_string();
        let (result, _) = render_to_buffer(&data, &config, (200, 200));
        assert!(matches!(result, Err(ParallelError::UnknownColormap(_))));
    }

    #[test]
    fn test_colorbar_without_color_column_is_skipped() {
        let data = sample_data();
        let mut config = ParallelConfig::new(["a", "b"]);
        config.show_colorbar = true;
        let (result, _) = render_to_buffer(&data, &config, (400, 400));
        result.unwrap();
    }

    #[test]
    fn test_full_feature_render() {
        // Inversion, custom bounds, custom ticks, color gradient, and the
        // color-bar legend all at once, across three columns.
        let data = vec![
            record(&[("a", 0.0), ("b", 10.0), ("c", 1.0)]),
            record(&[("a", 5.0), ("b", 0.0), ("c", 2.0)]),
            record(&[("a", 10.0), ("b", 5.0), ("c", 3.0)]),
        ];
        let mut config = ParallelConfig::new(["a", "b", "c"]);
        config.invert.insert("b".to_string());
        config.color_column = Some("c".to_string());
        config.colormap = "plasma".to_string();
        let mut bounds = Bounds::new();
        bounds.insert("a".to_string(), (0.0, 10.0));
        bounds.insert("b".to_string(), (-5.0, 15.0));
        bounds.insert("c".to_string(), (0.0, 4.0));
        config.custom_bounds = Some(bounds);
        let mut ticks = std::collections::HashMap::new();
        ticks.insert("a".to_string(), vec![0.0, 2.5, 7.5, 10.0]);
        config.custom_ticks = Some(ticks);
        config.show_colorbar = true;

        let (result, buffer) = render_to_buffer(&data, &config, (800, 400));
        result.unwrap();
        assert!(buffer.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_degenerate_column_renders_at_midpoint() {
        // A constant column must not abort the chart.
        let data = vec![
            record(&[("a", 1.0), ("b", 7.0)]),
            record(&[("a", 2.0), ("b", 7.0)]),
        ];
        let config = ParallelConfig::new(["a", "b"]);
        let (result, _) = render_to_buffer(&data, &config, (400, 400));
        result.unwrap();
    }
}
