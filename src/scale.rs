// src/scale.rs

/// Scale a value linearly into the unit interval against `[minimum, maximum]`.
///
/// The degenerate case `minimum == maximum` (a constant column) maps every
/// value to exactly `0.5` so the column still renders at the axis midpoint.
/// This is a rendering policy, not an error path.
///
/// No clamping is applied: a `value` outside `[minimum, maximum]` yields a
/// fraction outside `[0, 1]`, which callers supplying narrow custom bounds
/// rely on.
pub fn scale_value(value: f64, minimum: f64, maximum: f64) -> f64 {
    if minimum == maximum {
        0.5
    } else {
        (value - minimum) / (maximum - minimum)
    }
}

/// Reflect a unit-interval fraction for an inverted axis.
///
/// Written as `0.5 - p + 0.5` to make the reflection about the midpoint
/// explicit; the coordinate space stays `[0, 1]`, only the visual direction
/// flips.
pub fn invert_fraction(p: f64) -> f64 {
    0.5 - p + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(scale_value(2.0, 2.0, 10.0), 0.0);
        assert_eq!(scale_value(10.0, 2.0, 10.0), 1.0);
        assert_eq!(scale_value(6.0, 2.0, 10.0), 0.5);
    }

    #[test]
    fn test_scale_is_affine() {
        // scale(a) + scale(b) == 2 * scale((a + b) / 2) for a shared range
        let (lo, hi) = (-4.0, 16.0);
        let (a, b) = (1.0, 9.0);
        let lhs = scale_value(a, lo, hi) + scale_value(b, lo, hi);
        let rhs = 2.0 * scale_value((a + b) / 2.0, lo, hi);
        assert!((lhs - rhs).abs() < 1e-12);
    }

    #[test]
    fn test_scale_no_clamping() {
        assert_eq!(scale_value(15.0, 0.0, 10.0), 1.5);
        assert_eq!(scale_value(-5.0, 0.0, 10.0), -0.5);
    }

    #[test]
    fn test_degenerate_range_hits_midpoint() {
        assert_eq!(scale_value(7.0, 3.0, 3.0), 0.5);
        assert_eq!(scale_value(0.0, 0.0, 0.0), 0.5);
        assert_eq!(scale_value(-1e9, 42.0, 42.0), 0.5);
    }

    #[test]
    fn test_invert_is_involutive() {
        for p in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert!((invert_fraction(invert_fraction(p)) - p).abs() < 1e-12);
        }
        assert_eq!(invert_fraction(0.0), 1.0);
        assert_eq!(invert_fraction(1.0), 0.0);
    }
}
