// src/color.rs

use colorous::Gradient;
use plotters::style::RGBColor;

use crate::data_input::dataset::{record_value, Record};
use crate::error::ParallelError;

/// Resolves a colormap name to its continuous gradient, case-insensitively.
///
/// Unknown names are a fatal input error rather than a silent fallback; the
/// message carries the offending name.
pub fn lookup_colormap(name: &str) -> Result<&'static Gradient, ParallelError> {
    let gradient = match name.to_ascii_lowercase().as_str() {
        "viridis" => &colorous::VIRIDIS,
        "inferno" => &colorous::INFERNO,
        "magma" => &colorous::MAGMA,
        "plasma" => &colorous::PLASMA,
        "cividis" => &colorous::CIVIDIS,
        "turbo" => &colorous::TURBO,
        "cool" => &colorous::COOL,
        "warm" => &colorous::WARM,
        "rainbow" => &colorous::RAINBOW,
        "sinebow" => &colorous::SINEBOW,
        "cubehelix" => &colorous::CUBEHELIX,
        "spectral" => &colorous::SPECTRAL,
        "blues" => &colorous::BLUES,
        "greens" => &colorous::GREENS,
        "greys" => &colorous::GREYS,
        "oranges" => &colorous::ORANGES,
        "purples" => &colorous::PURPLES,
        "reds" => &colorous::REDS,
        _ => return Err(ParallelError::UnknownColormap(name.to_string())),
    };
    Ok(gradient)
}

/// Evaluates a gradient at a unit fraction.
///
/// `eval_continuous` is only defined on `[0, 1]`, so the fraction is clamped
/// here. This clamping is local to colormap evaluation: with custom bounds
/// narrower than the data, out-of-range records saturate at the gradient
/// ends while their line geometry stays unclamped.
pub fn gradient_color(gradient: &Gradient, fraction: f64) -> RGBColor {
    let color = gradient.eval_continuous(fraction.clamp(0.0, 1.0));
    RGBColor(color.r, color.g, color.b)
}

/// Computes one display color per record, in dataset order, by scaling the
/// color column's value against its own min/max and evaluating the gradient.
pub fn color_gradient(
    data: &[Record],
    color_column: &str,
    gradient: &Gradient,
) -> Result<Vec<RGBColor>, ParallelError> {
    let mut minimum = f64::INFINITY;
    let mut maximum = f64::NEG_INFINITY;
    for row in data {
        let value = record_value(row, color_column)?;
        minimum = minimum.min(value);
        maximum = maximum.max(value);
    }

    data.iter()
        .map(|row| {
            let value = record_value(row, color_column)?;
            let fraction = crate::scale::scale_value(value, minimum, maximum);
            Ok(gradient_color(gradient, fraction))
        })
        .collect()
}

/// `#rrggbb` form of a display color.
pub fn rgb_to_hex(color: &RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}
