// src/constants.rs

use plotters::style::RGBColor;

// Figure sizing. The classic sizing rule is 2 units of width per plotted
// column and a fixed height of 4 units, which keeps per-axis spacing
// constant regardless of dimensionality.
pub const PIXELS_PER_UNIT: u32 = 100;
pub const WIDTH_UNITS_PER_COLUMN: u32 = 2;
pub const HEIGHT_UNITS: u32 = 4;

// Vertical margins inside each sub-plot. The bottom strip holds the column
// name labels.
pub const MARGIN_TOP_PX: u32 = 20;
pub const MARGIN_BOTTOM_PX: u32 = 36;

// Font sizes.
pub const FONT_SIZE_TICK_LABEL: i32 = 13;
pub const FONT_SIZE_COLUMN_LABEL: i32 = 16;
pub const FONT_SIZE_COLORBAR_LABEL: i32 = 14;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_AXIS: u32 = 1;

// Tick geometry, as fractions of a sub-plot's unit width.
pub const TICK_MARK_LENGTH: f64 = 0.02;
pub const TICK_LABEL_OFFSET: f64 = 0.03;

// Axis tick defaults.
pub const DEFAULT_TICK_COUNT: usize = 10;
pub const DEFAULT_TICK_PRECISION: usize = 2;

// --- Color-Bar Legend Layout ---
// The legend strip starts one tenth of the figure width right of the last
// sub-plot's left edge and is one fifth of a sub-plot slot wide.
pub const COLORBAR_OFFSET_FRACTION: f64 = 0.1;
pub const COLORBAR_WIDTH_FRACTION: f64 = 0.2;
pub const COLORBAR_TICK_COUNT: usize = 5;

// --- Plot Color Assignments ---
pub const COLOR_LINE_DEFAULT: RGBColor = RGBColor(31, 119, 180);

pub const DEFAULT_COLORMAP: &str = "viridis";

// src/constants.rs
