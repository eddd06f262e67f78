// src/chart.rs

use colorous::Gradient;
use log::{debug, warn};
use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::axis::{format_axis, format_value, round_to, AxisTicks};
use crate::bounds::{data_bounds, Bounds};
use crate::color::{color_gradient, gradient_color, lookup_colormap};
use crate::constants::{
    COLORBAR_OFFSET_FRACTION, COLORBAR_TICK_COUNT, COLORBAR_WIDTH_FRACTION, COLOR_LINE_DEFAULT,
    DEFAULT_COLORMAP, DEFAULT_TICK_COUNT, DEFAULT_TICK_PRECISION, FONT_SIZE_COLORBAR_LABEL,
    FONT_SIZE_COLUMN_LABEL, FONT_SIZE_TICK_LABEL, HEIGHT_UNITS, LINE_WIDTH_AXIS, LINE_WIDTH_PLOT,
    MARGIN_BOTTOM_PX, MARGIN_TOP_PX, PIXELS_PER_UNIT, TICK_LABEL_OFFSET, TICK_MARK_LENGTH,
    WIDTH_UNITS_PER_COLUMN,
};
use crate::data_input::dataset::{check_columns, probe_schema, record_value, Record};
use crate::error::ParallelError;
use crate::scale::{invert_fraction, scale_value};

type UnitChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Configuration for one parallel-coordinates rendering call.
///
/// All fields are consumed per call; nothing persists across renderings.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Columns to plot, left to right. Order is significant; length >= 2.
    pub columns: Vec<String>,
    /// Columns whose axis is drawn top-to-bottom. Must be a subset of `columns`.
    pub invert: HashSet<String>,
    /// Column used to color each record's polyline.
    pub color_column: Option<String>,
    /// Colormap name resolved through [`crate::color::lookup_colormap`].
    pub colormap: String,
    /// Per-column bounds overriding data-derived extraction entirely.
    /// When supplied, every plotted column must be covered.
    pub custom_bounds: Option<Bounds>,
    /// Per-column tick values (in data units) replacing evenly spaced ticks.
    pub custom_ticks: Option<HashMap<String, Vec<f64>>>,
    /// Draw a color-bar legend right of the plotting area. Ignored (with a
    /// warning) when no color column is set.
    pub show_colorbar: bool,
    /// Figure size in pixels; `None` scales with the column count.
    pub figure_size: Option<(u32, u32)>,
    pub tick_count: usize,
    pub precision: usize,
}

impl ParallelConfig {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(columns: I) -> Self {
        ParallelConfig {
            columns: columns.into_iter().map(Into::into).collect(),
            invert: HashSet::new(),
            color_column: None,
            colormap: DEFAULT_COLORMAP.to_string(),
            custom_bounds: None,
            custom_ticks: None,
            show_colorbar: false,
            figure_size: None,
            tick_count: DEFAULT_TICK_COUNT,
            precision: DEFAULT_TICK_PRECISION,
        }
    }

    fn custom_ticks_for(&self, column: &str) -> Option<&[f64]> {
        self.custom_ticks
            .as_ref()
            .and_then(|ticks| ticks.get(column))
            .map(Vec::as_slice)
    }
}

/// Default figure size: 2 width units per column, 4 height units.
pub fn default_figure_size(n_columns: usize) -> (u32, u32) {
    (
        WIDTH_UNITS_PER_COLUMN * PIXELS_PER_UNIT * n_columns as u32,
        HEIGHT_UNITS * PIXELS_PER_UNIT,
    )
}

/// Everything resolved by validation, before any drawing happens.
struct RenderPlan {
    bounds: Bounds,
    record_colors: Option<Vec<RGBColor>>,
    gradient: Option<&'static Gradient>,
    colorbar: bool,
}

/// Fail-fast validation and input resolution. No drawing occurs until this
/// returns, so a fatal condition never leaves a partial figure behind.
fn plan_render(data: &[Record], config: &ParallelConfig) -> Result<RenderPlan, ParallelError> {
    if data.is_empty() {
        return Err(ParallelError::EmptyData);
    }
    if config.columns.len() < 2 {
        return Err(ParallelError::TooFewColumns(config.columns.len()));
    }

    let schema = probe_schema(data)?;
    check_columns(&config.columns, &schema)?;

    // Inverted columns must be among the plotted ones.
    let stray: Vec<String> = config
        .invert
        .iter()
        .filter(|name| !config.columns.contains(name))
        .cloned()
        .collect();
    if !stray.is_empty() {
        return Err(ParallelError::UnknownColumn {
            requested: stray,
            available: config.columns.clone(),
        });
    }

    if let Some(color_column) = &config.color_column {
        check_columns(std::slice::from_ref(color_column), &schema)?;
    }
    if let Some(ticks) = &config.custom_ticks {
        let keys: Vec<String> = ticks.keys().cloned().collect();
        check_columns(&keys, &schema)?;
    }

    let bounds = match &config.custom_bounds {
        Some(custom) => {
            let keys: Vec<String> = custom.keys().cloned().collect();
            check_columns(&keys, &schema)?;
            let missing: Vec<String> = config
                .columns
                .iter()
                .filter(|name| !custom.contains_key(*name))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(ParallelError::MissingBounds(missing));
            }
            custom.clone()
        }
        None => data_bounds(data, &config.columns)?,
    };

    let gradient = match &config.color_column {
        Some(_) => Some(lookup_colormap(&config.colormap)?),
        None => None,
    };
    let record_colors = match (&config.color_column, gradient) {
        (Some(column), Some(gradient)) => Some(color_gradient(data, column, gradient)?),
        _ => None,
    };

    let colorbar = if config.show_colorbar && config.color_column.is_none() {
        warn!("colorbar requested without a color column; skipping the legend");
        false
    } else {
        config.show_colorbar
    };

    Ok(RenderPlan {
        bounds,
        record_colors,
        gradient,
        colorbar,
    })
}

/// Renders a parallel-coordinates chart into the given drawing area.
///
/// One sub-plot is allocated per adjacent column pair; each record draws one
/// straight segment per pair in that pair's `[0,1] x [0,1]` coordinate
/// space. The final sub-plot additionally carries a secondary axis overlay
/// bound to the last column. When a color bar is requested, one extra
/// reserved slot keeps the layout spacing and the legend strip is carved out
/// of it.
pub fn render_parallel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &[Record],
    config: &ParallelConfig,
) -> Result<(), ParallelError> {
    let plan = plan_render(data, config)?;

    let n_columns = config.columns.len();
    let n_slots = if plan.colorbar { n_columns } else { n_columns - 1 };
    debug!(
        "rendering {} sub-plot(s) for {} records across {} columns",
        n_columns - 1,
        data.len(),
        n_columns
    );

    area.fill(&WHITE).map_err(ParallelError::draw)?;
    // split_evenly leaves no spacing between slots, so adjacent axes read as
    // one continuous multi-axis strip.
    let slots = area.split_evenly((1, n_slots));
    let pair_areas = &slots[..n_columns - 1];

    for (pair_index, pair_area) in pair_areas.iter().enumerate() {
        draw_pair(pair_area, data, config, &plan, pair_index)?;
    }

    if plan.colorbar {
        // Both resolved during planning whenever colorbar is true.
        if let (Some(column), Some(gradient)) = (&config.color_column, plan.gradient) {
            let legend_bounds = match plan.bounds.get(column) {
                Some(&pair) => pair,
                None => data_bounds(data, std::slice::from_ref(column))?[column.as_str()],
            };
            let last_area = &pair_areas[n_columns - 2];
            draw_colorbar(area, last_area, column, legend_bounds, gradient, config)?;
        }
    }
    Ok(())
}

/// Renders to a PNG file via the bitmap backend, using the configured or
/// default figure size.
pub fn render_to_file<P: AsRef<Path>>(
    path: P,
    data: &[Record],
    config: &ParallelConfig,
) -> Result<(), ParallelError> {
    let size = config
        .figure_size
        .unwrap_or_else(|| default_figure_size(config.columns.len()));
    let path = path.as_ref();
    let area = BitMapBackend::new(path, size).into_drawing_area();
    render_parallel(&area, data, config)?;
    area.present().map_err(ParallelError::draw)
}

fn bound_for(bounds: &Bounds, column: &str) -> Result<(f64, f64), ParallelError> {
    bounds
        .get(column)
        .copied()
        .ok_or_else(|| ParallelError::MissingBounds(vec![column.to_string()]))
}

/// Scales one record's value at `column` into unit space, applying axis
/// inversion when flagged.
fn scaled_endpoint(
    row: &Record,
    column: &str,
    bounds: &Bounds,
    config: &ParallelConfig,
) -> Result<f64, ParallelError> {
    let (minimum, maximum) = bound_for(bounds, column)?;
    let mut y = scale_value(record_value(row, column)?, minimum, maximum);
    if config.invert.contains(column) {
        y = invert_fraction(y);
    }
    Ok(y)
}

/// Draws one adjacent-pair sub-plot: every record's segment, the left
/// column's axis, and, on the final pair, the secondary axis overlay for the
/// true last column.
fn draw_pair<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    data: &[Record],
    config: &ParallelConfig,
    plan: &RenderPlan,
    pair_index: usize,
) -> Result<(), ParallelError> {
    let left = &config.columns[pair_index];
    let right = &config.columns[pair_index + 1];
    let is_last = pair_index + 2 == config.columns.len();

    let mut chart = ChartBuilder::on(area)
        .margin_top(MARGIN_TOP_PX)
        .margin_bottom(MARGIN_BOTTOM_PX)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(ParallelError::draw)?;

    for (row_index, row) in data.iter().enumerate() {
        let y_left = scaled_endpoint(row, left, &plan.bounds, config)?;
        let y_right = scaled_endpoint(row, right, &plan.bounds, config)?;
        let color = match &plan.record_colors {
            Some(colors) => colors[row_index],
            None => COLOR_LINE_DEFAULT,
        };
        chart
            .draw_series(LineSeries::new(
                vec![(0.0, y_left), (1.0, y_right)],
                color.stroke_width(LINE_WIDTH_PLOT),
            ))
            .map_err(ParallelError::draw)?;
    }

    let (minimum, maximum) = bound_for(&plan.bounds, left)?;
    let ticks = format_axis(
        minimum,
        maximum,
        config.invert.contains(left),
        config.custom_ticks_for(left),
        config.tick_count,
        config.precision,
    );
    draw_axis(&mut chart, area, 0.0, &ticks, left)?;

    // The final axis does double duty: it closes this pair visually and
    // independently represents the last column, with that column's own
    // bounds, inversion, and custom ticks.
    if is_last {
        let (minimum, maximum) = bound_for(&plan.bounds, right)?;
        let overlay = format_axis(
            minimum,
            maximum,
            config.invert.contains(right),
            config.custom_ticks_for(right),
            config.tick_count,
            config.precision,
        );
        draw_axis(&mut chart, area, 1.0, &overlay, right)?;
    }
    Ok(())
}

/// Draws one vertical axis at unit x position 0 or 1: the axis line, tick
/// marks and labels facing inward, and the column name in the bottom strip.
fn draw_axis<DB: DrawingBackend>(
    chart: &mut UnitChart<'_, DB>,
    area: &DrawingArea<DB, Shift>,
    x: f64,
    ticks: &AxisTicks,
    column: &str,
) -> Result<(), ParallelError> {
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(x, 0.0), (x, 1.0)],
            BLACK.stroke_width(LINE_WIDTH_AXIS),
        )))
        .map_err(ParallelError::draw)?;

    // Ticks face into the sub-plot so nothing lands in a neighboring slot.
    let inward = if x < 0.5 { 1.0 } else { -1.0 };
    let h_pos = if x < 0.5 { HPos::Left } else { HPos::Right };
    let tick_style = ("sans-serif", FONT_SIZE_TICK_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(h_pos, VPos::Center));

    for (position, label) in ticks.positions.iter().zip(ticks.labels.iter()) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, *position), (x + inward * TICK_MARK_LENGTH, *position)],
                BLACK.stroke_width(1),
            )))
            .map_err(ParallelError::draw)?;
        chart
            .draw_series(std::iter::once(Text::new(
                label.clone(),
                (x + inward * TICK_LABEL_OFFSET, *position),
                tick_style.clone(),
            )))
            .map_err(ParallelError::draw)?;
    }

    // Column name, anchored under its axis in the bottom margin strip.
    let (width, height) = area.dim_in_pixel();
    let x_px = (x * width as f64) as i32 + if x < 0.5 { 2 } else { -2 };
    let name_style = ("sans-serif", FONT_SIZE_COLUMN_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(h_pos, VPos::Top));
    area.draw(&Text::new(
        column.to_string(),
        (x_px, (height - MARGIN_BOTTOM_PX + 6) as i32),
        name_style,
    ))
    .map_err(ParallelError::draw)?;
    Ok(())
}

/// Draws the color-bar legend: a continuous gradient strip carved out right
/// of the plotting area, a reference scale independent of per-record colors.
fn draw_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    last_area: &DrawingArea<DB, Shift>,
    column: &str,
    (minimum, maximum): (f64, f64),
    gradient: &Gradient,
    config: &ParallelConfig,
) -> Result<(), ParallelError> {
    let (figure_width, figure_height) = root.dim_in_pixel();
    let (slot_width, _) = last_area.dim_in_pixel();
    let last_left = last_area.get_base_pixel().0 - root.get_base_pixel().0;

    let bar_x0 = last_left + (COLORBAR_OFFSET_FRACTION * figure_width as f64) as i32;
    let bar_x1 = bar_x0 + (COLORBAR_WIDTH_FRACTION * slot_width as f64) as i32;
    let bar_y0 = MARGIN_TOP_PX as i32;
    let bar_y1 = (figure_height - MARGIN_BOTTOM_PX) as i32;

    // One-pixel rows, maximum at the top.
    let span = (bar_y1 - bar_y0 - 1).max(1) as f64;
    for y in bar_y0..bar_y1 {
        let t = 1.0 - (y - bar_y0) as f64 / span;
        let color = gradient_color(gradient, t);
        root.draw(&Rectangle::new([(bar_x0, y), (bar_x1, y + 1)], color.filled()))
            .map_err(ParallelError::draw)?;
    }
    root.draw(&Rectangle::new(
        [(bar_x0, bar_y0), (bar_x1, bar_y1)],
        BLACK.stroke_width(1),
    ))
    .map_err(ParallelError::draw)?;

    let tick_style = ("sans-serif", FONT_SIZE_COLORBAR_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for i in 0..COLORBAR_TICK_COUNT {
        let t = i as f64 / (COLORBAR_TICK_COUNT - 1) as f64;
        let value = round_to(minimum + t * (maximum - minimum), config.precision);
        let y = bar_y1 - (t * (bar_y1 - bar_y0) as f64) as i32;
        root.draw(&PathElement::new(
            vec![(bar_x1, y), (bar_x1 + 4, y)],
            BLACK.stroke_width(1),
        ))
        .map_err(ParallelError::draw)?;
        root.draw(&Text::new(
            format_value(value),
            (bar_x1 + 6, y),
            tick_style.clone(),
        ))
        .map_err(ParallelError::draw)?;
    }

    let name_style = ("sans-serif", FONT_SIZE_COLORBAR_LABEL)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        column.to_string(),
        ((bar_x0 + bar_x1) / 2, bar_y1 + 6),
        name_style,
    ))
    .map_err(ParallelError::draw)?;
    Ok(())
}
