// src/lib.rs - Library interface for parallel-coordinates rendering

//! Renders tabular numeric records as a static parallel-coordinates chart:
//! every record becomes one polyline crossing a vertical axis per selected
//! column. Heterogeneous column ranges are normalized into a shared unit
//! coordinate space, with support for inverted axes, custom tick overrides,
//! per-record color gradients, and an optional color-bar legend.
//!
//! Rendering draws into an explicit plotters `DrawingArea`, so figures can
//! be produced against any backend, including in-memory buffers for tests.

pub mod axis;
pub mod bounds;
pub mod chart;
pub mod color;
pub mod constants;
pub mod data_input;
pub mod error;
pub mod scale;

pub use chart::{default_figure_size, render_parallel, render_to_file, ParallelConfig};
pub use data_input::dataset::Record;
pub use data_input::reader::read_records;
pub use error::ParallelError;
