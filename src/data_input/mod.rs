// src/data_input/mod.rs

pub mod dataset;
pub mod reader;
