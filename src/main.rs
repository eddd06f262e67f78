// src/main.rs

use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};

use parcoord_render::bounds::Bounds;
use parcoord_render::constants::DEFAULT_COLORMAP;
use parcoord_render::{read_records, render_to_file, ParallelConfig};

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {program} <input_file.csv> --columns <a,b,c> [options]\n\
         \n\
         Options:\n\
         \x20 --columns  a,b,c       Columns to plot, left to right (required, >= 2)\n\
         \x20 --invert   a,c         Columns whose axis is drawn top-to-bottom\n\
         \x20 --color-col c          Column used to color each record's line\n\
         \x20 --colormap name        Colormap for --color-col (default: {DEFAULT_COLORMAP})\n\
         \x20 --bounds   col=lo:hi   Custom bounds, repeatable; overrides extraction\n\
         \x20 --ticks    col=v1,v2   Custom tick values for a column, repeatable\n\
         \x20 --colorbar             Add a color-bar legend (needs --color-col)\n\
         \x20 --size     WxH         Figure size in pixels (default scales with columns)\n\
         \x20 --output   file.png    Output path (default: <input>_parallel.png)"
    );
}

fn take_value(args: &[String], index: &mut usize, flag: &str) -> Result<String, String> {
    *index += 1;
    args.get(*index)
        .cloned()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one `col=lo:hi` bounds entry.
fn parse_bounds_entry(value: &str) -> Result<(String, (f64, f64)), String> {
    let (column, range) = value
        .split_once('=')
        .ok_or_else(|| format!("expected col=lo:hi, got '{value}'"))?;
    let (lo, hi) = range
        .split_once(':')
        .ok_or_else(|| format!("expected col=lo:hi, got '{value}'"))?;
    let lo: f64 = lo.trim().parse().map_err(|_| format!("bad bound '{lo}'"))?;
    let hi: f64 = hi.trim().parse().map_err(|_| format!("bad bound '{hi}'"))?;
    Ok((column.trim().to_string(), (lo, hi)))
}

/// Parses one `col=v1,v2,...` custom-ticks entry.
fn parse_ticks_entry(value: &str) -> Result<(String, Vec<f64>), String> {
    let (column, list) = value
        .split_once('=')
        .ok_or_else(|| format!("expected col=v1,v2,..., got '{value}'"))?;
    let ticks = list
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| format!("bad tick value '{v}'"))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    Ok((column.trim().to_string(), ticks))
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got '{value}'"))?;
    let w: u32 = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let h: u32 = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    Ok((w, h))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut input: Option<PathBuf> = None;
    let mut columns: Vec<String> = Vec::new();
    let mut invert: Vec<String> = Vec::new();
    let mut color_column: Option<String> = None;
    let mut colormap: Option<String> = None;
    let mut custom_bounds: Bounds = Bounds::new();
    let mut custom_ticks: HashMap<String, Vec<f64>> = HashMap::new();
    let mut show_colorbar = false;
    let mut figure_size: Option<(u32, u32)> = None;
    let mut output: Option<PathBuf> = None;

    let mut index = 1;
    while index < args.len() {
        let arg = args[index].as_str();
        let parsed: Result<(), String> = match arg {
            "--columns" => take_value(&args, &mut index, arg).map(|v| columns = parse_list(&v)),
            "--invert" => take_value(&args, &mut index, arg).map(|v| invert = parse_list(&v)),
            "--color-col" => {
                take_value(&args, &mut index, arg).map(|v| color_column = Some(v))
            }
            "--colormap" => take_value(&args, &mut index, arg).map(|v| colormap = Some(v)),
            "--bounds" => take_value(&args, &mut index, arg)
                .and_then(|v| parse_bounds_entry(&v))
                .map(|(column, range)| {
                    custom_bounds.insert(column, range);
                }),
            "--ticks" => take_value(&args, &mut index, arg)
                .and_then(|v| parse_ticks_entry(&v))
                .map(|(column, ticks)| {
                    custom_ticks.insert(column, ticks);
                }),
            "--colorbar" => {
                show_colorbar = true;
                Ok(())
            }
            "--size" => take_value(&args, &mut index, arg)
                .and_then(|v| parse_size(&v))
                .map(|size| figure_size = Some(size)),
            "--output" => take_value(&args, &mut index, arg).map(|v| output = Some(v.into())),
            _ if input.is_none() && !arg.starts_with("--") => {
                input = Some(PathBuf::from(arg));
                Ok(())
            }
            _ => Err(format!("unrecognized argument '{arg}'")),
        };
        if let Err(message) = parsed {
            eprintln!("Error: {message}");
            print_usage(&args[0]);
            std::process::exit(1);
        }
        index += 1;
    }

    let input = match input {
        Some(path) => path,
        None => {
            eprintln!("Error: no input file given");
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };
    if columns.len() < 2 {
        eprintln!("Error: --columns must list at least two columns");
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let root_name = input.file_stem().unwrap_or_default().to_string_lossy();
    let output = output.unwrap_or_else(|| {
        let file_name = format!("{root_name}_parallel.png");
        input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(file_name)
    });

    let data = read_records(&input)?;
    println!(
        "Read {} records from '{}'; plotting {} columns.",
        data.len(),
        input.display(),
        columns.len()
    );

    let mut config = ParallelConfig::new(columns);
    config.invert = invert.into_iter().collect();
    config.color_column = color_column;
    if let Some(name) = colormap {
        config.colormap = name;
    }
    if !custom_bounds.is_empty() {
        config.custom_bounds = Some(custom_bounds);
    }
    if !custom_ticks.is_empty() {
        config.custom_ticks = Some(custom_ticks);
    }
    config.show_colorbar = show_colorbar;
    config.figure_size = figure_size;

    render_to_file(&output, &data, &config)?;
    println!("Parallel-coordinates plot saved as '{}'.", output.display());
    Ok(())
}
