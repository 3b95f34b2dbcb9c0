//! resomask CLI: build resonator mask cells and write them to GDSII

use anyhow::{Context, Result};
use clap::Parser;
use resomask::export::{write_gds, LAYER_CAPACITOR, LAYER_FEEDLINE, LAYER_INDUCTOR};
use resomask::parts::tapered_inductor;
use resomask::{
    build_part, compose, taper_from_grid, CompositeKind, PartKind, ResonatorParams,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resomask")]
#[command(about = "Generate photomask geometry for superconducting resonator pixels")]
#[command(version)]
struct Args {
    /// Cell to build: feedline, capacitor, inductor, resonator, or geometry
    #[arg(short = 'c', long, default_value = "geometry")]
    cell: String,

    /// JSON file with parameter overrides; missing keys use the defaults
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Output GDSII file
    #[arg(short, long)]
    output: PathBuf,

    /// CSV current-density grid; tapers the inductor trace width
    /// (only meaningful with --cell inductor)
    #[arg(long)]
    taper: Option<PathBuf>,

    /// GDS library name
    #[arg(long, default_value = "resomask")]
    library: String,
}

/// Parse a simulator current-density CSV export: one row per transverse
/// grid line, comma-separated magnitudes.
fn read_current_grid(path: &PathBuf) -> Result<Vec<Vec<f64>>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read current-density file: {path:?}"))?;
    let mut grid = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row: Vec<f64> = line
            .split(',')
            .map(|field| {
                field
                    .trim()
                    .parse::<f64>()
                    .with_context(|| format!("bad sample on line {}", line_no + 1))
            })
            .collect::<Result<_>>()?;
        grid.push(row);
    }
    Ok(grid)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let params: ResonatorParams = match &args.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read parameter file: {path:?}"))?;
            serde_json::from_str(&json)
                .with_context(|| format!("failed to parse parameter file: {path:?}"))?
        }
        None => ResonatorParams::default(),
    };

    let cells = match args.cell.as_str() {
        "feedline" => vec![(build_part(PartKind::Feedline, &params)?, LAYER_FEEDLINE)],
        "capacitor" => vec![(build_part(PartKind::Capacitor, &params)?, LAYER_CAPACITOR)],
        "inductor" => {
            let cell = match &args.taper {
                Some(path) => {
                    let grid = read_current_grid(path)?;
                    let widths = taper_from_grid(
                        &grid,
                        params.inductor_width,
                        params.inductor_length,
                        params.dx,
                        params.dy,
                    )?;
                    tapered_inductor(&params, &widths)?
                }
                None => build_part(PartKind::Inductor, &params)?,
            };
            vec![(cell, LAYER_INDUCTOR)]
        }
        "resonator" => {
            let cell = compose(CompositeKind::Resonator, &params)?;
            vec![(cell, LAYER_CAPACITOR)]
        }
        "geometry" => {
            let cell = compose(CompositeKind::Geometry, &params)?;
            vec![(cell, LAYER_FEEDLINE)]
        }
        other => anyhow::bail!(
            "unknown cell kind: {other}. Use: feedline, capacitor, inductor, resonator, or geometry"
        ),
    };

    let refs: Vec<(&resomask::Cell, i16)> = cells.iter().map(|(c, l)| (c, *l)).collect();
    write_gds(&args.output, &args.library, &refs)?;

    for (cell, _) in &cells {
        if let Some(b) = cell.bounding_box() {
            tracing::info!(
                cell = cell.name(),
                polygons = cell.len(),
                width = b.width(),
                height = b.height(),
                "wrote cell"
            );
        }
    }
    eprintln!("Wrote GDS library to {:?}", args.output);
    Ok(())
}
