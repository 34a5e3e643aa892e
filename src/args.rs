use crate::math::DEFAULT_WORLD_EXTENT;
use crate::pivot::Pivot;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments parser
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// World extent shown across the terminal, in world units
    #[arg(long, default_value_t = DEFAULT_WORLD_EXTENT, value_parser = parse_extent)]
    pub extent: f64,

    /// Rotation added per frame, in degrees
    #[arg(long, default_value_t = 2.0, allow_hyphen_values = true, value_parser = parse_step)]
    pub step: f64,

    /// Frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Initial pivot vertex (r, g, b or w)
    #[arg(long, value_enum, default_value = "r")]
    pub pivot: Pivot,

    /// Stop after this many frames (optional)
    #[arg(long)]
    pub frames: Option<u64>,

    /// Start with the debug overlay shown
    #[arg(long)]
    pub debug: bool,

    /// File to write log records to (optional)
    ///
    /// Logging is off without it, whatever RUST_LOG says, since the
    /// animation owns the terminal. RUST_LOG sets the filter (default info).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_extent(s: &str) -> Result<f64, String> {
    let extent: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if extent.is_finite() && extent > 0.0 {
        Ok(extent)
    } else {
        Err(format!("extent must be a positive number, got {s}"))
    }
}

fn parse_step(s: &str) -> Result<f64, String> {
    let step: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if step.is_finite() {
        Ok(step)
    } else {
        Err(format!("step must be a finite number of degrees, got {s}"))
    }
}
