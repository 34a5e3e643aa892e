mod app;
mod args;
mod driver;
mod error;
mod graphics;
mod math;
mod pivot;
mod rotation;
mod shape;
mod state;
mod terminal;
mod vertex;

use crate::app::App;
use crate::args::Args;
use crate::error::SketchError;
use clap::Parser;
use env_logger::{Env, Target};
use std::fs::File;

/// Builds a logger writing to `--log-file`; without one there is no logger
/// at all, since stderr would draw over the animation
fn log_builder(args: &Args) -> Result<Option<env_logger::Builder>, SketchError> {
    let Some(path) = &args.log_file else {
        return Ok(None);
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Pipe(Box::new(File::create(path)?)));
    Ok(Some(builder))
}

fn init_logging(args: &Args) -> Result<(), SketchError> {
    if let Some(mut builder) = log_builder(args)? {
        builder.init();
    }
    Ok(())
}

/// Main function
fn main() -> Result<(), SketchError> {
    let args = Args::parse();
    init_logging(&args)?;

    App::new(&args)?.run()?;

    Ok(())
}
