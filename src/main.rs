mod app;
mod config;
mod export;
mod input;
mod lorenz;
mod render;
mod surface;
mod trajectory;
mod viewport;

use anyhow::Result;
use clap::Parser;
use config::Args;
use log::info;

fn main() -> Result<()> {
    let args = Args::parse();
    config::init_logging(&args)?;
    info!("starting: {:?}", args);

    match args.export.clone() {
        Some(path) => export::export_png(&path, args.width, args.height),
        None => app::run(args),
    }
}
