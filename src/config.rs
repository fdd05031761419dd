use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::{fs::File, path::PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(name = "lorenz")]
#[command(about = "Lorenz attractor drawn from three nearby seeds", long_about = None)]
pub(crate) struct Args {
    /// Window / terminal title
    #[arg(long, default_value = "Lorenz Attractor")]
    pub(crate) title: String,

    /// Surface width in pixels (offscreen export)
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) width: u32,

    /// Surface height in pixels (offscreen export)
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) height: u32,

    /// Render one frame to this PNG file and exit
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,

    /// FPS cap for the interactive view
    #[arg(long, default_value_t = 30)]
    pub(crate) fps: u32,

    /// Integration steps drawn per frame in the interactive view
    #[arg(long, default_value_t = 5_000)]
    pub(crate) batch: usize,

    /// Draw dots in white instead of trajectory colors
    #[arg(long, default_value_t = false)]
    pub(crate) no_color: bool,

    /// Hide the status line
    #[arg(long, default_value_t = false)]
    pub(crate) no_hud: bool,

    /// Append log records to this file
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

impl Args {
    pub(crate) fn interactive(&self) -> bool {
        self.export.is_none()
    }

    pub(crate) fn fps_cap(&self) -> u32 {
        self.fps.clamp(10, 240)
    }

    pub(crate) fn batch_steps(&self) -> usize {
        self.batch.max(1)
    }
}

/// Install the global logger. `RUST_LOG` picks the filter (default `info`).
/// The interactive view owns the terminal, so without a log file it logs
/// nothing at all.
pub(crate) fn init_logging(args: &Args) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    match &args.log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            builder.target(Target::Pipe(Box::new(file)));
        }
        None if args.interactive() => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {
            builder.target(Target::Stderr);
        }
    }
    builder.try_init().context("could not install logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["lorenz"]).unwrap();
        assert_eq!(args.title, "Lorenz Attractor");
        assert_eq!((args.width, args.height), (800, 600));
        assert!(args.interactive());
        assert_eq!(args.fps_cap(), 30);
        assert_eq!(args.batch_steps(), 5_000);
        assert!(!args.no_color && !args.no_hud);
    }

    #[test]
    fn export_mode_and_sizes() {
        let args = Args::try_parse_from([
            "lorenz", "--export", "out.png", "--width", "1024", "--height", "768",
        ])
        .unwrap();
        assert!(!args.interactive());
        assert_eq!(args.export, Some(PathBuf::from("out.png")));
        assert_eq!((args.width, args.height), (1024, 768));
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(Args::try_parse_from(["lorenz", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["lorenz", "--height", "0"]).is_err());
    }

    #[test]
    fn pacing_values_are_clamped() {
        let args = Args::try_parse_from(["lorenz", "--fps", "1000", "--batch", "0"]).unwrap();
        assert_eq!(args.fps_cap(), 240);
        assert_eq!(args.batch_steps(), 1);
        let args = Args::try_parse_from(["lorenz", "--fps", "1"]).unwrap();
        assert_eq!(args.fps_cap(), 10);
    }
}
