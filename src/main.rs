use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use hex_stimuli::{Coloring, HexStimulus, PixelMode};

/// Make this true for one fixed palette color per ring instead of the
/// per-hexagon random black/white.
const COLORED: bool = false;

/// Generate hexagonal-ring stimulus images for mERG recordings and retina
/// modeling.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Pixel format of the output PNGs: "1", "L" or "RGB".
    mode: PixelMode,

    /// Circumradius of each hexagon, in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    radius: u32,

    /// Canvas width in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Canvas height in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Directory the images are written to, created if missing.
    output_dir: PathBuf,

    /// Number of images to generate.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let coloring = if COLORED {
        Coloring::RingPalette
    } else {
        Coloring::RandomBinary
    };
    let rng = Xoshiro256Plus::from_entropy();
    let mut stimulus = HexStimulus::new(args.width, args.height, args.radius, coloring, rng)?;

    info!("Generating images...");
    let start = Instant::now();
    stimulus
        .write_stimulus_pngs(&args.output_dir, args.mode, args.count as usize)
        .with_context(|| format!("writing stimuli to {}", args.output_dir.display()))?;

    println!(
        "Done. That took {:.3} milliseconds.",
        start.elapsed().as_secs_f64() * 1e3
    );
    Ok(())
}
