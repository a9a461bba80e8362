//! Beetle Lights headless runner
//!
//! Plays the level file against the seeded demo controller on a simulated
//! clock and prints the strip after every frame.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use beetle_lights::demo::DemoController;
use beetle_lights::{Game, LevelCatalog, Settings, Strip};

#[derive(Debug, Parser)]
#[command(name = "beetle-lights", about = "Play a level file on a simulated LED strip")]
struct Args {
    /// Level file: a guide line followed by one layout per line
    #[arg(long, value_name = "FILE")]
    levels: PathBuf,
    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
    /// Seed for the demo controller
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 2000, value_parser = clap::value_parser!(u32).range(1..))]
    frames: u32,
    /// Print each frame's lights as a JSON line instead of the strip
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let catalog = LevelCatalog::load(&args.levels)
        .with_context(|| format!("loading levels from {}", args.levels.display()))?;
    log::info!(
        "Beetle Lights starting: {} levels, {} lights, seed {}",
        catalog.len(),
        settings.strip_length,
        args.seed
    );

    let mut game =
        Game::new(catalog, settings.strip_length).with_debug_interval(settings.debug_interval_ms);
    let mut controller = DemoController::new(args.seed, settings.sample_interval_ms);
    let mut strip = Strip::new(settings.strip_length, settings.brightness);

    // Start the clock above zero, the way a device's uptime counter would be
    let mut now = settings.frame_interval_ms;
    for _ in 0..args.frames {
        if let Some(input) = controller.poll(now) {
            game.receive(input);
        }
        let lights = game.frame(now);

        if args.json {
            println!("{}", serde_json::to_string(lights)?);
        } else {
            strip.clear();
            strip.apply(lights);
            println!("{:>8} {} {}", now, game.level_index(), strip.render_ascii());
        }

        now += settings.frame_interval_ms;
    }

    Ok(())
}
