//! Application entry point for the celestial mechanics viewer.
//!
//! This binary loads the scene configuration and background, then sets up
//! eframe/egui and delegates ticking and painting to [`Viewer`] from the
//! `viewer` module.

mod background;
mod viewer;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use orbit_core::{Scene, SceneConfig};

use viewer::Viewer;

#[derive(Parser, Debug)]
#[command(about = "Three looping animations of a satellite meeting a planet")]
struct Args {
    /// YAML scene configuration; missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background image (PNG or JPEG). Overrides `background.image`.
    #[arg(short, long)]
    background: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig> {
    let Some(path) = path else {
        return Ok(SceneConfig::default());
    };

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let cfg: SceneConfig = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded scene configuration from {}", path.display());
    Ok(cfg)
}

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if the configuration is unreadable or invalid, or if eframe
///   fails to create the native window or event loop.
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(image) = args.background {
        cfg.background.image = Some(image);
    }

    let scene = Scene::new(&cfg).context("Invalid scene configuration")?;
    let background = background::load(&cfg);
    info!(
        "Starting with {}x{} canvases at an assumed {} Hz",
        cfg.canvas_size, cfg.canvas_size, cfg.refresh_rate
    );

    let size = cfg.canvas_size as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([3.0 * size + 4.0 * Viewer::GAP, size + 80.0])
            .with_min_inner_size([size, size]),
        ..Default::default()
    };

    eframe::run_native(
        "Celestial Mechanics",
        options,
        Box::new(move |_cc| {
            // The viewer owns the scene and uploads the background lazily.
            Ok(Box::new(Viewer::new(scene, background, size)))
        }),
    )
    .map_err(|e| anyhow!("eframe failed: {e}"))
}
