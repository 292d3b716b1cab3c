//! Background raster shared by the three canvases.

use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use orbit_core::SceneConfig;
use orbit_core::starfield::Starfield;

/// Reads an image file into an egui image.
fn load_image(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to read background {}", path.display()))?
        .to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}

/// Procedural sky covering one canvas.
pub fn starfield(cfg: &SceneConfig) -> egui::ColorImage {
    let side = cfg.canvas_size.round().max(1.0) as usize;
    let sky = Starfield::generate(side, side, cfg.background.star_count, cfg.background.seed);
    egui::ColorImage::from_rgba_unmultiplied([side, side], &sky.rasterize())
}

/// Background for the canvases: the configured image, or a star field when
/// none is configured or it cannot be read.
pub fn load(cfg: &SceneConfig) -> egui::ColorImage {
    let Some(path) = cfg.background.image.as_deref() else {
        info!("No background image configured, generating a star field");
        return starfield(cfg);
    };

    match load_image(path) {
        Ok(image) => {
            info!(
                "Loaded background {} ({}x{})",
                path.display(),
                image.size[0],
                image.size[1]
            );
            image
        }
        Err(e) => {
            warn!("{e:#}; falling back to a generated star field");
            starfield(cfg)
        }
    }
}
