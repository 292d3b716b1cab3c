//! Procedural star-field backgrounds.
//!
//! Used when no background image is configured, or when it cannot be
//! loaded. Generation is seeded, so the same seed always yields the same
//! sky.

use glam::DVec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    pub radius: f64,
    pub brightness: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    pub width: usize,
    pub height: usize,
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatters `count` stars uniformly over a `width` x `height` raster.
    ///
    /// ### Parameters
    /// - `width`, `height` - Raster size in pixels.
    /// - `count` - Number of stars.
    /// - `seed` - Seed for [`StdRng`].
    pub fn generate(width: usize, height: usize, count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = if width == 0 || height == 0 {
            Vec::new()
        } else {
            (0..count)
                .map(|_| Star {
                    pos: DVec2::new(
                        rng.random_range(0.0..width as f64),
                        rng.random_range(0.0..height as f64),
                    ),
                    radius: rng.random_range(0.3..1.5),
                    brightness: rng.random_range(80..=255),
                })
                .collect()
        };

        Self {
            width,
            height,
            stars,
        }
    }

    /// Renders the sky into an opaque RGBA8 buffer, row-major.
    ///
    /// Stars are drawn as discs with a one-pixel soft edge, brighter stars
    /// win where they overlap.
    pub fn rasterize(&self) -> Vec<u8> {
        let mut luma = vec![0u8; self.width * self.height];

        for star in &self.stars {
            let reach = star.radius + 1.0;
            let x0 = (star.pos.x - reach).floor().max(0.0) as usize;
            let y0 = (star.pos.y - reach).floor().max(0.0) as usize;
            let x1 = ((star.pos.x + reach).ceil() as usize).min(self.width);
            let y1 = ((star.pos.y + reach).ceil() as usize).min(self.height);

            for y in y0..y1 {
                for x in x0..x1 {
                    let centre = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                    let d = centre.distance(star.pos);
                    let coverage = (star.radius + 0.5 - d).clamp(0.0, 1.0);
                    if coverage <= 0.0 {
                        continue;
                    }
                    let v = (star.brightness as f64 * coverage).round() as u8;
                    let px = &mut luma[y * self.width + x];
                    *px = (*px).max(v);
                }
            }
        }

        let mut rgba = Vec::with_capacity(luma.len() * 4);
        for v in luma {
            // Slight blue cast on the dimmer stars.
            let b = v.saturating_add(v / 8);
            rgba.extend_from_slice(&[v, v, b, 255]);
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_sky() {
        let a = Starfield::generate(64, 48, 40, 11);
        let b = Starfield::generate(64, 48, 40, 11);
        assert_eq!(a, b);
        assert_eq!(a.rasterize(), b.rasterize());
    }

    #[test]
    fn different_seeds_give_different_skies() {
        let a = Starfield::generate(64, 48, 40, 1);
        let b = Starfield::generate(64, 48, 40, 2);
        assert_ne!(a.stars, b.stars);
    }

    #[test]
    fn stars_lie_inside_the_raster() {
        let sky = Starfield::generate(100, 50, 500, 3);
        assert_eq!(sky.stars.len(), 500);
        for s in &sky.stars {
            assert!(s.pos.x >= 0.0 && s.pos.x < 100.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 50.0);
            assert!(s.brightness >= 80);
        }
    }

    #[test]
    fn raster_is_opaque_and_sized() {
        let sky = Starfield::generate(10, 20, 5, 4);
        let rgba = sky.rasterize();
        assert_eq!(rgba.len(), 10 * 20 * 4);
        assert!(rgba.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn single_star_lights_its_pixel() {
        let sky = Starfield {
            width: 4,
            height: 4,
            stars: vec![Star {
                pos: DVec2::new(1.5, 2.5),
                radius: 1.0,
                brightness: 200,
            }],
        };
        let rgba = sky.rasterize();
        let idx = (2 * 4 + 1) * 4;
        assert_eq!(rgba[idx], 200);
        // Far corner stays black.
        assert_eq!(&rgba[0..3], &[0, 0, 0]);
    }

    #[test]
    fn empty_raster_has_no_stars() {
        let sky = Starfield::generate(0, 10, 20, 5);
        assert!(sky.stars.is_empty());
        assert!(sky.rasterize().is_empty());
    }
}
