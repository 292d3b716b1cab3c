use glam::DVec2;

use crate::config::PlanetConfig;
use crate::gradient::RadialGradient;
use crate::types::{Rgb, Sample};

/// How a body's disc is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgb),
    /// Gradient shading over a flat base colour.
    Gradient { base: Rgb, gradient: RadialGradient },
}

impl Fill {
    /// Colour at canvas point `p`.
    pub fn color_at(&self, p: DVec2) -> Rgb {
        match self {
            Fill::Solid(c) => *c,
            Fill::Gradient { base, gradient } => gradient.color_at(p).unwrap_or(*base),
        }
    }
}

/// A planet or satellite: a filled circle on one canvas.
///
/// `pos` is the centre of the drawn circle in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub pos: DVec2,
    pub radius: f64,
    pub fill: Fill,
}

impl CelestialBody {
    pub fn planet(cfg: &PlanetConfig, radius: f64, base: Rgb) -> Self {
        Self {
            pos: cfg.center,
            radius,
            fill: Fill::Gradient {
                base,
                gradient: cfg.gradient.clone(),
            },
        }
    }

    /// A satellite parked on the canvas origin.
    pub fn satellite(radius: f64, color: Rgb) -> Self {
        let mut body = Self {
            pos: DVec2::ZERO,
            radius,
            fill: Fill::Solid(color),
        };
        body.place_at(Sample::ZERO);
        body
    }

    /// Moves the body to a trajectory sample.
    ///
    /// The position is the sample shifted by half the radius on both axes,
    /// matching how the satellite has always been placed on the canvas.
    pub fn place_at(&mut self, sample: Sample) {
        self.pos = sample - DVec2::splat(self.radius / 2.0);
    }
}
