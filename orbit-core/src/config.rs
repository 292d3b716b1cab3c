//! Scene configuration.
//!
//! Every field defaults to the constants of the classic three-canvas
//! animation, so an empty YAML document (or [`SceneConfig::default`])
//! reproduces it. Values are read once at start-up; nothing here is
//! changed while the animations run.
//!
//! ```yaml
//! orbit_radius: 150.0
//! angle_wrap: reset      # or "modulo"
//! spiral:
//!   decay: 0.998
//!   acceleration: 1.003
//! parabola:
//!   x_min: -10.0
//!   x_max: 10.0
//!   curvature: 1.5
//! trail:
//!   background_alpha: 0.25
//! background:
//!   image: StarBackv01.jpg
//! ```

use std::f64::consts::TAU;
use std::path::PathBuf;

use glam::DVec2;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::gradient::{ColorStop, RadialGradient};
use crate::trajectory::AngleWrap;
use crate::types::Rgb;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Width and height of each canvas, in pixels.
    pub canvas_size: f64,
    /// Assumed display refresh rate, ticks per second.
    pub refresh_rate: f64,
    /// Seconds for one stable orbit; also paces the spiral.
    pub orbit_period_secs: f64,
    /// Radius of the stable orbit and starting radius of every spiral fall.
    pub orbit_radius: f64,
    pub planet_radius: f64,
    pub satellite_radius: f64,
    pub angle_wrap: AngleWrap,
    /// Flat planet colour, used where the gradient leaves a gap.
    pub planet_color: Rgb,
    pub satellite_color: Rgb,
    pub spiral: SpiralConfig,
    pub parabola: ParabolaConfig,
    pub orbit: OrbitConfig,
    pub trail: TrailConfig,
    pub background: BackgroundConfig,
}

/// Where a planet sits on its canvas and how it is shaded.
///
/// Read from YAML field by field: anything left out keeps the value of the
/// section's default planet.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanetConfig {
    pub center: DVec2,
    pub gradient: RadialGradient,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct PlanetOverride {
    center: Option<DVec2>,
    gradient: GradientOverride,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct GradientOverride {
    inner_center: Option<DVec2>,
    inner_radius: Option<f64>,
    outer_center: Option<DVec2>,
    outer_radius: Option<f64>,
    stops: Option<Vec<ColorStop>>,
}

impl PlanetOverride {
    fn over(self, base: PlanetConfig) -> PlanetConfig {
        let g = self.gradient;
        let b = base.gradient;
        PlanetConfig {
            center: self.center.unwrap_or(base.center),
            gradient: RadialGradient {
                inner_center: g.inner_center.unwrap_or(b.inner_center),
                inner_radius: g.inner_radius.unwrap_or(b.inner_radius),
                outer_center: g.outer_center.unwrap_or(b.outer_center),
                outer_radius: g.outer_radius.unwrap_or(b.outer_radius),
                stops: g.stops.unwrap_or(b.stops),
            },
        }
    }
}

fn spiral_planet<'de, D: Deserializer<'de>>(d: D) -> Result<PlanetConfig, D::Error> {
    Ok(PlanetOverride::deserialize(d)?.over(SpiralConfig::default().planet))
}

fn parabola_planet<'de, D: Deserializer<'de>>(d: D) -> Result<PlanetConfig, D::Error> {
    Ok(PlanetOverride::deserialize(d)?.over(ParabolaConfig::default().planet))
}

fn orbit_planet<'de, D: Deserializer<'de>>(d: D) -> Result<PlanetConfig, D::Error> {
    Ok(PlanetOverride::deserialize(d)?.over(OrbitConfig::default().planet))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Radius multiplier per tick.
    pub decay: f64,
    /// Angle increment multiplier per tick.
    pub acceleration: f64,
    /// The initial increment is one orbit's increment divided by this.
    pub increment_divisor: f64,
    #[serde(deserialize_with = "spiral_planet")]
    pub planet: PlanetConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParabolaConfig {
    pub x_min: f64,
    pub x_max: f64,
    /// `a` in `x² = 4ay`.
    pub curvature: f64,
    /// Nominal duration of one pass before acceleration, in seconds.
    pub pass_secs: f64,
    pub increment_divisor: f64,
    pub acceleration: f64,
    /// Pixels per parametric unit.
    pub scale: f64,
    /// Canvas y of the parabola's vertex.
    pub y_offset: f64,
    #[serde(deserialize_with = "parabola_planet")]
    pub planet: PlanetConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    #[serde(deserialize_with = "orbit_planet")]
    pub planet: PlanetConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Opacity of the background repainted over the previous frame.
    /// Lower values leave longer trails.
    pub background_alpha: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Background raster. Without one a star field is generated.
    pub image: Option<PathBuf>,
    pub star_count: usize,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400.0,
            refresh_rate: 60.0,
            orbit_period_secs: 10.0,
            orbit_radius: 150.0,
            planet_radius: 20.0,
            satellite_radius: 6.0,
            angle_wrap: AngleWrap::Reset,
            planet_color: Rgb::BLUE,
            satellite_color: Rgb::RED,
            spiral: SpiralConfig::default(),
            parabola: ParabolaConfig::default(),
            orbit: OrbitConfig::default(),
            trail: TrailConfig::default(),
            background: BackgroundConfig::default(),
        }
    }
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            decay: 0.998,
            acceleration: 1.003,
            increment_divisor: 2.0,
            planet: PlanetConfig {
                center: DVec2::new(-4.0, -4.0),
                gradient: RadialGradient::planet(DVec2::new(-2.0, -2.0), DVec2::new(1.0, 3.0)),
            },
        }
    }
}

impl Default for ParabolaConfig {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            curvature: 1.5,
            pass_secs: 10.0,
            increment_divisor: 40.0,
            acceleration: 1.01,
            scale: 20.0,
            y_offset: 130.0,
            planet: PlanetConfig {
                center: DVec2::new(-10.0, 40.0),
                gradient: RadialGradient::planet(DVec2::new(-8.0, 42.0), DVec2::new(-14.0, 43.0)),
            },
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            planet: PlanetConfig {
                center: DVec2::new(-10.0, -10.0),
                gradient: RadialGradient::planet(DVec2::new(-8.0, -8.0), DVec2::new(-10.0, -10.0)),
            },
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            background_alpha: 0.25,
        }
    }
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            image: None,
            star_count: 350,
            seed: 0x5747_4152,
        }
    }
}

fn positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn accelerating(field: &'static str, value: f64) -> ConfigResult<()> {
    positive(field, value)?;
    if value >= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Decelerating { field, value })
    }
}

impl SceneConfig {
    /// Planet plus satellite radius: the spiral restarts below this.
    pub fn collision_radius(&self) -> f64 {
        self.planet_radius + self.satellite_radius
    }

    /// Ticks in one stable orbit.
    pub fn ticks_per_orbit(&self) -> f64 {
        self.orbit_period_secs * self.refresh_rate
    }

    /// Fixed angle increment of the stable orbit.
    pub fn orbit_increment(&self) -> f64 {
        TAU / self.ticks_per_orbit()
    }

    /// Angle increment the spiral starts (and restarts) with.
    pub fn spiral_initial_increment(&self) -> f64 {
        self.orbit_increment() / self.spiral.increment_divisor
    }

    /// Parametric x increment the parabola starts (and restarts) with.
    pub fn parabola_initial_increment(&self) -> f64 {
        let p = &self.parabola;
        (p.x_max - p.x_min) / (p.pass_secs * self.refresh_rate * p.increment_divisor)
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        positive("canvas_size", self.canvas_size)?;
        positive("refresh_rate", self.refresh_rate)?;
        positive("orbit_period_secs", self.orbit_period_secs)?;
        positive("orbit_radius", self.orbit_radius)?;
        positive("planet_radius", self.planet_radius)?;
        positive("satellite_radius", self.satellite_radius)?;

        if self.collision_radius() >= self.orbit_radius {
            return Err(ConfigError::CollisionOutsideOrbit {
                collision: self.collision_radius(),
                orbit: self.orbit_radius,
            });
        }

        let s = &self.spiral;
        if !(s.decay > 0.0 && s.decay < 1.0) {
            return Err(ConfigError::NotAFraction {
                field: "spiral.decay",
                value: s.decay,
            });
        }
        accelerating("spiral.acceleration", s.acceleration)?;
        positive("spiral.increment_divisor", s.increment_divisor)?;
        s.planet.gradient.validate("spiral")?;

        let p = &self.parabola;
        if !(p.x_min.is_finite() && p.x_max.is_finite() && p.x_min < p.x_max) {
            return Err(ConfigError::EmptyBounds {
                x_min: p.x_min,
                x_max: p.x_max,
            });
        }
        positive("parabola.curvature", p.curvature)?;
        positive("parabola.pass_secs", p.pass_secs)?;
        positive("parabola.increment_divisor", p.increment_divisor)?;
        accelerating("parabola.acceleration", p.acceleration)?;
        positive("parabola.scale", p.scale)?;
        p.planet.gradient.validate("parabola")?;

        self.orbit.planet.gradient.validate("orbit")?;

        let alpha = self.trail.background_alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ConfigError::NotAFraction {
                field: "trail.background_alpha",
                value: alpha,
            });
        }

        Ok(())
    }
}
