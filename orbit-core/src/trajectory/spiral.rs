use std::f64::consts::PI;

use super::{AngleWrap, Trajectory, polar};
use crate::config::SceneConfig;
use crate::types::Sample;

/// Satellite captured by the planet: the radius shrinks geometrically while
/// the angular increment grows geometrically, so the satellite speeds up as
/// it falls. Once the radius drops below the collision radius the fall
/// starts over from the initial orbit.
#[derive(Clone, Debug)]
pub struct SpiralTrajectory {
    angle: f64,
    radius: f64,
    increment: f64,

    start_radius: f64,
    start_increment: f64,
    acceleration: f64,
    decay: f64,
    collision_radius: f64,
    wrap: AngleWrap,

    ticks_in_fall: u64,
    resets: u64,
}

impl SpiralTrajectory {
    /// The angle every fall starts from.
    pub const START_ANGLE: f64 = PI;

    /// Creates a spiral starting at angle π.
    ///
    /// ### Parameters
    /// - `start_radius` - Radius of the first sample and of every restart.
    /// - `start_increment` - Angle increment (radians) before acceleration.
    /// - `acceleration` - Multiplier applied to the increment each tick (> 1).
    /// - `decay` - Multiplier applied to the radius each tick (in (0, 1)).
    /// - `collision_radius` - Radius below which the fall restarts.
    /// - `wrap` - Policy for angles that pass 2π.
    pub fn new(
        start_radius: f64,
        start_increment: f64,
        acceleration: f64,
        decay: f64,
        collision_radius: f64,
        wrap: AngleWrap,
    ) -> Self {
        Self {
            angle: Self::START_ANGLE,
            radius: start_radius,
            increment: start_increment,
            start_radius,
            start_increment,
            acceleration,
            decay,
            collision_radius,
            wrap,
            ticks_in_fall: 0,
            resets: 0,
        }
    }

    pub fn from_config(cfg: &SceneConfig) -> Self {
        Self::new(
            cfg.orbit_radius,
            cfg.spiral_initial_increment(),
            cfg.spiral.acceleration,
            cfg.spiral.decay,
            cfg.collision_radius(),
            cfg.angle_wrap,
        )
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Radius used for the next emitted sample.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn start_increment(&self) -> f64 {
        self.start_increment
    }

    pub fn collision_radius(&self) -> f64 {
        self.collision_radius
    }

    /// Number of completed falls.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

impl Trajectory for SpiralTrajectory {
    fn step(&mut self) -> Sample {
        let sample = polar(self.angle, self.radius);

        self.increment *= self.acceleration;
        self.angle = self.wrap.apply(self.angle + self.increment).0;
        self.radius *= self.decay;
        self.ticks_in_fall += 1;

        if self.radius < self.collision_radius {
            log::debug!(
                "spiral reached the planet after {} ticks, restarting",
                self.ticks_in_fall
            );
            self.reset();
            self.resets += 1;
        }

        sample
    }

    fn reset(&mut self) {
        self.angle = Self::START_ANGLE;
        self.radius = self.start_radius;
        self.increment = self.start_increment;
        self.ticks_in_fall = 0;
    }
}
