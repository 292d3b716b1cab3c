use super::{AngleWrap, Trajectory, polar};
use crate::config::SceneConfig;
use crate::types::Sample;

/// Uniform circular motion: fixed radius, fixed angle increment.
#[derive(Clone, Debug)]
pub struct OrbitTrajectory {
    angle: f64,
    radius: f64,
    increment: f64,
    wrap: AngleWrap,
    revolutions: u64,
}

impl OrbitTrajectory {
    pub fn new(radius: f64, increment: f64, wrap: AngleWrap) -> Self {
        Self {
            angle: 0.0,
            radius,
            increment,
            wrap,
            revolutions: 0,
        }
    }

    pub fn from_config(cfg: &SceneConfig) -> Self {
        Self::new(cfg.orbit_radius, cfg.orbit_increment(), cfg.angle_wrap)
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn revolutions(&self) -> u64 {
        self.revolutions
    }
}

impl Trajectory for OrbitTrajectory {
    fn step(&mut self) -> Sample {
        let sample = polar(self.angle, self.radius);

        let (angle, wrapped) = self.wrap.apply(self.angle + self.increment);
        self.angle = angle;
        if wrapped {
            self.revolutions += 1;
            log::trace!("orbit completed revolution {}", self.revolutions);
        }

        sample
    }

    fn reset(&mut self) {
        self.angle = 0.0;
    }
}
