//! Per-animation kinematic state machines.
//!
//! Each trajectory owns its own mutable state and emits one [`Sample`] per
//! call to [`Trajectory::step`]. When a boundary is crossed (planet surface,
//! parabola bound, full revolution) the trajectory re-initialises itself on
//! the same tick.
//!
//! - [`spiral`]: decaying, accelerating spiral into the planet.
//! - [`parabola`]: accelerating pass along a fixed parabola.
//! - [`orbit`]: uniform circular motion.

pub mod orbit;
pub mod parabola;
pub mod spiral;

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::types::Sample;

pub use orbit::OrbitTrajectory;
pub use parabola::ParabolaTrajectory;
pub use spiral::SpiralTrajectory;

/// A kinematic state machine advanced once per animation tick.
pub trait Trajectory {
    /// Emits the sample for the current state, then advances the state by
    /// one tick (resetting it if a boundary was crossed).
    fn step(&mut self) -> Sample;

    /// Restores the initial state.
    fn reset(&mut self);
}

/// What happens to an angle that passes a full revolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleWrap {
    /// Snap to exactly 0, dropping the overshoot of the crossing tick.
    #[default]
    Reset,
    /// Keep the overshoot (angle modulo 2π).
    Modulo,
}

impl AngleWrap {
    /// Applies the wrap policy to an already advanced angle.
    ///
    /// Angles at or below 2π are returned untouched; the comparison is a
    /// strict greater-than.
    ///
    /// ### Returns
    /// `(angle, wrapped)` where `wrapped` tells whether a revolution completed.
    #[inline]
    pub fn apply(self, angle: f64) -> (f64, bool) {
        if angle <= TAU {
            return (angle, false);
        }
        match self {
            AngleWrap::Reset => (0.0, true),
            AngleWrap::Modulo => (angle.rem_euclid(TAU), true),
        }
    }
}

/// Polar sample with the canvas convention: `x = sin θ · r`, `y = cos θ · r`.
#[inline]
pub(crate) fn polar(angle: f64, radius: f64) -> Sample {
    Sample::new(angle.sin() * radius, angle.cos() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn angles_within_a_revolution_are_untouched() {
        assert_eq!(AngleWrap::Reset.apply(PI), (PI, false));
        assert_eq!(AngleWrap::Modulo.apply(TAU), (TAU, false));
    }

    #[test]
    fn reset_drops_the_overshoot() {
        let (a, wrapped) = AngleWrap::Reset.apply(TAU + 0.3);
        assert!(wrapped);
        assert_eq!(a, 0.0);
    }

    #[test]
    fn modulo_keeps_the_overshoot() {
        let (a, wrapped) = AngleWrap::Modulo.apply(TAU + 0.3);
        assert!(wrapped);
        assert!((a - 0.3).abs() < 1e-12);
    }

    #[test]
    fn polar_zero_angle_points_down_the_canvas() {
        let p = polar(0.0, 150.0);
        assert_eq!(p, Sample::new(0.0, 150.0));

        let q = polar(PI / 2.0, 10.0);
        assert!((q.x - 10.0).abs() < 1e-12 && q.y.abs() < 1e-12);
    }

    #[test]
    fn wrap_policy_deserializes_from_lowercase() {
        let wrap: AngleWrap = serde_yaml::from_str("modulo").unwrap();
        assert_eq!(wrap, AngleWrap::Modulo);
    }
}
