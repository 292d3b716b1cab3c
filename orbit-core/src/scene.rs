//! The three animations and the per-tick driver that advances them.

use crate::body::CelestialBody;
use crate::config::{PlanetConfig, SceneConfig};
use crate::error::ConfigResult;
use crate::trail::FadeTrail;
use crate::trajectory::{OrbitTrajectory, ParabolaTrajectory, SpiralTrajectory, Trajectory};
use crate::types::Sample;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Captured satellite falling into the planet.
    Spiral,
    /// Fast satellite escaping after the encounter.
    Parabola,
    /// Satellite in a stable orbit.
    Orbit,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 3] = [
        AnimationKind::Spiral,
        AnimationKind::Parabola,
        AnimationKind::Orbit,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AnimationKind::Spiral => "Captured: spiral into the planet",
            AnimationKind::Parabola => "Too fast: escape on a parabola",
            AnimationKind::Orbit => "Just right: stable orbit",
        }
    }
}

/// One canvas worth of state: a trajectory driving a satellite around a
/// fixed planet, plus the satellite's fading trail.
pub struct Animation {
    kind: AnimationKind,
    trajectory: Box<dyn Trajectory>,
    planet: CelestialBody,
    satellite: CelestialBody,
    trail: FadeTrail,
    last_sample: Option<Sample>,
}

impl Animation {
    fn new(
        kind: AnimationKind,
        trajectory: Box<dyn Trajectory>,
        planet: &PlanetConfig,
        cfg: &SceneConfig,
    ) -> Self {
        Self {
            kind,
            trajectory,
            planet: CelestialBody::planet(planet, cfg.planet_radius, cfg.planet_color),
            satellite: CelestialBody::satellite(cfg.satellite_radius, cfg.satellite_color),
            trail: FadeTrail::new(cfg.trail.background_alpha),
            last_sample: None,
        }
    }

    /// Steps the trajectory and moves the satellite onto the new sample.
    pub fn tick(&mut self) -> Sample {
        let sample = self.trajectory.step();
        self.satellite.place_at(sample);
        self.trail.push(self.satellite.pos);
        self.last_sample = Some(sample);
        sample
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn planet(&self) -> &CelestialBody {
        &self.planet
    }

    pub fn satellite(&self) -> &CelestialBody {
        &self.satellite
    }

    pub fn trail(&self) -> &FadeTrail {
        &self.trail
    }

    /// Sample emitted on the most recent tick.
    pub fn last_sample(&self) -> Option<Sample> {
        self.last_sample
    }
}

/// Owns the spiral, parabola and orbit animations and advances all three
/// together, once per tick.
pub struct Scene {
    animations: [Animation; 3],
    ticks: u64,
}

impl Scene {
    /// Validates the configuration and builds the three animations.
    pub fn new(cfg: &SceneConfig) -> ConfigResult<Self> {
        cfg.validate()?;

        let animations = [
            Animation::new(
                AnimationKind::Spiral,
                Box::new(SpiralTrajectory::from_config(cfg)),
                &cfg.spiral.planet,
                cfg,
            ),
            Animation::new(
                AnimationKind::Parabola,
                Box::new(ParabolaTrajectory::from_config(cfg)),
                &cfg.parabola.planet,
                cfg,
            ),
            Animation::new(
                AnimationKind::Orbit,
                Box::new(OrbitTrajectory::from_config(cfg)),
                &cfg.orbit.planet,
                cfg,
            ),
        ];

        log::debug!(
            "scene ready: orbit radius {}, collision radius {}, {} ticks per orbit",
            cfg.orbit_radius,
            cfg.collision_radius(),
            cfg.ticks_per_orbit()
        );

        Ok(Self {
            animations,
            ticks: 0,
        })
    }

    /// Advances every animation by one tick.
    pub fn tick(&mut self) {
        for animation in &mut self.animations {
            animation.tick();
        }
        self.ticks += 1;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn animation(&self, kind: AnimationKind) -> &Animation {
        let idx = match kind {
            AnimationKind::Spiral => 0,
            AnimationKind::Parabola => 1,
            AnimationKind::Orbit => 2,
        };
        &self.animations[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn animations_are_ordered_by_kind() {
        let scene = Scene::new(&SceneConfig::default()).unwrap();
        let kinds: Vec<_> = scene.animations().iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, AnimationKind::ALL);
        for kind in AnimationKind::ALL {
            assert_eq!(scene.animation(kind).kind(), kind);
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut cfg = SceneConfig::default();
        cfg.refresh_rate = 0.0;
        assert!(Scene::new(&cfg).is_err());
    }

    #[test]
    fn tick_moves_every_satellite_and_records_trail() {
        let mut scene = Scene::new(&SceneConfig::default()).unwrap();
        scene.tick();

        assert_eq!(scene.ticks(), 1);
        for a in scene.animations() {
            let sample = a.last_sample().unwrap();
            assert_eq!(a.satellite().pos, sample - DVec2::splat(3.0));
            assert_eq!(a.trail().latest(), Some(a.satellite().pos));
        }

        // Orbit starts at angle 0: straight below the centre.
        let orbit = scene.animation(AnimationKind::Orbit);
        assert_eq!(orbit.last_sample(), Some(Sample::new(0.0, 150.0)));
    }

    #[test]
    fn planets_stay_put() {
        let mut scene = Scene::new(&SceneConfig::default()).unwrap();
        let before: Vec<_> = scene.animations().iter().map(|a| a.planet().pos).collect();
        for _ in 0..100 {
            scene.tick();
        }
        let after: Vec<_> = scene.animations().iter().map(|a| a.planet().pos).collect();
        assert_eq!(before, after);
    }
}
