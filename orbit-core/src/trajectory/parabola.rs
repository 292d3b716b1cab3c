use glam::DVec2;

use super::Trajectory;
use crate::config::SceneConfig;
use crate::types::Sample;

/// Maps the parabola's parametric plane onto canvas pixels.
///
/// `X = x · scale`, `Y = y_offset - y · scale`: the parabola opens upwards on
/// screen and its vertex sits `y_offset` pixels below the canvas centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMapping {
    pub scale: f64,
    pub y_offset: f64,
}

impl PixelMapping {
    #[inline]
    pub fn to_pixels(self, p: DVec2) -> Sample {
        Sample::new(p.x * self.scale, self.y_offset - p.y * self.scale)
    }
}

/// Satellite that escapes: a pass along `x² = 4ay` whose parametric speed
/// grows every tick. When `x` leaves `x_max` the pass starts again at
/// `x_min` with the initial increment.
#[derive(Clone, Debug)]
pub struct ParabolaTrajectory {
    x: f64,
    increment: f64,

    x_min: f64,
    x_max: f64,
    curvature: f64,
    start_increment: f64,
    acceleration: f64,
    mapping: PixelMapping,

    resets: u64,
}

impl ParabolaTrajectory {
    /// ### Parameters
    /// - `x_min`, `x_max` - Parametric range of one pass.
    /// - `curvature` - The `a` in `x² = 4ay`.
    /// - `start_increment` - Parametric step before acceleration.
    /// - `acceleration` - Multiplier applied to the step each tick.
    /// - `mapping` - Parametric-to-pixel mapping of the emitted sample.
    pub fn new(
        x_min: f64,
        x_max: f64,
        curvature: f64,
        start_increment: f64,
        acceleration: f64,
        mapping: PixelMapping,
    ) -> Self {
        Self {
            x: x_min,
            increment: start_increment,
            x_min,
            x_max,
            curvature,
            start_increment,
            acceleration,
            mapping,
            resets: 0,
        }
    }

    pub fn from_config(cfg: &SceneConfig) -> Self {
        let p = &cfg.parabola;
        Self::new(
            p.x_min,
            p.x_max,
            p.curvature,
            cfg.parabola_initial_increment(),
            p.acceleration,
            PixelMapping {
                scale: p.scale,
                y_offset: p.y_offset,
            },
        )
    }

    /// `y = x² / 4a`.
    #[inline]
    pub fn height_at(&self, x: f64) -> f64 {
        x * x / (4.0 * self.curvature)
    }

    /// Current parametric `(x, y)` pair, before pixel mapping.
    pub fn parametric(&self) -> DVec2 {
        DVec2::new(self.x, self.height_at(self.x))
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn start_increment(&self) -> f64 {
        self.start_increment
    }

    pub fn mapping(&self) -> PixelMapping {
        self.mapping
    }

    /// Number of completed passes.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}

impl Trajectory for ParabolaTrajectory {
    fn step(&mut self) -> Sample {
        let sample = self.mapping.to_pixels(self.parametric());

        self.increment *= self.acceleration;
        self.x += self.increment;

        if self.x > self.x_max {
            log::debug!("parabola pass {} complete, restarting", self.resets + 1);
            self.reset();
            self.resets += 1;
        }

        sample
    }

    fn reset(&mut self) {
        self.x = self.x_min;
        self.increment = self.start_increment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_parabola() -> ParabolaTrajectory {
        ParabolaTrajectory::from_config(&SceneConfig::default())
    }

    #[test]
    fn first_sample_is_the_left_end_of_the_pass() {
        let mut p = default_parabola();
        // x = -10, y = 100 / 6.
        let s = p.step();
        assert!((s.x + 200.0).abs() < 1e-12);
        assert!((s.y - (130.0 - 20.0 * 100.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn mapping_matches_canvas_offsets() {
        let m = PixelMapping {
            scale: 20.0,
            y_offset: 130.0,
        };
        // -((y * 20) - 300) - 170 for y = 2.
        let expected = -((2.0 * 20.0) - 300.0) - 170.0;
        assert_eq!(m.to_pixels(DVec2::new(1.0, 2.0)), Sample::new(20.0, expected));
    }

    #[test]
    fn parametric_pair_lies_on_the_parabola() {
        let mut p = default_parabola();
        for _ in 0..2000 {
            let q = p.parametric();
            assert!((q.y - q.x * q.x / 6.0).abs() < 1e-12);

            let s = p.step();
            assert_eq!(s, p.mapping().to_pixels(q));
        }
    }

    #[test]
    fn x_resets_on_the_tick_it_passes_the_bound() {
        let mut p = default_parabola();
        let mut ticks = 0;
        loop {
            let next = p.x() + p.increment() * 1.01;
            p.step();
            ticks += 1;
            if next > 10.0 {
                assert_eq!(p.x(), -10.0);
                assert_eq!(p.increment(), p.start_increment());
                assert_eq!(p.resets(), 1);
                break;
            }
            assert!((p.x() - next).abs() < 1e-12);
            assert!(p.x() <= 10.0);
            assert!(ticks < 10_000, "parabola never reached its bound");
        }
    }

    #[test]
    fn increment_accelerates_each_tick() {
        let mut p = default_parabola();
        assert!((p.increment() - 1.0 / 1200.0).abs() < 1e-15);
        p.step();
        assert!((p.increment() - 1.01 / 1200.0).abs() < 1e-15);
    }
}
