//! Two-circle radial gradients.
//!
//! A [`RadialGradient`] follows the HTML canvas `createRadialGradient`
//! model: an inner circle `(c0, r0)` and an outer circle `(c1, r1)` define a
//! cone of circles `c(t) = c0 + t (c1 - c0)`, `r(t) = r0 + t (r1 - r0)`.
//! A point takes the colour of the largest `t` whose circle passes through
//! it, with colours padded beyond the first and last stop.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::types::Rgb;

/// A colour pinned at `offset` along the gradient, `offset` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(offset: f64, color: Rgb) -> Self {
        Self { offset, color }
    }
}

/// Stops used for every planet: pale cyan core fading to deep blue.
pub fn planet_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Rgb::new(200, 255, 255)),
        ColorStop::new(0.5, Rgb::new(100, 255, 255)),
        ColorStop::new(1.0, Rgb::new(0, 100, 255)),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub inner_center: DVec2,
    pub inner_radius: f64,
    pub outer_center: DVec2,
    pub outer_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Gradient with the planet stops, an inner circle of radius 2 and an
    /// outer circle of radius 20.
    pub fn planet(inner_center: DVec2, outer_center: DVec2) -> Self {
        Self {
            inner_center,
            inner_radius: 2.0,
            outer_center,
            outer_radius: 20.0,
            stops: planet_stops(),
        }
    }

    /// Checks radii and stop ordering.
    ///
    /// ### Parameters
    /// - `name` - Label used in the error, usually the owning animation.
    pub fn validate(&self, name: &'static str) -> ConfigResult<()> {
        if !(self.inner_radius >= 0.0 && self.inner_radius.is_finite()) {
            return Err(ConfigError::NotPositive {
                field: "gradient.inner_radius",
                value: self.inner_radius,
            });
        }
        if !(self.outer_radius >= 0.0 && self.outer_radius.is_finite()) {
            return Err(ConfigError::NotPositive {
                field: "gradient.outer_radius",
                value: self.outer_radius,
            });
        }
        if self.stops.is_empty() {
            return Err(ConfigError::NoColorStops { name });
        }
        let in_range = self.stops.iter().all(|s| (0.0..=1.0).contains(&s.offset));
        let sorted = self.stops.windows(2).all(|w| w[0].offset <= w[1].offset);
        if !in_range || !sorted {
            return Err(ConfigError::BadColorStops { name });
        }
        Ok(())
    }

    /// Returns the gradient parameter `t` for a point, or `None` when no
    /// circle of the cone with a non-negative radius passes through it.
    ///
    /// The value is not clamped; [`RadialGradient::color_at_offset`] pads.
    pub fn parameter_at(&self, p: DVec2) -> Option<f64> {
        let dc = self.outer_center - self.inner_center;
        let dr = self.outer_radius - self.inner_radius;
        let q = p - self.inner_center;

        // |q - t dc|^2 = (r0 + t dr)^2  =>  a t^2 - 2 b t + c = 0
        let a = dc.length_squared() - dr * dr;
        let b = q.dot(dc) + self.inner_radius * dr;
        let c = q.length_squared() - self.inner_radius * self.inner_radius;

        let radius_ok = |t: f64| self.inner_radius + t * dr >= 0.0;

        if a.abs() < 1e-12 {
            if b.abs() < 1e-12 {
                return None;
            }
            let t = c / (2.0 * b);
            return radius_ok(t).then_some(t);
        }

        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let s = disc.sqrt();
        let t1 = (b + s) / a;
        let t2 = (b - s) / a;
        let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

        if radius_ok(hi) {
            Some(hi)
        } else if radius_ok(lo) {
            Some(lo)
        } else {
            None
        }
    }

    /// Colour at gradient offset `t`, padded outside the stop range.
    ///
    /// Returns `None` only when the gradient has no stops.
    pub fn color_at_offset(&self, t: f64) -> Option<Rgb> {
        let first = self.stops.first()?;
        if t <= first.offset {
            return Some(first.color);
        }
        for w in self.stops.windows(2) {
            let (from, to) = (w[0], w[1]);
            if t <= to.offset {
                let span = to.offset - from.offset;
                if span <= 0.0 {
                    return Some(to.color);
                }
                return Some(from.color.lerp(to.color, (t - from.offset) / span));
            }
        }
        self.stops.last().map(|s| s.color)
    }

    /// Colour painted at `p`, or `None` if the gradient leaves it transparent.
    pub fn color_at(&self, p: DVec2) -> Option<Rgb> {
        self.parameter_at(p).and_then(|t| self.color_at_offset(t))
    }
}
