use std::collections::VecDeque;

use glam::DVec2;

/// Opacity below which a trail entry is invisible on an 8-bit surface.
const MIN_VISIBLE: f64 = 1.0 / 255.0;

/// Recent positions of a body, faded as if the background were repainted
/// over every frame with opacity `background_alpha`.
///
/// An entry drawn `k` ticks ago keeps `(1 - background_alpha)^k` of its
/// opacity. Entries are dropped once that falls below one 8-bit step.
#[derive(Clone, Debug)]
pub struct FadeTrail {
    retention: f64,
    capacity: usize,
    points: VecDeque<DVec2>,
}

impl FadeTrail {
    /// ### Parameters
    /// - `background_alpha` - Opacity of the per-tick background repaint,
    ///   in `(0, 1]`. `1` leaves no trail.
    pub fn new(background_alpha: f64) -> Self {
        let retention = (1.0 - background_alpha).clamp(0.0, 1.0);
        let capacity = if retention <= 0.0 {
            1
        } else if retention >= 1.0 {
            // Never fades; bound the history to one second at 60 Hz.
            60
        } else {
            // Smallest k with retention^k < MIN_VISIBLE: ages 0..k stay visible.
            (MIN_VISIBLE.ln() / retention.ln()).floor() as usize + 1
        };
        Self {
            retention,
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    /// Maximum number of stored positions, the newest included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Records the newest position, evicting the oldest when full.
    pub fn push(&mut self, pos: DVec2) {
        if self.points.len() == self.capacity {
            self.points.pop_back();
        }
        self.points.push_front(pos);
    }

    pub fn latest(&self) -> Option<DVec2> {
        self.points.front().copied()
    }

    /// Opacity of an entry `age` ticks old.
    #[inline]
    pub fn opacity(&self, age: usize) -> f64 {
        self.retention.powi(age as i32)
    }

    /// Every entry except the newest, oldest first, with its opacity.
    pub fn faded(&self) -> impl Iterator<Item = (DVec2, f64)> + '_ {
        self.points
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .map(|(age, &p)| (p, self.opacity(age)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_covers_every_visible_age() {
        let trail = FadeTrail::new(0.25);
        let oldest = trail.capacity() - 1;

        assert_eq!(trail.capacity(), 20);
        assert!(trail.opacity(oldest) >= MIN_VISIBLE);
        assert!(trail.opacity(trail.capacity()) < MIN_VISIBLE);
    }

    #[test]
    fn opaque_background_leaves_no_trail() {
        let mut trail = FadeTrail::new(1.0);
        trail.push(DVec2::new(1.0, 1.0));
        trail.push(DVec2::new(2.0, 2.0));

        assert_eq!(trail.len(), 1);
        assert_eq!(trail.latest(), Some(DVec2::new(2.0, 2.0)));
        assert_eq!(trail.faded().count(), 0);
    }

    #[test]
    fn faded_entries_are_oldest_first_with_geometric_opacity() {
        let mut trail = FadeTrail::new(0.25);
        for i in 0..4 {
            trail.push(DVec2::new(i as f64, 0.0));
        }

        let faded: Vec<_> = trail.faded().collect();
        assert_eq!(faded.len(), 3);

        assert_eq!(faded[0].0, DVec2::new(0.0, 0.0));
        assert!((faded[0].1 - 0.75f64.powi(3)).abs() < 1e-12);
        assert_eq!(faded[2].0, DVec2::new(2.0, 0.0));
        assert!((faded[2].1 - 0.75).abs() < 1e-12);
    }

    #[test]
    fn every_stored_entry_is_visible() {
        for alpha in [0.05, 0.25, 0.5, 0.9] {
            let mut trail = FadeTrail::new(alpha);
            for i in 0..500 {
                trail.push(DVec2::new(i as f64, 0.0));
            }
            assert!(trail.faded().all(|(_, opacity)| opacity >= MIN_VISIBLE));
        }
    }

    #[test]
    fn push_evicts_oldest_when_full() {
        let mut trail = FadeTrail::new(0.25);
        for i in 0..100 {
            trail.push(DVec2::new(i as f64, 0.0));
        }
        assert_eq!(trail.len(), trail.capacity());
        assert_eq!(trail.latest(), Some(DVec2::new(99.0, 0.0)));

        let oldest = trail.faded().next().unwrap().0;
        assert_eq!(oldest, DVec2::new((100 - trail.capacity()) as f64, 0.0));
    }
}
