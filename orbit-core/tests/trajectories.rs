use std::f64::consts::PI;

use orbit_core::scene::{AnimationKind, Scene};
use orbit_core::trajectory::{
    AngleWrap, OrbitTrajectory, ParabolaTrajectory, SpiralTrajectory, Trajectory,
};
use orbit_core::types::Sample;
use orbit_core::SceneConfig;

/// Scene constants for the worked examples: 10 s orbit at 60 Hz, radius 150,
/// planet 20 + satellite 6.
fn classic() -> SceneConfig {
    SceneConfig::default()
}

/// Smallest n with `r0 * decay^n < threshold`.
fn closed_form_fall_ticks(r0: f64, decay: f64, threshold: f64) -> u64 {
    (1..100_000)
        .find(|&n| r0 * decay.powi(n) < threshold)
        .expect("radius never reaches the threshold") as u64
}

// ==================================================================================
// Orbit
// ==================================================================================

#[test]
fn orbit_returns_to_start_after_one_period() {
    let cfg = classic();
    let mut orbit = OrbitTrajectory::from_config(&cfg);
    let period = cfg.ticks_per_orbit() as usize;
    assert_eq!(period, 600);

    let first = orbit.step();
    assert_eq!(first, Sample::new(0.0, 150.0));
    for _ in 1..period {
        orbit.step();
    }

    // The 600th advance passes 2π and wraps.
    assert_eq!(orbit.revolutions(), 1);
    assert_eq!(orbit.angle(), 0.0);

    let again = orbit.step();
    assert!((again - first).length() < 1e-6, "{again:?} vs {first:?}");
    assert_eq!(orbit.revolutions(), 1);
}

#[test]
fn orbit_samples_lie_on_fixed_circle_for_many_revolutions() {
    let mut orbit = OrbitTrajectory::from_config(&classic());
    for _ in 0..6000 {
        assert!((orbit.step().length() - 150.0).abs() < 1e-9);
    }
    assert!(orbit.revolutions() >= 9);
}

// ==================================================================================
// Spiral
// ==================================================================================

#[test]
fn spiral_resets_on_closed_form_tick() {
    let cfg = classic();
    let mut spiral = SpiralTrajectory::from_config(&cfg);
    let n = closed_form_fall_ticks(150.0, 0.998, 26.0);

    for _ in 0..n - 1 {
        spiral.step();
    }
    assert_eq!(spiral.resets(), 0);
    let expected = 150.0 * 0.998f64.powi((n - 1) as i32);
    assert!((spiral.radius() - expected).abs() < 1e-6 * expected);
    assert!(spiral.radius() >= 26.0);

    spiral.step();
    assert_eq!(spiral.resets(), 1);
    assert_eq!(spiral.angle(), PI);
    assert_eq!(spiral.radius(), 150.0);
    assert_eq!(spiral.increment(), spiral.start_increment());
}

#[test]
fn spiral_falls_repeat_with_identical_length() {
    let cfg = classic();
    let mut spiral = SpiralTrajectory::from_config(&cfg);
    let n = closed_form_fall_ticks(150.0, 0.998, 26.0);

    for _ in 0..3 * n {
        spiral.step();
    }
    assert_eq!(spiral.resets(), 3);
    assert_eq!(spiral.radius(), 150.0);
}

#[test]
fn wrap_policy_does_not_change_spiral_fall_length() {
    let mut cfg = classic();
    let mut reset = SpiralTrajectory::from_config(&cfg);
    cfg.angle_wrap = AngleWrap::Modulo;
    let mut modulo = SpiralTrajectory::from_config(&cfg);

    let n = closed_form_fall_ticks(150.0, 0.998, 26.0);
    for _ in 0..n {
        reset.step();
        modulo.step();
    }
    assert_eq!(reset.resets(), 1);
    assert_eq!(modulo.resets(), 1);
}

// ==================================================================================
// Parabola
// ==================================================================================

#[test]
fn parabola_pass_covers_the_whole_range() {
    let mut parabola = ParabolaTrajectory::from_config(&classic());
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;

    while parabola.resets() == 0 {
        let q = parabola.parametric();
        assert!((q.y - q.x * q.x / (4.0 * 1.5)).abs() < 1e-12);
        min_x = min_x.min(q.x);
        max_x = max_x.max(q.x);
        parabola.step();
    }

    assert_eq!(min_x, -10.0);
    assert!(max_x <= 10.0 && max_x > 9.0);
    assert_eq!(parabola.x(), -10.0);
}

// ==================================================================================
// Scene
// ==================================================================================

#[test]
fn identical_configs_give_identical_runs() {
    let mut a = Scene::new(&classic()).unwrap();
    let mut b = Scene::new(&classic()).unwrap();

    for _ in 0..2500 {
        a.tick();
        b.tick();
        for kind in AnimationKind::ALL {
            assert_eq!(
                a.animation(kind).last_sample(),
                b.animation(kind).last_sample()
            );
        }
    }
}

#[test]
fn scene_samples_match_standalone_trajectories() {
    let cfg = classic();
    let mut scene = Scene::new(&cfg).unwrap();
    let mut spiral = SpiralTrajectory::from_config(&cfg);
    let mut parabola = ParabolaTrajectory::from_config(&cfg);
    let mut orbit = OrbitTrajectory::from_config(&cfg);

    for _ in 0..1000 {
        scene.tick();
        assert_eq!(
            scene.animation(AnimationKind::Spiral).last_sample(),
            Some(spiral.step())
        );
        assert_eq!(
            scene.animation(AnimationKind::Parabola).last_sample(),
            Some(parabola.step())
        );
        assert_eq!(
            scene.animation(AnimationKind::Orbit).last_sample(),
            Some(orbit.step())
        );
    }
}
