//! Kinematic core of the three celestial-mechanics animations.
//!
//! Main components:
//! - [`trajectory`]: spiral, parabola and orbit state machines.
//! - [`scene`]: the three animations and the per-tick driver.
//! - [`body`]: planets and satellites as drawable circles.
//! - [`gradient`]: two-circle radial gradients for planet shading.
//! - [`trail`]: fading history of satellite positions.
//! - [`starfield`]: seeded procedural background.
//! - [`config`]: scene constants, loadable with serde.
//! - [`error`]: configuration errors.
//! - [`types`]: shared sample and colour types.

pub mod body;
pub mod config;
pub mod error;
pub mod gradient;
pub mod scene;
pub mod starfield;
pub mod trail;
pub mod trajectory;
pub mod types;

pub use config::SceneConfig;
pub use error::ConfigError;
pub use scene::{Animation, AnimationKind, Scene};
