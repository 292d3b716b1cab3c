/// Reasons a [`crate::config::SceneConfig`] is rejected before a scene is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must lie strictly between 0 and 1, got {value}")]
    NotAFraction { field: &'static str, value: f64 },

    #[error("{field} must be at least 1, got {value}")]
    Decelerating { field: &'static str, value: f64 },

    #[error("parabola bounds are empty: x_min = {x_min}, x_max = {x_max}")]
    EmptyBounds { x_min: f64, x_max: f64 },

    #[error(
        "collision radius {collision} (planet + satellite) must be below the orbit radius {orbit}"
    )]
    CollisionOutsideOrbit { collision: f64, orbit: f64 },

    #[error("gradient `{name}` has no colour stops")]
    NoColorStops { name: &'static str },

    #[error("gradient `{name}` stop offsets must be sorted and within [0, 1]")]
    BadColorStops { name: &'static str },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
