use thiserror::Error;

/// Rejected landmark input from the detection collaborator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("landmark buffer has {len} values, expected a multiple of {stride}")]
    BadLength { len: usize, stride: usize },
    #[error("landmark buffer holds {available} hands, {requested} requested")]
    MissingHand { requested: usize, available: usize },
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Tuning values that would break the simulation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("match duration must be positive, got {0}")]
    MatchDuration(f32),
    #[error("fall speed must be positive, got {0}")]
    FallSpeed(f32),
    #[error("terminal fall angle must be negative, got {0}")]
    FallEndAngle(f32),
    #[error("pinch threshold must be positive, got {0}")]
    PinchThreshold(f32),
    #[error("fire cooldown must not be negative, got {0}")]
    Cooldown(f32),
    #[error("shelf layout needs at least one row and one column")]
    EmptyLayout,
}
