//! Tunable parameters for the match simulation and the pinch interpreter.
//!
//! Defaults come from `constants.rs`; frontends may override individual
//! fields and should call `validate` before handing a config to the engine.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct GameConfig {
    /// Length of one match in seconds.
    pub match_duration_sec: f32,
    /// Angular speed of a falling target (radians per second, magnitude).
    pub fall_speed_rad_per_sec: f32,
    /// Rotation at which a falling target counts as fallen.
    pub fall_end_angle_rad: f32,
    /// Points per shelf row counted from the bottom (bottom row = 1).
    pub points_per_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_duration_sec: MATCH_DURATION_SEC,
            fall_speed_rad_per_sec: FALL_SPEED_RAD_PER_SEC,
            fall_end_angle_rad: FALL_END_ANGLE_RAD,
            points_per_row: POINTS_PER_ROW,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.match_duration_sec > 0.0) {
            return Err(ConfigError::MatchDuration(self.match_duration_sec));
        }
        if !(self.fall_speed_rad_per_sec > 0.0) {
            return Err(ConfigError::FallSpeed(self.fall_speed_rad_per_sec));
        }
        if !(self.fall_end_angle_rad < 0.0) {
            return Err(ConfigError::FallEndAngle(self.fall_end_angle_rad));
        }
        Ok(())
    }

    /// Point value for a target on `row_from_bottom` (0 = bottom shelf).
    #[inline]
    pub fn points_for_row(&self, row_from_bottom: usize) -> u32 {
        (row_from_bottom as u32 + 1) * self.points_per_row
    }
}

#[derive(Clone, Debug)]
pub struct GestureConfig {
    /// Thumb-to-index distance (normalized camera units) below which a pinch is engaged.
    pub pinch_threshold: f32,
    /// Minimum time between two fire events.
    pub cooldown_sec: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_THRESHOLD,
            cooldown_sec: FIRE_COOLDOWN_SEC,
        }
    }
}

impl GestureConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pinch_threshold > 0.0) {
            return Err(ConfigError::PinchThreshold(self.pinch_threshold));
        }
        if !(self.cooldown_sec >= 0.0) {
            return Err(ConfigError::Cooldown(self.cooldown_sec));
        }
        Ok(())
    }
}
