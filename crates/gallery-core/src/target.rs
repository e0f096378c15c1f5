//! Simulation state of a shelf figure.
//!
//! Geometry lives with the ray caster and renderer; this side only knows the
//! stable id, scoring and the fall lifecycle.

use glam::Vec3;

/// Stable identifier shared between simulation, hit geometry and the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetState {
    Standing,
    Falling,
    Fallen,
}

#[derive(Clone, Debug)]
pub struct Target {
    pub id: TargetId,
    /// Pivot position at the base of the figure.
    pub position: Vec3,
    /// Shelf row counted from the bottom, 0-based.
    pub row: usize,
    pub points: u32,
    state: TargetState,
    rotation: f32,
}

impl Target {
    pub fn new(id: TargetId, position: Vec3, row: usize, points: u32) -> Self {
        Self {
            id,
            position,
            row,
            points,
            state: TargetState::Standing,
            rotation: 0.0,
        }
    }

    #[inline]
    pub fn state(&self) -> TargetState {
        self.state
    }

    /// Pivot rotation about the X axis in radians; 0 upright, negative tipping back.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn is_standing(&self) -> bool {
        self.state == TargetState::Standing
    }

    /// Knock the target over. Returns false if it was not standing.
    pub fn knock_over(&mut self) -> bool {
        if self.state != TargetState::Standing {
            return false;
        }
        self.state = TargetState::Falling;
        true
    }

    /// Advance the fall animation. Returns true on the step the target lands.
    pub fn advance_fall(&mut self, dt_sec: f32, speed_rad_per_sec: f32, end_angle_rad: f32) -> bool {
        if self.state != TargetState::Falling {
            return false;
        }
        self.rotation -= speed_rad_per_sec * dt_sec;
        if self.rotation <= end_angle_rad {
            self.rotation = end_angle_rad;
            self.state = TargetState::Fallen;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.state = TargetState::Standing;
        self.rotation = 0.0;
    }
}
