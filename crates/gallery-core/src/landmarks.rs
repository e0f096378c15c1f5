//! Hand landmark input as delivered by the detection collaborator.
//!
//! The detector hands over a flat `f32` buffer of `x, y, z` triples, 21 per
//! hand (MediaPipe Hands ordering). Only the first hand is kept: the game is
//! played with one hand, and making that explicit here means downstream code
//! never has to pick "the first element" itself.

use crate::constants::{HAND_LANDMARK_COUNT, LANDMARK_COMPONENTS};
use crate::error::LandmarkError;
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;

/// Floats per hand in the flat detector buffer.
pub const HAND_STRIDE: usize = HAND_LANDMARK_COUNT * LANDMARK_COMPONENTS;

/// A single hand keypoint in normalized camera space (x, y in 0..1, z relative depth).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// The full keypoint set for one tracked hand.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Landmark; HAND_LANDMARK_COUNT],
}

impl Default for HandLandmarks {
    fn default() -> Self {
        Self {
            points: [Landmark::zeroed(); HAND_LANDMARK_COUNT],
        }
    }
}

impl HandLandmarks {
    /// Build a hand where only the thumb and index tips are meaningful.
    ///
    /// Everything else sits on the wrist. Handy for synthetic input.
    pub fn from_tips(thumb_tip: Landmark, index_tip: Landmark) -> Self {
        let mut hand = Self::default();
        hand.points[THUMB_TIP] = thumb_tip;
        hand.points[INDEX_TIP] = index_tip;
        hand
    }

    /// Parse the first hand out of a flat detector buffer.
    ///
    /// `Ok(None)` means no hand was detected this frame.
    pub fn first_from_flat(data: &[f32], num_hands: usize) -> Result<Option<Self>, LandmarkError> {
        if num_hands == 0 {
            return Ok(None);
        }
        if data.len() % HAND_STRIDE != 0 {
            return Err(LandmarkError::BadLength {
                len: data.len(),
                stride: HAND_STRIDE,
            });
        }
        let available = data.len() / HAND_STRIDE;
        if num_hands > available {
            return Err(LandmarkError::MissingHand {
                requested: num_hands,
                available,
            });
        }
        let first: &[Landmark] = bytemuck::try_cast_slice(&data[..HAND_STRIDE]).map_err(|_| {
            LandmarkError::BadLength {
                len: data.len(),
                stride: HAND_STRIDE,
            }
        })?;
        if let Some(index) = first.iter().position(|lm| !lm.is_finite()) {
            return Err(LandmarkError::NonFinite { index });
        }
        let mut hand = Self::default();
        hand.points.copy_from_slice(first);
        Ok(Some(hand))
    }

    #[inline]
    pub fn thumb_tip(&self) -> Landmark {
        self.points[THUMB_TIP]
    }

    #[inline]
    pub fn index_tip(&self) -> Landmark {
        self.points[INDEX_TIP]
    }

    /// Thumb-tip to index-tip distance in the image plane.
    #[inline]
    pub fn pinch_distance(&self) -> f32 {
        self.thumb_tip().xy().distance(self.index_tip().xy())
    }
}
