//! Scripted player: picks a standing figure, drifts the index fingertip over
//! it, pinches, releases, repeats.

use gallery_core::{Camera, HandLandmarks, Landmark, ScreenSize, Target, World};
use glam::Vec2;
use rand::prelude::*;

const OPEN_DISTANCE: f32 = 0.12;
const PINCHED_DISTANCE: f32 = 0.02;
const AIM_SPEED_PER_SEC: f32 = 1.6; // normalized camera units
const ON_TARGET_RADIUS: f32 = 0.004;
const HOLD_PINCH_SEC: f32 = 0.15;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Seeking,
    Pinching { held_sec: f32 },
}

pub struct ScriptedHand {
    rng: StdRng,
    camera: Camera,
    screen: ScreenSize,
    /// Figure centers in world space, indexed like the engine's targets.
    centers: Vec<glam::Vec3>,
    index_tip: Vec2,
    goal: Option<usize>,
    phase: Phase,
    /// Fraction of frames the detector loses the hand.
    dropout: f64,
}

impl ScriptedHand {
    pub fn new(world: &World, camera: Camera, screen: ScreenSize, seed: u64) -> Self {
        let centers = world
            .figures
            .iter()
            .map(|f| f.hit_box.pivot + f.hit_box.center_offset)
            .collect();
        Self {
            rng: StdRng::seed_from_u64(seed),
            camera,
            screen,
            centers,
            index_tip: Vec2::new(0.5, 0.5),
            goal: None,
            phase: Phase::Seeking,
            dropout: 0.05,
        }
    }

    /// Camera-space point (mirrored) whose aim lands on a world position.
    fn camera_norm_for(&self, world_pos: glam::Vec3) -> Vec2 {
        let clip =
            self.camera.projection_matrix() * self.camera.view_matrix() * world_pos.extend(1.0);
        let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
        let sx = (ndc.x + 1.0) * 0.5;
        let sy = (1.0 - ndc.y) * 0.5;
        Vec2::new(1.0 - sx, sy)
    }

    /// Produce the next detector frame; `None` simulates lost tracking.
    pub fn next_frame(&mut self, dt_sec: f32, targets: &[Target]) -> Option<HandLandmarks> {
        if self.goal.map_or(true, |g| !targets[g].is_standing()) {
            let standing: Vec<usize> = targets
                .iter()
                .enumerate()
                .filter(|(_, t)| t.is_standing())
                .map(|(i, _)| i)
                .collect();
            self.goal = standing.choose(&mut self.rng).copied();
            self.phase = Phase::Seeking;
            if let Some(g) = self.goal {
                log::debug!("[bot] next goal: target {}", targets[g].id.0);
            }
        }

        let mut pinch = OPEN_DISTANCE;
        if let Some(g) = self.goal {
            let want = self.camera_norm_for(self.centers[g]);
            let to_goal = want - self.index_tip;
            let step = AIM_SPEED_PER_SEC * dt_sec;
            if to_goal.length() <= step.max(ON_TARGET_RADIUS) {
                self.index_tip = want;
            } else {
                self.index_tip += to_goal.normalize() * step;
            }
            self.phase = match self.phase {
                Phase::Seeking if self.index_tip.distance(want) <= ON_TARGET_RADIUS => {
                    Phase::Pinching { held_sec: 0.0 }
                }
                Phase::Pinching { held_sec } if held_sec >= HOLD_PINCH_SEC => Phase::Seeking,
                Phase::Pinching { held_sec } => Phase::Pinching {
                    held_sec: held_sec + dt_sec,
                },
                p => p,
            };
            if matches!(self.phase, Phase::Pinching { .. }) {
                pinch = PINCHED_DISTANCE;
            }
        }

        if self.rng.gen_bool(self.dropout) {
            return None;
        }
        let jitter = Vec2::new(
            self.rng.gen_range(-0.001..0.001),
            self.rng.gen_range(-0.001..0.001),
        );
        let index = self.index_tip + jitter;
        Some(HandLandmarks::from_tips(
            Landmark::new(index.x, index.y + pinch, 0.0),
            Landmark::new(index.x, index.y, 0.0),
        ))
    }

    pub fn screen(&self) -> ScreenSize {
        self.screen
    }
}
