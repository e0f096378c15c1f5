//! Pinch-to-shoot gesture interpretation.
//!
//! Two inputs arrive on independent cadences: the render tick (which only
//! decays the fire cooldown) and the landmark callback (which moves the aim
//! point and evaluates the pinch). Debounce is twofold: `is_pinching` latches
//! for the whole physical pinch, and the cooldown bounds the re-fire rate
//! regardless of frame rate.

use crate::config::GestureConfig;
use crate::landmarks::HandLandmarks;
use glam::Vec2;

/// Viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Aim position in screen pixels, already mirrored to match the selfie view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimPoint {
    pub x: f32,
    pub y: f32,
}

impl AimPoint {
    /// Map a normalized camera-space point to mirrored screen pixels.
    #[inline]
    pub fn from_normalized(norm: Vec2, screen: ScreenSize) -> Self {
        Self {
            x: (1.0 - norm.x) * screen.width,
            y: norm.y * screen.height,
        }
    }

    /// Convert to normalized device coordinates (-1..1, y up) for ray casting.
    #[inline]
    pub fn to_ndc(self, screen: ScreenSize) -> Vec2 {
        let w = screen.width.max(1.0);
        let h = screen.height.max(1.0);
        Vec2::new((self.x / w) * 2.0 - 1.0, 1.0 - (self.y / h) * 2.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    pub is_pinching: bool,
    pub cooldown_sec: f32,
}

/// Result of one landmark frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureFrame {
    /// `None` when no hand is tracked; the crosshair should be hidden.
    pub aim: Option<AimPoint>,
    /// Set on the single frame a pinch engages and the cooldown allows it.
    pub fire: Option<AimPoint>,
}

#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    pub config: GestureConfig,
    pinch: PinchState,
    aim: Option<AimPoint>,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pinch: PinchState::default(),
            aim: None,
        }
    }

    pub fn pinch_state(&self) -> PinchState {
        self.pinch
    }

    /// Latest aim point, or `None` while no hand is tracked.
    pub fn aim(&self) -> Option<AimPoint> {
        self.aim
    }

    /// Decay the fire cooldown by the elapsed render-tick time.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.pinch.cooldown_sec > 0.0 {
            self.pinch.cooldown_sec = (self.pinch.cooldown_sec - dt_sec).max(0.0);
        }
    }

    /// Evaluate one landmark frame for at most one hand.
    pub fn observe(&mut self, hand: Option<&HandLandmarks>, screen: ScreenSize) -> GestureFrame {
        let Some(hand) = hand else {
            // Lost tracking: hide the aim but keep the latch and cooldown as they are.
            self.aim = None;
            return GestureFrame::default();
        };

        let aim = AimPoint::from_normalized(hand.index_tip().xy(), screen);
        self.aim = Some(aim);

        let distance = hand.pinch_distance();
        let mut fire = None;
        if distance < self.config.pinch_threshold {
            if !self.pinch.is_pinching && self.pinch.cooldown_sec <= 0.0 {
                self.pinch.is_pinching = true;
                self.pinch.cooldown_sec = self.config.cooldown_sec;
                log::debug!(
                    "[gesture] fire at ({:.0},{:.0}) dist={:.3}",
                    aim.x,
                    aim.y,
                    distance
                );
                fire = Some(aim);
            }
        } else {
            self.pinch.is_pinching = false;
        }

        GestureFrame {
            aim: Some(aim),
            fire,
        }
    }

    /// Claim a shot from a non-pinch trigger (keyboard, pointer).
    ///
    /// Shares the pinch cooldown, so no input path fires faster than one shot
    /// per `cooldown_sec`. Leaves the pinch latch alone.
    pub fn trigger(&mut self) -> bool {
        if self.pinch.cooldown_sec > 0.0 {
            return false;
        }
        self.pinch.cooldown_sec = self.config.cooldown_sec;
        true
    }

    /// Decay then observe, for callers that drive both from one loop.
    pub fn update(
        &mut self,
        hand: Option<&HandLandmarks>,
        dt_sec: f32,
        screen: ScreenSize,
    ) -> GestureFrame {
        self.tick(dt_sec);
        self.observe(hand, screen)
    }
}
