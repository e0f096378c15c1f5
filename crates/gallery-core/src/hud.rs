//! Presentation snapshot derived from match state.
//!
//! Frontends compare consecutive snapshots and only touch the UI for fields
//! that changed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Start,
    Hidden,
    GameOver { final_score: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hud {
    pub score: u32,
    /// Remaining time in 0..1, for the progress bar.
    pub time_fraction: f32,
    pub overlay: Overlay,
}

/// Which parts of the HUD differ between two snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HudDelta {
    pub score: bool,
    pub timer: bool,
    pub overlay: bool,
}

impl HudDelta {
    pub fn any(&self) -> bool {
        self.score || self.timer || self.overlay
    }
}

impl Hud {
    /// Timer changes smaller than this are not worth a DOM write.
    pub const TIMER_EPSILON: f32 = 1e-3;

    pub fn diff(&self, previous: Option<&Hud>) -> HudDelta {
        match previous {
            None => HudDelta {
                score: true,
                timer: true,
                overlay: true,
            },
            Some(prev) => HudDelta {
                score: prev.score != self.score,
                timer: (prev.time_fraction - self.time_fraction).abs() >= Self::TIMER_EPSILON
                    || (self.time_fraction == 0.0) != (prev.time_fraction == 0.0),
                overlay: prev.overlay != self.overlay,
            },
        }
    }
}
