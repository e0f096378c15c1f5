/// Front-end tuning and DOM wiring constants.
///
/// Gameplay numbers live in `gallery_core::constants`; this file only holds
/// what the browser shell needs (element ids, cue mix, frame clamps).
// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const START_OVERLAY_ID: &str = "start-overlay";
pub const START_BUTTON_ID: &str = "start-button";
pub const GAME_OVER_OVERLAY_ID: &str = "game-over-overlay";
pub const RESTART_BUTTON_ID: &str = "restart-button";
pub const FINAL_SCORE_ID: &str = "final-score";
pub const SCORE_ID: &str = "score";
pub const TIMER_BAR_ID: &str = "timer-bar";
pub const CROSSHAIR_ID: &str = "crosshair";

// CSS class toggled on the crosshair for a short flash after a fire event
pub const CROSSHAIR_FIRING_CLASS: &str = "firing";
pub const HIDDEN_CLASS: &str = "hidden";
pub const CROSSHAIR_FLASH_SEC: f32 = 0.12;

// Long stalls (tab in background) should not drain the match clock in one frame
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Timer bar turns urgent below this fraction
pub const TIMER_URGENT_FRACTION: f32 = 0.2;

// Audio
pub const MASTER_GAIN: f32 = 0.3;
pub const CUE_ATTACK_SEC: f64 = 0.005;
pub const CUE_SCHEDULE_AHEAD_SEC: f64 = 0.005;
