use glam::Vec3;

// Shared gameplay tuning constants used by both web and native frontends.

// Match timing
pub const MATCH_DURATION_SEC: f32 = 30.0;

// Target fall animation
pub const FALL_SPEED_RAD_PER_SEC: f32 = 5.0;
pub const FALL_END_ANGLE_RAD: f32 = -std::f32::consts::FRAC_PI_2; // lying flat, tipped backwards

// Scoring
pub const POINTS_PER_ROW: u32 = 10; // bottom shelf = 1 row, so 10/20/30 for three shelves

// Pinch gesture
pub const PINCH_THRESHOLD: f32 = 0.05; // normalized camera units
pub const FIRE_COOLDOWN_SEC: f32 = 0.5;

// Shelf layout
pub const SHELF_ROWS: usize = 3;
pub const SHELF_COLUMNS: usize = 5;
pub const SHELF_COLUMN_SPACING: f32 = 1.2;
pub const SHELF_ROW_HEIGHT: f32 = 1.4; // vertical distance between shelf planks
pub const SHELF_ROW_SETBACK: f32 = 0.6; // each higher shelf sits this much further back
pub const SHELF_BASE_Y: f32 = -1.6;
pub const SHELF_BASE_Z: f32 = -4.0;
pub const LAYOUT_SEED: u64 = 42;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.5, 6.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, -4.0];
pub const CAMERA_FOVY_DEG: f32 = 50.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Landmark buffers (MediaPipe Hands)
pub const HAND_LANDMARK_COUNT: usize = 21;
pub const LANDMARK_COMPONENTS: usize = 3;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
