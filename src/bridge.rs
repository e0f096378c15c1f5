//! JS ↔ Rust entry points.
//!
//! The page's hand tracker and 3D renderer live on the JS side; they push
//! landmarks in and pull target transforms out through these functions.

use crate::session::with_session;
use gallery_core::HandLandmarks;
use wasm_bindgen::prelude::*;

/// Called from the hand-tracking callback with a flat buffer of
/// `num_hands * 21 * 3` floats (x, y, z per landmark).
#[wasm_bindgen]
pub fn on_hand_landmarks(data: &[f32], num_hands: usize) {
    let hand = match HandLandmarks::first_from_flat(data, num_hands) {
        Ok(hand) => hand,
        Err(e) => {
            // Treat malformed detector output as "no hand this frame".
            log::warn!("[bridge] landmarks rejected: {}", e);
            None
        }
    };
    with_session(|s| s.on_hand(hand.as_ref()));
}

#[wasm_bindgen]
pub fn start_match() {
    with_session(|s| s.start_match());
}

#[wasm_bindgen]
pub fn is_playing() -> bool {
    with_session(|s| s.engine.is_playing()).unwrap_or(false)
}

/// Pivot X-rotation per target, in target-id order.
#[wasm_bindgen]
pub fn target_rotations() -> Vec<f32> {
    with_session(|s| s.engine.rotations().collect()).unwrap_or_default()
}

/// Static scene description, 8 floats per figure:
/// `id, kind, pivot.x, pivot.y, pivot.z, half.x, half.y, half.z`.
#[wasm_bindgen]
pub fn figure_layout() -> Vec<f32> {
    with_session(|s| {
        s.figures
            .iter()
            .flat_map(|f| {
                let hb = f.hit_box;
                [
                    f.id.0 as f32,
                    f.kind.code() as f32,
                    hb.pivot.x,
                    hb.pivot.y,
                    hb.pivot.z,
                    hb.half_extents.x,
                    hb.half_extents.y,
                    hb.half_extents.z,
                ]
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Camera the renderer must use so shots land under the crosshair:
/// `eye.xyz, target.xyz, fovy_radians, znear, zfar`.
#[wasm_bindgen]
pub fn camera_params() -> Vec<f32> {
    with_session(|s| {
        let c = &s.caster.camera;
        vec![
            c.eye.x,
            c.eye.y,
            c.eye.z,
            c.target.x,
            c.target.y,
            c.target.z,
            c.fovy_radians,
            c.znear,
            c.zfar,
        ]
    })
    .unwrap_or_default()
}
