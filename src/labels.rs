// Text and inline styles written into the HUD. Kept free of web-sys so they
// can be checked on the host.

#[inline]
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

#[inline]
pub fn final_score_label(score: u32) -> String {
    format!("Final score: {}", score)
}

/// Inline style for the countdown bar; `fraction` is clamped to 0..1.
pub fn timer_bar_style(fraction: f32, urgent_below: f32) -> String {
    let f = if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let color = if f < urgent_below { "#ff5a4f" } else { "#4fd1ff" };
    format!("width: {:.1}%; background: {};", f * 100.0, color)
}

/// CSS `transform` that centers the crosshair on an aim point in CSS pixels.
#[inline]
pub fn crosshair_transform(x: f32, y: f32) -> String {
    format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", x, y)
}

/// Backing-store pixels for a CSS length at the given device pixel ratio, never 0.
#[inline]
pub fn backing_store_px(css_len: f32, device_pixel_ratio: f32) -> u32 {
    let px = (css_len * device_pixel_ratio).round();
    if px.is_finite() && px >= 1.0 {
        px as u32
    } else {
        1
    }
}
