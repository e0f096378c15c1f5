use crate::constants::*;
use crate::dom;
use crate::labels;
use gallery_core::{Hud, HudDelta, Overlay};
use web_sys as web;

/// Show or hide an overlay; the inline `display` covers pages without a `.hidden` rule.
fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    let Some(el) = dom::html_element(document, element_id) else {
        return;
    };
    _ = el.class_list().toggle_with_force(HIDDEN_CLASS, !visible);
    let style = el.style();
    if visible {
        _ = style.remove_property("display");
    } else {
        _ = style.set_property("display", "none");
    }
}

fn apply_overlay(document: &web::Document, overlay: Overlay) {
    match overlay {
        Overlay::Start => {
            set_visible(document, START_OVERLAY_ID, true);
            set_visible(document, GAME_OVER_OVERLAY_ID, false);
        }
        Overlay::Hidden => {
            set_visible(document, START_OVERLAY_ID, false);
            set_visible(document, GAME_OVER_OVERLAY_ID, false);
        }
        Overlay::GameOver { final_score } => {
            if let Some(el) = document.get_element_by_id(FINAL_SCORE_ID) {
                el.set_text_content(Some(&labels::final_score_label(final_score)));
            }
            set_visible(document, START_OVERLAY_ID, false);
            set_visible(document, GAME_OVER_OVERLAY_ID, true);
        }
    }
}

/// Push the parts of `hud` flagged in `delta` into the DOM.
pub fn apply_hud(document: &web::Document, hud: &Hud, delta: HudDelta) {
    if delta.score {
        if let Some(el) = document.get_element_by_id(SCORE_ID) {
            el.set_text_content(Some(&labels::score_label(hud.score)));
        }
    }
    if delta.timer {
        if let Some(el) = dom::html_element(document, TIMER_BAR_ID) {
            _ = el.set_attribute(
                "style",
                &labels::timer_bar_style(hud.time_fraction, TIMER_URGENT_FRACTION),
            );
        }
    }
    if delta.overlay {
        apply_overlay(document, hud.overlay);
    }
}
