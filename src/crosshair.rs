use crate::constants::{CROSSHAIR_FIRING_CLASS, CROSSHAIR_FLASH_SEC, CROSSHAIR_ID};
use crate::dom;
use crate::labels;
use gallery_core::AimPoint;
use web_sys as web;

/// DOM crosshair that follows the fingertip and flashes on fire.
pub struct Crosshair {
    el: Option<web::HtmlElement>,
    shown: bool,
    flash_left_sec: f32,
}

impl Crosshair {
    pub fn new(document: &web::Document) -> Self {
        let el = dom::html_element(document, CROSSHAIR_ID);
        if el.is_none() {
            log::warn!("[dom] missing #{}", CROSSHAIR_ID);
        }
        Self {
            el,
            shown: true,
            flash_left_sec: 0.0,
        }
    }

    pub fn flash(&mut self) {
        self.flash_left_sec = CROSSHAIR_FLASH_SEC;
        if let Some(el) = &self.el {
            _ = el.class_list().add_1(CROSSHAIR_FIRING_CLASS);
        }
    }

    /// Track the aim point; hide when no hand is tracked.
    pub fn update(&mut self, aim: Option<AimPoint>, dt_sec: f32) {
        let Some(el) = &self.el else {
            return;
        };
        let style = el.style();
        match aim {
            Some(a) => {
                _ = style.set_property("transform", &labels::crosshair_transform(a.x, a.y));
                if !self.shown {
                    _ = style.set_property("display", "block");
                    self.shown = true;
                }
            }
            None => {
                if self.shown {
                    _ = style.set_property("display", "none");
                    self.shown = false;
                }
            }
        }
        if self.flash_left_sec > 0.0 {
            self.flash_left_sec -= dt_sec;
            if self.flash_left_sec <= 0.0 {
                _ = el.class_list().remove_1(CROSSHAIR_FIRING_CLASS);
            }
        }
    }
}
