use crate::session::Session;
use gallery_core::AimPoint;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> AimPoint {
    let rect = canvas.get_bounding_client_rect();
    AimPoint {
        x: ev.client_x() as f32 - rect.left() as f32,
        y: ev.client_y() as f32 - rect.top() as f32,
    }
}

/// Mouse/touch fallback: tapping the canvas fires where it was tapped.
pub fn wire_canvas_pointerdown(canvas: web::HtmlCanvasElement, session: Rc<RefCell<Session>>) {
    let canvas_for_listener = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let aim = pointer_canvas_css(&ev, &canvas);
        if let Ok(mut s) = session.try_borrow_mut() {
            let outcome = s.fire_fallback(aim);
            log::debug!("[pointer] fire at ({:.0},{:.0}) -> {:?}", aim.x, aim.y, outcome);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
