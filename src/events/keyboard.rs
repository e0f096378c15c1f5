use super::keys::{action_for_key, KeyAction};
use crate::audio::CuePlayer;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    session: &Rc<RefCell<Session>>,
    audio: Option<&CuePlayer>,
) {
    if ev.repeat() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    let Ok(mut s) = session.try_borrow_mut() else {
        return;
    };
    match action {
        KeyAction::Fire => {
            let aim = s.fallback_aim();
            let outcome = s.fire_fallback(aim);
            log::debug!("[keys] fire -> {:?}", outcome);
        }
        KeyAction::StartMatch => {
            if !s.engine.is_playing() {
                if let Some(a) = audio {
                    a.resume();
                }
                s.start_match();
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(session: Rc<RefCell<Session>>, audio: Option<Rc<CuePlayer>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session, audio.as_deref());
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
