use crate::audio::CuePlayer;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::crosshair::Crosshair;
use crate::cues::Cue;
use crate::dom;
use crate::overlay;
use crate::session::Session;
use gallery_core::{GameEvent, Hud};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub audio: Option<Rc<CuePlayer>>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub crosshair: Crosshair,
    pub last_hud: Option<Hud>,
    pub last_instant: Instant,
    pub events: Vec<GameEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let (css_w, css_h) = dom::canvas_css_size(&self.canvas);
        let (hud, aim, fired) = {
            let Ok(mut s) = self.session.try_borrow_mut() else {
                return;
            };
            s.set_viewport(css_w, css_h);
            s.tick(dt_sec);
            // Swap buffers so the session keeps its allocation.
            std::mem::swap(&mut s.events, &mut self.events);
            let fired = std::mem::take(&mut s.fired);
            (s.engine.hud(), s.gestures.aim(), fired)
        };

        for ev in self.events.drain(..) {
            match &ev {
                GameEvent::MatchStarted { .. } | GameEvent::MatchEnded { .. } => {
                    log::info!("[frame] {:?}", ev)
                }
                _ => log::debug!("[frame] {:?}", ev),
            }
            if let (Some(cue), Some(audio)) = (Cue::for_event(&ev), &self.audio) {
                audio.play(cue);
            }
        }

        if fired {
            self.crosshair.flash();
        }
        self.crosshair.update(aim, dt_sec);

        let delta = hud.diff(self.last_hud.as_ref());
        if delta.any() {
            overlay::apply_hud(&self.document, &hud, delta);
            self.last_hud = Some(hud);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
