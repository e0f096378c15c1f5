#![cfg(target_arch = "wasm32")]
use crate::audio::CuePlayer;
use crate::constants::*;
use crate::session::Session;
use gallery_core::ScreenSize;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod bridge;
mod constants;
mod crosshair;
mod cues;
mod dom;
mod events;
mod frame;
mod labels;
mod overlay;
mod session;

pub use bridge::{
    camera_params, figure_layout, is_playing, on_hand_landmarks, start_match, target_rotations,
};

fn wire_start_buttons(
    document: &web::Document,
    session: &Rc<RefCell<Session>>,
    audio: &Option<Rc<CuePlayer>>,
) {
    for id in [START_BUTTON_ID, RESTART_BUTTON_ID] {
        let session = session.clone();
        let audio = audio.clone();
        dom::add_click_listener(document, id, move || {
            // Browsers only unlock audio inside a user gesture.
            if let Some(a) = &audio {
                a.resume();
            }
            if let Ok(mut s) = session.try_borrow_mut() {
                s.start_match();
            }
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gallery-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::refit_canvas_on_resize(&canvas);

    let (css_w, css_h) = dom::canvas_css_size(&canvas);
    let session = Rc::new(RefCell::new(Session::new(ScreenSize::new(
        css_w.max(1.0),
        css_h.max(1.0),
    ))?));
    session::install(session.clone());

    // Audio is a nice-to-have; the match runs silently without it.
    let audio = match CuePlayer::new() {
        Ok(a) => Some(Rc::new(a)),
        Err(e) => {
            log::warn!("[audio] unavailable: {:?}", e);
            None
        }
    };

    wire_start_buttons(&document, &session, &audio);
    events::wire_global_keydown(session.clone(), audio.clone());
    events::wire_canvas_pointerdown(canvas.clone(), session.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        crosshair: crosshair::Crosshair::new(&document),
        session,
        audio,
        document,
        canvas,
        last_hud: None,
        last_instant: Instant::now(),
        events: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
