use crate::labels;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

#[inline]
pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Canvas size in CSS pixels, the space the aim point and crosshair live in.
pub fn canvas_css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Size the canvas backing store to its CSS box at the device pixel ratio.
pub fn fit_canvas_to_display(canvas: &web::HtmlCanvasElement) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio()) as f32;
    let (css_w, css_h) = canvas_css_size(canvas);
    canvas.set_width(labels::backing_store_px(css_w, dpr));
    canvas.set_height(labels::backing_store_px(css_h, dpr));
}

/// Fit the canvas now and again on every window resize.
pub fn refit_canvas_on_resize(canvas: &web::HtmlCanvasElement) {
    fit_canvas_to_display(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || fit_canvas_to_display(&canvas));
    if let Err(e) =
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
    {
        log::warn!("[dom] resize listener: {:?}", e);
    }
    on_resize.forget();
}
