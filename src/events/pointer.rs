use crate::overlay;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Clicking the heart flashes the next personal phrase.
pub fn wire_canvas_click(canvas: &web::HtmlCanvasElement, document: &web::Document) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        overlay::show_next_phrase(&doc);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
