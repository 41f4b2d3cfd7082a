#![cfg(target_arch = "wasm32")]
use crate::card::surface::NullSurface;
use crate::card::{Session, Surface};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod card;
mod comets;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::*;

fn wire_canvas_resize(surface: render::CanvasSurface, session: Rc<RefCell<Session>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = surface.fit_to_window();
        session.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("name-heart starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // A missing canvas is not fatal: the buttons and timers still run, the
    // card just has nothing to draw on.
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    if canvas.is_none() {
        log::warn!("[init] missing #{}; rendering disabled", CANVAS_ID);
    }
    let canvas_surface = canvas.clone().map(render::CanvasSurface::new);

    let (width, height) = match &canvas_surface {
        Some(s) => s.fit_to_window(),
        None => (
            crate::card::constants::CANVAS_DEFAULT_WIDTH,
            crate::card::constants::CANVAS_DEFAULT_HEIGHT,
        ),
    };
    let session = Rc::new(RefCell::new(Session::new(
        width,
        height,
        StdRng::from_entropy(),
    )));
    log::info!("[init] canvas {:.0}x{:.0}", width, height);

    events::wire_enter_button(&document);
    events::wire_start_button(&document, session.clone());
    events::wire_reset_button(&document, session.clone());
    comets::wire_comets(&document);

    let surface: Box<dyn Surface> = match canvas_surface {
        Some(s) => {
            wire_canvas_resize(s.clone(), session.clone());
            Box::new(s)
        }
        None => Box::new(NullSurface),
    };
    if let Some(c) = &canvas {
        events::wire_canvas_click(c, &document);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        surface,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

// ---------------- Handlers called from inline HTML ----------------

#[wasm_bindgen]
pub fn toggle_menu() {
    if let Some(doc) = dom::window_document() {
        overlay::toggle_menu(&doc);
    }
}

#[wasm_bindgen]
pub fn open_message_modal() {
    if let Some(doc) = dom::window_document() {
        overlay::open_message_modal(&doc);
        overlay::toggle_menu(&doc);
    }
}

#[wasm_bindgen]
pub fn save_messages() {
    let Some(doc) = dom::window_document() else {
        return;
    };
    let input = dom::input_value(&doc, MESSAGE_INPUT_ID).unwrap_or_default();
    if !overlay::save_phrases(&input) {
        dom::alert(MESSAGE_EMPTY_ALERT);
        return;
    }
    dom::alert(MESSAGE_SAVED_ALERT);
    overlay::close_message_modal(&doc);
}

#[wasm_bindgen]
pub fn show_music_selector() {
    if let Some(doc) = dom::window_document() {
        overlay::show_music_modal(&doc);
    }
}

#[wasm_bindgen]
pub fn close_music_modal() {
    if let Some(doc) = dom::window_document() {
        overlay::close_music_modal(&doc);
    }
}

#[wasm_bindgen]
pub fn play_track(src: &str) {
    let Some(doc) = dom::window_document() else {
        return;
    };
    if let Some(music) = audio::music_element(&doc) {
        audio::select_track(&music, src);
    }
    overlay::close_music_modal(&doc);
}
