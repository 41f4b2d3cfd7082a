use crate::constants::{COMET_ARM_DELAY_MS, COMET_SELECTOR, COMET_TRANSITION, COMET_VOLLEY_MS};
use crate::card::comets::{launch_delay_ms, random_launch, translate_css};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn comet_elements(document: &web::Document) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(COMET_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

fn launch(comet: web::HtmlElement) {
    let Some(w) = web::window() else {
        return;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    let flight = random_launch(&mut rand::thread_rng(), width, height);

    let style = comet.style();
    _ = style.set_property("transition", "none");
    _ = style.set_property("transform", &translate_css(flight.from));
    _ = style.set_property("opacity", "1");

    dom::set_timeout(COMET_ARM_DELAY_MS, move || {
        let style = comet.style();
        _ = style.set_property("transition", COMET_TRANSITION);
        _ = style.set_property("transform", &translate_css(flight.to));
        _ = style.set_property("opacity", "0");
    });
}

/// Fly every `.cometa` element across the page in staggered volleys.
pub fn wire_comets(document: &web::Document) {
    let comets = comet_elements(document);
    if comets.is_empty() {
        return;
    }
    log::info!("[comets] {} comets wired", comets.len());
    dom::set_interval(COMET_VOLLEY_MS, move || {
        for (i, comet) in comets.iter().enumerate() {
            let comet = comet.clone();
            dom::set_timeout(launch_delay_ms(i), move || launch(comet));
        }
    });
}
