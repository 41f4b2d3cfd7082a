use crate::constants::*;
use crate::card::{MessageDeck, OverlaySide};
use crate::dom;
use std::cell::RefCell;
use web_sys as web;

#[derive(Default)]
struct PhraseState {
    deck: MessageDeck,
    side: OverlaySide,
}

thread_local! {
    static PHRASES: RefCell<PhraseState> = RefCell::new(PhraseState::default());
}

/// Replace the phrase deck from the message modal input. Returns false when
/// the input held no phrases, in which case the previous deck stays.
pub fn save_phrases(input: &str) -> bool {
    match MessageDeck::parse(input) {
        Some(deck) => {
            log::info!("[overlay] saved {} phrases", deck.len());
            PHRASES.with(|p| p.borrow_mut().deck = deck);
            true
        }
        None => false,
    }
}

/// Flash the next phrase over the canvas, alternating sides.
pub fn show_next_phrase(document: &web::Document) {
    let Some(el) = document.get_element_by_id(PHRASE_OVERLAY_ID) else {
        return;
    };
    let side = PHRASES.with(|p| {
        let mut p = p.borrow_mut();
        if let Some(phrase) = p.deck.next_phrase() {
            el.set_text_content(Some(phrase));
        }
        let side = p.side;
        p.side = side.flipped();
        side
    });

    let cl = el.class_list();
    _ = cl.remove_2(OverlaySide::Left.class_name(), OverlaySide::Right.class_name());
    _ = cl.add_2(SHOW_CLASS, side.class_name());

    dom::set_timeout(PHRASE_VISIBLE_MS, move || {
        _ = el.class_list().remove_1(SHOW_CLASS);
    });
}

pub fn open_message_modal(document: &web::Document) {
    dom::set_display(document, MESSAGE_MODAL_ID, "flex");
}

pub fn close_message_modal(document: &web::Document) {
    dom::set_display(document, MESSAGE_MODAL_ID, "none");
}

pub fn show_music_modal(document: &web::Document) {
    dom::set_display(document, MUSIC_MODAL_ID, "flex");
}

pub fn close_music_modal(document: &web::Document) {
    dom::set_display(document, MUSIC_MODAL_ID, "none");
}

/// Flip the navigation menu open/closed.
pub fn toggle_menu(document: &web::Document) {
    let Some(menu) = dom::element_by_id::<web::HtmlElement>(document, MENU_ID) else {
        return;
    };
    let Ok(Some(btn)) = document.query_selector(MENU_BUTTON_SELECTOR) else {
        return;
    };
    let style = menu.style();
    let open = style
        .get_property_value("display")
        .map(|d| d == "flex")
        .unwrap_or(false);
    _ = style.set_property("display", if open { "none" } else { "flex" });
    _ = btn.class_list().toggle(ACTIVE_CLASS);
}
