use crate::audio;
use crate::constants::*;
use crate::card::Session;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// "Enter" hides the welcome block, shows the heart section and starts the
/// background music.
pub fn wire_enter_button(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, ENTER_BUTTON_ID, move || {
        dom::set_display(&doc, WELCOME_ID, "none");
        dom::set_display(&doc, ENTER_BUTTON_ID, "none");
        if let Some(section) = doc.get_element_by_id(HEART_SECTION_ID) {
            _ = section.class_list().remove_1(HIDDEN_CLASS);
        }
        if let Some(music) = audio::music_element(&doc) {
            audio::start_background(&music);
        }
    });
}

pub fn wire_start_button(document: &web::Document, session: Rc<RefCell<Session>>) {
    let doc = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        let name = dom::input_value(&doc, NAME_INPUT_ID).unwrap_or_default();
        if !session.borrow_mut().start(&name) {
            log::info!("[start] empty name ignored");
        }
    });
}

pub fn wire_reset_button(document: &web::Document, session: Rc<RefCell<Session>>) {
    let doc = document.clone();
    dom::add_click_listener(document, RESET_BUTTON_ID, move || {
        session.borrow_mut().reset();
        if let Some(music) = audio::music_element(&doc) {
            audio::rewind(&music);
        }
    });
}
