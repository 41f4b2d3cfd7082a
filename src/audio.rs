use crate::constants::{MUSIC_ID, MUSIC_VOLUME};
use crate::dom;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
pub fn music_element(document: &web::Document) -> Option<web::HtmlAudioElement> {
    dom::element_by_id::<web::HtmlAudioElement>(document, MUSIC_ID)
}

/// Start playback. Autoplay and decode rejections are logged and swallowed.
pub fn play(media: &web::HtmlMediaElement) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] playback rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[audio] play() failed: {:?}", e),
    }
}

/// Background music on entering the card.
pub fn start_background(media: &web::HtmlMediaElement) {
    media.set_volume(MUSIC_VOLUME);
    play(media);
}

pub fn rewind(media: &web::HtmlMediaElement) {
    media.set_current_time(0.0);
}

/// Switch to `src`, loop it and start playing.
pub fn select_track(media: &web::HtmlMediaElement, src: &str) {
    media.set_src(src);
    media.set_loop(true);
    play(media);
    log::info!("[audio] track selected: {}", src);
}
