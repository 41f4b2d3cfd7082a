// Host-side tests for the page helpers: viewport fitting, phrase deck, comets.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod constants {
        include!("../src/card/constants.rs");
    }
    pub mod viewport {
        include!("../src/card/viewport.rs");
    }
    pub mod messages {
        include!("../src/card/messages.rs");
    }
    pub mod comets {
        include!("../src/card/comets.rs");
    }
}

use card::comets::*;
use card::messages::*;
use card::viewport::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn large_window_caps_at_card_size() {
    let fit = fit_canvas(1920.0, 1080.0, 2.0);
    assert_eq!((fit.css_width, fit.css_height), (900.0, 700.0));
    assert_eq!((fit.backing_width, fit.backing_height), (1800, 1400));
    assert_eq!(fit.dpr, 2.0);
}

#[test]
fn small_window_subtracts_margins() {
    let fit = fit_canvas(400.0, 600.0, 1.5);
    assert_eq!((fit.css_width, fit.css_height), (360.0, 480.0));
    assert_eq!((fit.backing_width, fit.backing_height), (540, 720));
}

#[test]
fn tiny_window_and_bad_dpr_are_clamped() {
    let fit = fit_canvas(10.0, 50.0, 0.0);
    assert_eq!((fit.css_width, fit.css_height), (1.0, 1.0));
    assert_eq!(fit.dpr, 1.0);
    assert_eq!(fit_canvas(500.0, 500.0, f64::NAN).dpr, 1.0);
}

#[test]
fn fractional_backing_size_floors() {
    let fit = fit_canvas(341.0, 421.0, 1.25);
    assert_eq!((fit.css_width, fit.css_height), (301.0, 301.0));
    assert_eq!(fit.backing_width, 376);
}

#[test]
fn deck_parses_and_trims_phrases() {
    let deck = MessageDeck::parse(" te quiero ,  , mucho,,siempre ").unwrap();
    assert_eq!(deck.len(), 3);
    assert!(MessageDeck::parse("").is_none());
    assert!(MessageDeck::parse(" , ,, ").is_none());
}

#[test]
fn deck_cycles_through_phrases() {
    let mut deck = MessageDeck::parse("a, b, c").unwrap();
    let seen: Vec<String> = (0..7)
        .map(|_| deck.next_phrase().unwrap().to_string())
        .collect();
    assert_eq!(seen, ["a", "b", "c", "a", "b", "c", "a"]);
}

#[test]
fn empty_deck_has_no_phrase() {
    let mut deck = MessageDeck::default();
    assert!(deck.is_empty());
    assert_eq!(deck.next_phrase(), None);
}

#[test]
fn overlay_side_alternates() {
    let s = OverlaySide::default();
    assert_eq!(s.class_name(), "left");
    assert_eq!(s.flipped().class_name(), "right");
    assert_eq!(s.flipped().flipped(), s);
}

#[test]
fn comet_travels_down_and_right() {
    let f = comet_flight(Vec2::new(10.0, 20.0));
    assert_eq!(f.to, Vec2::new(310.0, 320.0));
    assert_eq!(translate_css(f.from), "translate(10px, 20px)");
}

#[test]
fn random_launch_stays_in_viewport() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..500 {
        let f = random_launch(&mut rng, 1280.0, 720.0);
        assert!(f.from.x >= 0.0 && f.from.x < 1280.0);
        assert!(f.from.y >= 0.0 && f.from.y < 720.0);
    }
    let f = random_launch(&mut rng, 0.0, 0.0);
    assert_eq!(f.from, Vec2::ZERO);
}

#[test]
fn comets_launch_staggered() {
    assert_eq!(launch_delay_ms(0), 0);
    assert_eq!(launch_delay_ms(1), 1200);
    assert_eq!(launch_delay_ms(3), 3600);
}
