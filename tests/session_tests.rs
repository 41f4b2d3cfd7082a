// Host-side tests for the animation session driven frame by frame.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod constants {
        include!("../src/card/constants.rs");
    }
    pub mod surface {
        include!("../src/card/surface.rs");
    }
    pub mod heart {
        include!("../src/card/heart.rs");
    }
    pub mod particles {
        include!("../src/card/particles.rs");
    }
    pub mod pulse {
        include!("../src/card/pulse.rs");
    }
    pub mod reveal {
        include!("../src/card/reveal.rs");
    }
    pub mod session {
        include!("../src/card/session.rs");
    }
}

use card::heart::build_pattern;
use card::reveal::RevealState;
use card::session::Session;
use card::surface::{NullSurface, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct FrameRecorder {
    clears: Vec<(f64, f64)>,
    rects: usize,
    text_rows: Vec<String>,
}

impl Surface for FrameRecorder {
    fn clear(&mut self, w: f64, h: f64) {
        self.clears.push((w, h));
    }
    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: &str) {
        self.rects += 1;
    }
    fn fill_text_centered(&mut self, text: &str, _x: f64, _y: f64, _f: &str, _c: &str) {
        self.text_rows.push(text.to_string());
    }
}

fn session() -> Session {
    Session::new(900.0, 700.0, StdRng::seed_from_u64(3))
}

#[test]
fn new_session_is_idle_with_full_starfield() {
    let s = session();
    assert_eq!(s.reveal_state(), RevealState::Idle);
    assert_eq!(s.displayed_text(), "");
    assert_eq!(s.phase(), 0.0);
    assert_eq!(s.particles().len(), 150);
    assert_eq!(s.size(), (900.0, 700.0));
}

#[test]
fn frame_clears_draws_stars_and_advances_phase() {
    let mut s = session();
    let mut rec = FrameRecorder::default();
    s.frame(&mut rec, FRAME);
    assert_eq!(rec.clears, vec![(900.0, 700.0)]);
    assert_eq!(rec.rects, s.particles().iter().filter(|p| p.visible).count());
    assert!(rec.text_rows.is_empty(), "no heart before the first start");
    assert!((s.phase() - 0.05).abs() < 1e-12);
}

#[test]
fn start_reveals_over_frames() {
    let mut s = session();
    assert!(s.start("Ana"));
    assert_eq!(s.reveal_state(), RevealState::Revealing);

    // 16 ms frames: the first tick lands on the fourth frame (64 ms).
    for _ in 0..3 {
        s.frame(&mut NullSurface, FRAME);
    }
    assert_eq!(s.displayed_text(), "");
    s.frame(&mut NullSurface, FRAME);
    assert_eq!(s.displayed_text(), " ");

    let mut frames = 0;
    while s.reveal_state() == RevealState::Revealing {
        s.frame(&mut NullSurface, FRAME);
        frames += 1;
        assert!(frames < 10_000);
    }
    assert_eq!(s.displayed_text(), build_pattern("Ana").join("\n"));

    let mut rec = FrameRecorder::default();
    s.frame(&mut rec, FRAME);
    assert_eq!(rec.text_rows, build_pattern("Ana"));
}

#[test]
fn empty_start_changes_nothing() {
    let mut s = session();
    assert!(!s.start("  "));
    assert_eq!(s.reveal_state(), RevealState::Idle);
    assert_eq!(s.displayed_text(), "");
}

#[test]
fn reset_clears_heart_phase_and_reseeds_stars() {
    let mut s = session();
    s.start("Ana");
    for _ in 0..100 {
        s.frame(&mut NullSurface, FRAME);
    }
    assert!(!s.displayed_text().is_empty());
    let before = s.particles().to_vec();

    s.reset();
    assert_eq!(s.reveal_state(), RevealState::Idle);
    assert_eq!(s.displayed_text(), "");
    assert_eq!(s.phase(), 0.0);
    assert_eq!(s.particles().len(), 150);
    assert_ne!(s.particles(), &before[..]);

    // Nothing keeps revealing after a reset.
    for _ in 0..50 {
        s.frame(&mut NullSurface, FRAME);
    }
    assert_eq!(s.displayed_text(), "");
}

#[test]
fn resize_regenerates_stars_inside_new_bounds() {
    let mut s = session();
    s.start("Ana");
    for _ in 0..20 {
        s.frame(&mut NullSurface, FRAME);
    }
    let text = s.displayed_text().to_string();
    let phase = s.phase();

    s.resize(320.0, 240.0);
    assert_eq!(s.size(), (320.0, 240.0));
    assert_eq!(s.particles().len(), 150);
    assert!(s
        .particles()
        .iter()
        .all(|p| p.position.x < 320.0 && p.position.y < 240.0));
    assert_eq!(s.displayed_text(), text);
    assert_eq!(s.phase(), phase);
    assert_eq!(s.reveal_state(), RevealState::Revealing);

    let mut rec = FrameRecorder::default();
    s.frame(&mut rec, FRAME);
    assert_eq!(rec.clears, vec![(320.0, 240.0)]);
}

#[test]
fn resize_to_same_size_keeps_stars() {
    let mut s = session();
    let before = s.particles().to_vec();
    s.resize(900.0, 700.0);
    assert_eq!(s.particles(), &before[..]);
}

#[test]
fn second_start_mid_reveal_restarts_cleanly() {
    let mut s = session();
    s.start("Ana");
    for _ in 0..40 {
        s.frame(&mut NullSurface, FRAME);
    }
    s.start("Bo");
    assert_eq!(s.displayed_text(), "");
    while s.reveal_state() == RevealState::Revealing {
        s.frame(&mut NullSurface, FRAME);
    }
    assert_eq!(s.displayed_text(), build_pattern("Bo").join("\n"));
}
