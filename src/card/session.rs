use super::constants::PHASE_STEP;
use super::particles::{FieldParams, Particle, ParticleField};
use super::pulse;
use super::reveal::{RevealScheduler, RevealState};
use super::surface::Surface;
use rand::rngs::StdRng;
use std::time::Duration;

/// All mutable state of one greeting card: starfield, heart reveal and the
/// pulse phase. Built once per page load and driven from the frame loop.
pub struct Session {
    field: ParticleField,
    reveal: RevealScheduler,
    phase: f64,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl Session {
    pub fn new(width: f64, height: f64, mut rng: StdRng) -> Self {
        let field = ParticleField::new(FieldParams::default(), width as f32, height as f32, &mut rng);
        Self {
            field,
            reveal: RevealScheduler::default(),
            phase: 0.0,
            width,
            height,
            rng,
        }
    }

    /// Start revealing the heart for `name`; any reveal in flight is dropped.
    pub fn start(&mut self, name: &str) -> bool {
        let started = self.reveal.start(name);
        if started {
            log::info!("[session] reveal started ({} ticks)", self.reveal.total_ticks());
        }
        started
    }

    /// Clear the heart, rewind the pulse and scatter a new starfield.
    pub fn reset(&mut self) {
        self.reveal.reset();
        self.phase = 0.0;
        self.field
            .reinitialize(self.width as f32, self.height as f32, &mut self.rng);
        log::info!("[session] reset");
    }

    /// Adopt new canvas bounds. Particles are regenerated so none are left
    /// outside the visible area; the heart and phase carry on.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.field.reinitialize(width as f32, height as f32, &mut self.rng);
    }

    /// Render one display frame. `dt` is the wall time since the last frame
    /// and drives the reveal timer.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, dt: Duration) {
        surface.clear(self.width, self.height);
        self.field.advance_and_render(surface);
        self.reveal.advance(dt);

        self.phase += PHASE_STEP;
        pulse::render_frame(
            surface,
            self.reveal.displayed_text(),
            self.phase,
            self.width,
            self.height,
        );
    }

    pub fn displayed_text(&self) -> &str {
        self.reveal.displayed_text()
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal.state()
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
