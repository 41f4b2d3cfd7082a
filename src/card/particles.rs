use super::constants::*;
use super::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Generation ranges for the starfield.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub visible_probability: f64,
    pub timer_max: i32,
    pub period_min: i32,
    pub period_max: i32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            visible_probability: PARTICLE_VISIBLE_PROBABILITY,
            timer_max: PARTICLE_TIMER_MAX,
            period_min: PARTICLE_PERIOD_MIN,
            period_max: PARTICLE_PERIOD_MAX,
        }
    }
}

/// A single twinkling star.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub visible: bool,
    pub timer: i32,
    pub period: i32,
}

impl Particle {
    /// Count down one frame; flips visibility and re-arms when the timer runs out.
    #[inline]
    pub fn step(&mut self) {
        self.timer -= 1;
        if self.timer <= 0 {
            self.visible = !self.visible;
            self.timer = self.period;
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    params: FieldParams,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: FieldParams, width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(params.count),
            params,
            bounds: Vec2::ZERO,
        };
        field.reinitialize(width, height, rng);
        field
    }

    /// Throw away every particle and scatter a fresh set over the given bounds.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let p = &self.params;
        let bounds = self.bounds;
        self.particles.clear();
        self.particles.extend((0..p.count).map(|_| Particle {
            position: Vec2::new(uniform(rng, bounds.x), uniform(rng, bounds.y)),
            size: rng.gen_range(p.size_min..p.size_max),
            visible: rng.gen_bool(p.visible_probability),
            timer: rng.gen_range(0..=p.timer_max),
            period: rng.gen_range(p.period_min..=p.period_max),
        }));
    }

    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.step();
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in self.particles.iter().filter(|p| p.visible) {
            let size = p.size as f64;
            surface.fill_rect(
                p.position.x as f64,
                p.position.y as f64,
                size,
                size,
                PARTICLE_COLOR,
            );
        }
    }

    pub fn advance_and_render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.advance();
        self.render(surface);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

// Uniform sample in [0, max); a degenerate axis pins everything to 0.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
