use super::constants::{COMET_STAGGER_MS, COMET_TRAVEL_PX};
use glam::Vec2;
use rand::Rng;

/// Start and end of one comet pass, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CometFlight {
    pub from: Vec2,
    pub to: Vec2,
}

pub fn comet_flight(from: Vec2) -> CometFlight {
    CometFlight {
        from,
        to: from + Vec2::splat(COMET_TRAVEL_PX),
    }
}

/// Random launch point inside a `width` x `height` viewport.
pub fn random_launch<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> CometFlight {
    let x = if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 };
    let y = if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 };
    comet_flight(Vec2::new(x, y))
}

/// Delay before comet `index` launches within one volley.
#[inline]
pub fn launch_delay_ms(index: usize) -> i32 {
    (index as i32).saturating_mul(COMET_STAGGER_MS)
}

/// CSS transform placing a comet at `pos`.
pub fn translate_css(pos: Vec2) -> String {
    format!("translate({}px, {}px)", pos.x, pos.y)
}
