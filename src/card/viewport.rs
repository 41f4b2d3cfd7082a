use super::constants::*;

/// Canvas dimensions derived from the browser viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasFit {
    /// Layout size in CSS pixels; the core draws in this space.
    pub css_width: f64,
    pub css_height: f64,
    /// Backing store size in device pixels.
    pub backing_width: u32,
    pub backing_height: u32,
    pub dpr: f64,
}

/// Size the canvas to the viewport minus page margins, capped at the
/// maximum card size.
pub fn fit_canvas(inner_width: f64, inner_height: f64, dpr: f64) -> CanvasFit {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let css_width = (inner_width - CANVAS_MARGIN_X).min(CANVAS_MAX_WIDTH).max(1.0);
    let css_height = (inner_height - CANVAS_MARGIN_Y).min(CANVAS_MAX_HEIGHT).max(1.0);
    CanvasFit {
        css_width,
        css_height,
        backing_width: (css_width * dpr).floor() as u32,
        backing_height: (css_height * dpr).floor() as u32,
        dpr,
    }
}
