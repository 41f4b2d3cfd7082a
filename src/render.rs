use crate::card::constants::{CANVAS_DEFAULT_HEIGHT, CANVAS_DEFAULT_WIDTH};
use crate::card::viewport::{fit_canvas, CanvasFit};
use crate::card::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a 2D canvas context. Without a context every draw
/// call is dropped and the rest of the card keeps running.
#[derive(Clone)]
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            log::warn!("[render] 2D context unavailable; drawing disabled");
        }
        Self { canvas, ctx }
    }

    /// Resize the canvas to the current viewport and return the drawing size
    /// in CSS pixels.
    pub fn fit_to_window(&self) -> (f64, f64) {
        let Some(ctx) = &self.ctx else {
            return (CANVAS_DEFAULT_WIDTH, CANVAS_DEFAULT_HEIGHT);
        };
        let Some(fit) = viewport_fit() else {
            return (CANVAS_DEFAULT_WIDTH, CANVAS_DEFAULT_HEIGHT);
        };
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", fit.css_width));
        _ = style.set_property("height", &format!("{}px", fit.css_height));
        self.canvas.set_width(fit.backing_width);
        self.canvas.set_height(fit.backing_height);
        _ = ctx.set_transform(fit.dpr, 0.0, 0.0, fit.dpr, 0.0, 0.0);
        (fit.css_width, fit.css_height)
    }
}

fn viewport_fit() -> Option<CanvasFit> {
    let w = web::window()?;
    let inner_w = w.inner_width().ok()?.as_f64()?;
    let inner_h = w.inner_height().ok()?.as_f64()?;
    Some(fit_canvas(inner_w, inner_h, w.device_pixel_ratio()))
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        if let Some(ctx) = &self.ctx {
            ctx.clear_rect(0.0, 0.0, width, height);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        if let Some(ctx) = &self.ctx {
            ctx.set_fill_style_str(color);
            ctx.fill_rect(x, y, width, height);
        }
    }

    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str) {
        if let Some(ctx) = &self.ctx {
            ctx.save();
            ctx.set_font(font);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.set_fill_style_str(color);
            _ = ctx.fill_text(text, x, y);
            ctx.restore();
        }
    }
}
