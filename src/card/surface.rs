// Drawing seam between the animation core and whatever paints pixels.
//
// Coordinates are CSS pixels with the origin in the top-left corner. The
// browser implementation wraps a 2D canvas context and silently drops every
// call when no context could be acquired.

pub trait Surface {
    /// Clear the rectangle `(0, 0, width, height)`.
    fn clear(&mut self, width: f64, height: f64);

    /// Fill an axis-aligned rectangle with a CSS colour.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Draw one line of text centred horizontally and vertically on `(x, y)`.
    fn fill_text_centered(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str);
}

/// Surface that draws nothing; used when no rendering context is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _width: f64, _height: f64) {}
    fn fill_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64, _color: &str) {}
    fn fill_text_centered(&mut self, _text: &str, _x: f64, _y: f64, _font: &str, _color: &str) {}
}
