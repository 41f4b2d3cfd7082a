use super::constants::*;
use super::surface::Surface;

/// Oscillation factor in [0, 1] for a phase angle in radians.
#[inline]
pub fn pulse_factor(phase: f64) -> f64 {
    0.5 + 0.5 * phase.sin()
}

#[inline]
pub fn font_size(width: f64, height: f64) -> f64 {
    width.min(height) / FONT_SIZE_DIVISOR
}

#[inline]
fn mix_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = a as f64;
    let b = b as f64;
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// Linear blend between two RGB triples, each channel rounded.
pub fn mix_rgb(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    [
        mix_channel(a[0], b[0], t),
        mix_channel(a[1], b[1], t),
        mix_channel(a[2], b[2], t),
    ]
}

/// Heart colour for a pulse factor: dark red at 0, bright red at 1.
#[inline]
pub fn pulse_color(t: f64) -> [u8; 3] {
    mix_rgb(HEART_DARK_RGB, HEART_BRIGHT_RGB, t)
}

pub fn css_rgb(c: [u8; 3]) -> String {
    format!("rgb({},{},{})", c[0], c[1], c[2])
}

/// Draw the revealed heart text centred on the surface.
///
/// Rows are split on the row separator and stacked with a line height of
/// `LINE_HEIGHT_RATIO * font size`, the block centred vertically. Nothing is
/// drawn for empty text.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    phase: f64,
    width: f64,
    height: f64,
) {
    if text.is_empty() {
        return;
    }
    let size = font_size(width, height);
    let color = css_rgb(pulse_color(pulse_factor(phase)));
    let font = format!("{}px {}", size, HEART_FONT_FAMILY);

    let line_h = size * LINE_HEIGHT_RATIO;
    let rows = text.split(ROW_SEPARATOR).count();
    let cx = width / 2.0;
    let mut y = height / 2.0 - (rows as f64 * line_h) / 2.0;
    for line in text.split(ROW_SEPARATOR) {
        surface.fill_text_centered(line, cx, y, &font, &color);
        y += line_h;
    }
}
