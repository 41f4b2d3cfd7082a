// Tuning constants for the platform-free animation core.

// Starfield
pub const PARTICLE_COUNT: usize = 150;
pub const PARTICLE_COLOR: &str = "rgba(255,255,255,0.9)";
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0; // exclusive
pub const PARTICLE_VISIBLE_PROBABILITY: f64 = 0.7;
pub const PARTICLE_TIMER_MAX: i32 = 20; // inclusive
pub const PARTICLE_PERIOD_MIN: i32 = 40;
pub const PARTICLE_PERIOD_MAX: i32 = 90; // inclusive

// Heart glyph
pub const NAME_BUFFER_LEN: usize = 200;
pub const MASK_FILLED: char = '*';

// Reveal
pub const REVEAL_TICK_MS: u64 = 60;
pub const ROW_SEPARATOR: char = '\n';

// Pulse
pub const PHASE_STEP: f64 = 0.05; // radians per frame
pub const FONT_SIZE_DIVISOR: f64 = 30.0;
pub const LINE_HEIGHT_RATIO: f64 = 0.85;
pub const HEART_FONT_FAMILY: &str = "Consolas, monospace";
pub const HEART_DARK_RGB: [u8; 3] = [0x7a, 0x0b, 0x0b];
pub const HEART_BRIGHT_RGB: [u8; 3] = [0xff, 0x3b, 0x3b];

// Canvas layout (CSS pixels)
pub const CANVAS_DEFAULT_WIDTH: f64 = 900.0;
pub const CANVAS_DEFAULT_HEIGHT: f64 = 700.0;
pub const CANVAS_MAX_WIDTH: f64 = 900.0;
pub const CANVAS_MAX_HEIGHT: f64 = 700.0;
pub const CANVAS_MARGIN_X: f64 = 40.0;
pub const CANVAS_MARGIN_Y: f64 = 120.0;

// Comets
pub const COMET_TRAVEL_PX: f32 = 300.0;
pub const COMET_STAGGER_MS: i32 = 1200;
