/// Page wiring constants: element ids, selectors and DOM timings.
///
/// Animation tuning lives in `card::constants`; this file only knows about
/// the HTML page the card is mounted in.
// Element ids
pub const CANVAS_ID: &str = "stage";
pub const ENTER_BUTTON_ID: &str = "enterBtn";
pub const WELCOME_ID: &str = "welcome";
pub const HEART_SECTION_ID: &str = "heartSection";
pub const NAME_INPUT_ID: &str = "nameInput";
pub const START_BUTTON_ID: &str = "startBtn";
pub const RESET_BUTTON_ID: &str = "resetBtn";
pub const MUSIC_ID: &str = "bgMusic";
pub const MENU_ID: &str = "menu";
pub const MESSAGE_MODAL_ID: &str = "mensajeModal";
pub const MESSAGE_INPUT_ID: &str = "mensajeInput";
pub const PHRASE_OVERLAY_ID: &str = "fraseOverlay";
pub const MUSIC_MODAL_ID: &str = "musicaModal";

// Selectors and classes
pub const MENU_BUTTON_SELECTOR: &str = ".menu-btn";
pub const COMET_SELECTOR: &str = ".cometa";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const SHOW_CLASS: &str = "show";

// Audio
pub const MUSIC_VOLUME: f64 = 0.4;

// Comets
pub const COMET_VOLLEY_MS: i32 = 6000;
pub const COMET_ARM_DELAY_MS: i32 = 50; // lets the "no transition" jump land first
pub const COMET_TRANSITION: &str = "transform 2s linear, opacity 2s linear";

// Phrase overlay
pub const PHRASE_VISIBLE_MS: i32 = 2600;

// User feedback for the message modal
pub const MESSAGE_EMPTY_ALERT: &str = "Write something 💖";
pub const MESSAGE_SAVED_ALERT: &str = "Message saved 💖";
