mod buttons;
mod pointer;

pub use buttons::{wire_enter_button, wire_reset_button, wire_start_button};
pub use pointer::wire_canvas_click;
