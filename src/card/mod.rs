pub mod comets;
pub mod constants;
pub mod heart;
pub mod messages;
pub mod particles;
pub mod pulse;
pub mod reveal;
pub mod session;
pub mod surface;
pub mod viewport;

pub use messages::{MessageDeck, OverlaySide};
pub use session::Session;
pub use surface::Surface;
