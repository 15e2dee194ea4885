//! Playback state machine, independent of the UI.
//! The controller owns the session; the media element is reached only through [MediaWidget].

mod controller;
mod session;
mod sync;
mod transport;
mod widget;

pub use controller::*;
pub use session::*;
pub use sync::*;
pub use transport::*;
pub use widget::*;
