mod app;
mod audio_manager;
mod icons;
mod player;

pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use player::*;
