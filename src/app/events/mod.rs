//! AppIntent-, AppCommand- und ModeEvent-Typen für den Intent/Command-Datenfluss.

mod command;
mod intent;
mod mode_event;

pub use command::AppCommand;
pub use intent::{AppIntent, PointerEvent, PointerTarget};
pub use mode_event::{ModeEvent, UpdateAction};
