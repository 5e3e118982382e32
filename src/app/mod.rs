//! Application-Layer: Controller, State, Events, Host-Vertrag und Modi.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod host;
mod intent_mapping;
pub mod modes;
/// Application State
///
/// In-Memory-Host: Feature-Store, UI-Flags und gemeldete Events.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, ModeEvent, PointerEvent, PointerTarget};
pub use host::{ActionableState, DirectSelectOptions, HostContext, ModeChange, SelectedCoordinate};
pub use modes::{ActiveMode, DirectSelectMode, EditPhase, SetupError};
pub use state::{AppState, UiState};
