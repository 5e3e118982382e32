//! Application State: zentrale Datenhaltung des In-Memory-Hosts.

mod app_state;
mod ui;

pub use app_state::AppState;
pub use ui::UiState;
