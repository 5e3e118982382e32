use crate::app::host::{ActionableState, SelectedCoordinate};
use indexmap::IndexSet;

/// Host-seitiger UI-Zustand, den der Editier-Modus über `HostContext` steuert.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Karte per Drag verschiebbar
    pub drag_pan_enabled: bool,
    /// Doppelklick-Zoom aktiv
    pub double_click_zoom_enabled: bool,
    /// Vom Modus selektierte Features
    pub selected_feature_ids: Vec<String>,
    /// Hervorgehobene Koordinaten
    pub selected_coordinates: Vec<SelectedCoordinate>,
    /// Zuletzt gemeldete Aktions-Verfügbarkeit
    pub actionable: ActionableState,
    /// Als geändert markierte Features (Neuzeichnen ausstehend)
    pub changed_feature_ids: IndexSet<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            drag_pan_enabled: true,
            double_click_zoom_enabled: true,
            selected_feature_ids: Vec::new(),
            selected_coordinates: Vec::new(),
            actionable: ActionableState::default(),
            changed_feature_ids: IndexSet::new(),
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
