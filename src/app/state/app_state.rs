use crate::app::events::ModeEvent;
use crate::app::host::{ActionableState, HostContext, ModeChange, SelectedCoordinate};
use crate::app::CommandLog;
use crate::core::{Feature, FeatureCollection, GeoJsonError};
use crate::shared::EditorOptions;
use indexmap::IndexMap;

use super::UiState;

/// Hauptzustand der Anwendung: In-Memory-Host für den Editier-Modus.
pub struct AppState {
    /// Feature-Store in Einfügereihenfolge
    pub features: IndexMap<String, Feature>,
    /// UI-State (Gesten, Selektion, Aktionen)
    pub ui: UiState,
    /// Vom Modus gemeldete Events in Reihenfolge
    pub events: Vec<ModeEvent>,
    /// Angeforderter, noch nicht ausgeführter Modus-Wechsel
    pub pending_mode: Option<ModeChange>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            features: IndexMap::new(),
            ui: UiState::new(),
            events: Vec::new(),
            pending_mode: None,
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Erstellt einen App-State mit den übergebenen Features.
    pub fn with_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut state = Self::new();
        for feature in features {
            state.features.insert(feature.id.clone(), feature);
        }
        state
    }

    /// Ersetzt den Feature-Store durch eine GeoJSON-FeatureCollection.
    pub fn load_collection(&mut self, collection: FeatureCollection) -> Result<(), GeoJsonError> {
        let mut features = IndexMap::new();
        for gj in collection.features {
            let feature = Feature::try_from(gj)?;
            features.insert(feature.id.clone(), feature);
        }
        log::info!("{} Features geladen", features.len());
        self.features = features;
        Ok(())
    }

    /// Exportiert alle Features als FeatureCollection.
    pub fn to_collection(&self) -> FeatureCollection {
        FeatureCollection::new(self.features.values().map(Feature::to_geojson).collect())
    }

    /// Gibt die Anzahl der Features zurück.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Entnimmt alle bisher gemeldeten Events.
    pub fn take_events(&mut self) -> Vec<ModeEvent> {
        std::mem::take(&mut self.events)
    }

    /// Entnimmt den ausstehenden Modus-Wechsel.
    pub fn take_pending_mode(&mut self) -> Option<ModeChange> {
        self.pending_mode.take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl HostContext for AppState {
    fn options(&self) -> &EditorOptions {
        &self.options
    }

    fn feature(&self, id: &str) -> Option<&Feature> {
        self.features.get(id)
    }

    fn feature_mut(&mut self, id: &str) -> Option<&mut Feature> {
        self.features.get_mut(id)
    }

    fn add_feature(&mut self, feature: Feature) {
        self.features.insert(feature.id.clone(), feature);
    }

    fn delete_features(&mut self, ids: &[String]) {
        for id in ids {
            if self.features.shift_remove(id).is_some() {
                log::info!("Feature '{}' gelöscht", id);
            }
        }
        self.ui.selected_feature_ids.retain(|id| !ids.contains(id));
        self.ui
            .selected_coordinates
            .retain(|c| !ids.contains(&c.feature_id));
    }

    fn feature_changed(&mut self, id: &str) {
        self.ui.changed_feature_ids.insert(id.to_string());
    }

    fn set_selected_feature(&mut self, id: &str) {
        self.ui.selected_feature_ids = vec![id.to_string()];
    }

    fn set_selected_coordinates(&mut self, coordinates: Vec<SelectedCoordinate>) {
        self.ui.selected_coordinates = coordinates;
    }

    fn clear_selected_coordinates(&mut self) {
        self.ui.selected_coordinates.clear();
    }

    fn change_mode(&mut self, change: ModeChange) {
        if let Some(previous) = self.pending_mode.replace(change) {
            log::warn!(
                "Modus-Wechsel nach '{}' durch neueren Wechsel ersetzt",
                previous.mode_name()
            );
        }
    }

    fn set_actionable_state(&mut self, state: ActionableState) {
        self.ui.actionable = state;
    }

    fn fire(&mut self, event: ModeEvent) {
        self.events.push(event);
    }

    fn is_drag_pan_enabled(&self) -> bool {
        self.ui.drag_pan_enabled
    }

    fn set_drag_pan_enabled(&mut self, enabled: bool) {
        self.ui.drag_pan_enabled = enabled;
    }

    fn set_double_click_zoom_enabled(&mut self, enabled: bool) {
        self.ui.double_click_zoom_enabled = enabled;
    }
}
