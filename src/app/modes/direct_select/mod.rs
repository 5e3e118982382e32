//! Direct-Select-Modus: Vertices eines einzelnen Features selektieren,
//! verschieben, skalieren, einfügen und löschen.
//!
//! Aufgeteilt in:
//! - `state`: Selektion und Drag-Buchhaltung
//! - `lifecycle`: Einstieg/Ausstieg
//! - `pointer`: Pointer-Down/Up/Move/Out, Klick, Tap, Abbruch
//! - `drag`: Drag-Bewegung und Pivot-Berechnung
//! - `trash`: Lösch-Strategien
//! - `display`: Anzeige-Features und Aktions-Verfügbarkeit

mod display;
mod drag;
mod lifecycle;
mod pointer;
mod state;
mod trash;

pub use lifecycle::SetupError;
pub use state::{DragState, EditPhase, SelectionState};

use crate::app::events::ModeEvent;
use crate::app::host::{HostContext, SelectedCoordinate};
use crate::core::{CoordPath, Feature};

/// Name des Modus (Host-Konvention).
pub const MODE_NAME: &str = "direct_select";

/// Laufender Direct-Select-Modus für genau ein Feature.
#[derive(Debug, Clone)]
pub struct DirectSelectMode {
    pub(crate) feature_id: String,
    pub(crate) selection: SelectionState,
    pub(crate) drag: DragState,
}

impl DirectSelectMode {
    /// ID des bearbeiteten Features.
    pub fn feature_id(&self) -> &str {
        &self.feature_id
    }

    /// Aktuelle Koordinaten-Selektion.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Aktueller Drag-Zustand.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Aktuelle Phase der Interaktion.
    pub fn phase(&self) -> EditPhase {
        if self.drag.can_drag_move {
            EditPhase::Dragging
        } else if self.selection.is_empty() {
            EditPhase::Idle
        } else {
            EditPhase::VertexSelected
        }
    }

    fn selected_coordinates(&self) -> Vec<SelectedCoordinate> {
        self.selection
            .iter()
            .map(|path| SelectedCoordinate {
                feature_id: self.feature_id.clone(),
                coord_path: path.clone(),
            })
            .collect()
    }

    /// Überträgt die Selektion an den Host (Hervorhebung).
    fn sync_selected_coordinates(&self, host: &mut dyn HostContext) {
        host.set_selected_coordinates(self.selected_coordinates());
    }

    fn exported_feature(&self, host: &dyn HostContext) -> Vec<crate::core::GeoJsonFeature> {
        host.feature(&self.feature_id)
            .map(Feature::to_geojson)
            .into_iter()
            .collect()
    }

    /// Meldet eine abgeschlossene Änderung.
    fn fire_update(&self, host: &mut dyn HostContext) {
        let features = self.exported_feature(host);
        host.fire(ModeEvent::update(features));
    }

    /// Meldet einen Drag-Zwischenstand.
    fn fire_live_update(&self, host: &mut dyn HostContext) {
        let features = self.exported_feature(host);
        host.fire(ModeEvent::live_update(features));
    }

    /// Pfad existiert in der aktuellen Geometrie?
    fn path_exists(&self, host: &dyn HostContext, path: &CoordPath) -> bool {
        host.feature(&self.feature_id)
            .and_then(|f| f.geometry.coordinate(path))
            .is_some()
    }
}
