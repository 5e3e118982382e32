//! Einstieg und Ausstieg des Direct-Select-Modus.

use super::state::{DragState, SelectionState};
use super::DirectSelectMode;
use crate::app::host::{DirectSelectOptions, HostContext};
use crate::core::GeometryKind;

/// Fehler beim Einstieg in den Direct-Select-Modus. Der Modus wird nicht aktiv.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("Direct-Select benötigt eine featureId")]
    MissingFeatureId,
    #[error("Feature '{0}' existiert nicht")]
    FeatureNotFound(String),
    #[error("Direct-Select bearbeitet keine Punkt-Features ('{0}')")]
    UnsupportedGeometry(String),
}

impl DirectSelectMode {
    /// Startet den Modus für das Feature aus `options`.
    ///
    /// Markiert das Feature beim Host als selektiert, übernimmt einen
    /// optionalen Vorselektions-Pfad und schaltet den Doppelklick-Zoom ab.
    pub fn setup(
        host: &mut dyn HostContext,
        options: DirectSelectOptions,
    ) -> Result<Self, SetupError> {
        let feature_id = options.feature_id.ok_or(SetupError::MissingFeatureId)?;
        let feature = host
            .feature(&feature_id)
            .ok_or_else(|| SetupError::FeatureNotFound(feature_id.clone()))?;
        if feature.kind() == GeometryKind::Point {
            return Err(SetupError::UnsupportedGeometry(feature_id));
        }

        let initial = options.coord_path.filter(|path| {
            let exists = feature.geometry.coordinate(path).is_some();
            if !exists {
                log::warn!(
                    "Vorselektierter Pfad {} existiert nicht in Feature '{}', ignoriert",
                    path,
                    feature_id
                );
            }
            exists
        });

        let mode = Self {
            feature_id,
            selection: SelectionState::new(initial),
            drag: DragState::starting_at(options.start_pos),
        };

        host.set_selected_feature(&mode.feature_id);
        mode.sync_selected_coordinates(host);
        host.set_double_click_zoom_enabled(false);
        mode.fire_actionable(host);

        log::info!(
            "Direct-Select gestartet: Feature '{}', {} Vertex(e) vorselektiert",
            mode.feature_id,
            mode.selection.len()
        );
        Ok(mode)
    }

    /// Beendet den Modus: offener Drag wird verworfen, Gesten und
    /// Koordinaten-Hervorhebung werden zurückgesetzt.
    pub fn stop(&mut self, host: &mut dyn HostContext) {
        self.stop_dragging(host);
        host.set_double_click_zoom_enabled(true);
        host.clear_selected_coordinates();
        log::debug!("Direct-Select beendet: Feature '{}'", self.feature_id);
    }
}
