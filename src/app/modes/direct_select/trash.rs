use super::DirectSelectMode;
use crate::app::host::{HostContext, ModeChange};
use crate::core::VertexDeleteStrategy;

impl DirectSelectMode {
    /// Trash-Befehl: selektierte Vertices oder das ganze Feature löschen.
    ///
    /// Alle selektierten Vertices werden in einem Schritt entfernt
    /// (`Geometry::remove_coordinates`). Ist die Geometrie danach ungültig,
    /// wird das Feature gelöscht.
    pub fn on_trash(&mut self, host: &mut dyn HostContext) {
        let defaults = host.options().edit_defaults();
        let Some(strategy) = host
            .feature(&self.feature_id)
            .map(|f| f.edit_config(&defaults).vertex_delete)
        else {
            log::warn!("Trash: Feature '{}' nicht gefunden", self.feature_id);
            return;
        };

        match strategy {
            VertexDeleteStrategy::DeleteFeature => {
                self.delete_feature_and_exit(host);
                return;
            }
            VertexDeleteStrategy::ToDefault => {
                if let Some(feature) = host.feature_mut(&self.feature_id) {
                    feature.clear_edit_overrides();
                }
            }
            VertexDeleteStrategy::Default => {}
        }

        if self.selection.is_empty() {
            self.delete_feature_and_exit(host);
            return;
        }

        let paths = self.selection.to_vec();
        let (removed, valid) = match host.feature_mut(&self.feature_id) {
            Some(feature) => {
                let removed = feature.geometry.remove_coordinates(&paths);
                (removed, feature.geometry.is_valid())
            }
            None => (0, false),
        };
        if removed < paths.len() {
            log::warn!(
                "{} von {} selektierten Vertices existierten nicht mehr",
                paths.len() - removed,
                paths.len()
            );
        }
        log::info!("{} Vertex(e) aus Feature '{}' entfernt", removed, self.feature_id);

        self.fire_update(host);
        self.selection.clear();
        host.clear_selected_coordinates();
        self.fire_actionable(host);

        if !valid {
            log::info!(
                "Feature '{}' nach dem Löschen ungültig, wird entfernt",
                self.feature_id
            );
            self.delete_feature_and_exit(host);
        }
    }

    fn delete_feature_and_exit(&mut self, host: &mut dyn HostContext) {
        host.delete_features(std::slice::from_ref(&self.feature_id));
        host.change_mode(ModeChange::simple_select());
    }
}
