//! Anzeige-Features und Aktions-Verfügbarkeit.

use super::DirectSelectMode;
use crate::app::host::{ActionableState, HostContext};
use crate::core::{
    active_state, create_supplementary_points, subsample, GeoJsonFeature, OverlayToggle,
    SupplementaryKind, SupplementaryPoint,
};
use serde_json::Value;

impl DirectSelectMode {
    /// Anzeige-Features für ein Feature des Stores.
    ///
    /// Das Basis-Feature kommt immer zuerst, markiert als aktiv oder inaktiv.
    /// Nur das bearbeitete Feature bekommt das Overlay: erst die Midpoints,
    /// dann die (ggf. ausgedünnten) Vertices.
    pub fn display_features(
        &self,
        host: &mut dyn HostContext,
        feature_id: &str,
    ) -> Vec<GeoJsonFeature> {
        let Some(feature) = host.feature(feature_id) else {
            return Vec::new();
        };
        let is_active = feature_id == self.feature_id;

        let mut base = feature.to_geojson();
        base.properties
            .insert("active".into(), Value::from(active_state(is_active)));
        let mut out = vec![base];

        if !is_active {
            self.fire_actionable(host);
            return out;
        }

        let options = host.options();
        let config = feature.edit_config(&options.edit_defaults());
        let draw_midpoints = config.midpoints.is_enabled();
        let draw_vertices = config.vertices.is_enabled();
        if !draw_midpoints && !draw_vertices {
            return out;
        }

        let selected = self.selection.to_vec();
        let points = create_supplementary_points(
            feature,
            &selected,
            draw_midpoints,
            options.lat_rendered_max,
        );
        let (midpoints, vertices): (Vec<SupplementaryPoint>, Vec<SupplementaryPoint>) = points
            .into_iter()
            .partition(|p| p.kind == SupplementaryKind::Midpoint);

        let vertices = match config.vertices {
            OverlayToggle::Disabled => Vec::new(),
            OverlayToggle::Count(n) => subsample(&vertices, n),
            OverlayToggle::Enabled => vertices,
        };

        out.extend(midpoints.iter().map(SupplementaryPoint::to_geojson));
        out.extend(vertices.iter().map(SupplementaryPoint::to_geojson));

        self.fire_actionable(host);
        out
    }

    /// Aktuelle Aktions-Verfügbarkeit: Trash nur mit Vertex-Selektion.
    pub fn actionable_state(&self) -> ActionableState {
        ActionableState {
            trash: !self.selection.is_empty(),
            combine_features: false,
            uncombine_features: false,
        }
    }

    /// Meldet die Aktions-Verfügbarkeit an den Host.
    pub(super) fn fire_actionable(&self, host: &mut dyn HostContext) {
        host.set_actionable_state(self.actionable_state());
    }
}
