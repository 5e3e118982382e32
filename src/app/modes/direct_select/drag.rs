//! Drag-Bewegung: Feature verschieben, Vertices verschieben oder skalieren.

use super::DirectSelectMode;
use crate::app::events::PointerEvent;
use crate::app::host::HostContext;
use crate::core::measure::{center_of_mass, farthest_point};
use crate::core::transform::{
    anchor_scale_factors, center_scale_factor, constrain_movement, scale_about_anchor,
    scale_about_center, translate, translate_paths, Bounds,
};
use crate::core::{Feature, ModifyMode, ScalePivot};
use glam::DVec2;

impl DirectSelectMode {
    /// Pointer-Bewegung bei gedrückter Taste.
    ///
    /// Mit Vertex-Selektion wird die Selektion bewegt bzw. das Feature
    /// skaliert, sonst das ganze Feature verschoben. Nach jeder Bewegung
    /// folgt ein Live-Update.
    pub fn on_drag(&mut self, host: &mut dyn HostContext, event: &PointerEvent) {
        if !self.drag.can_drag_move {
            return;
        }
        self.drag.drag_moving = true;

        let last = self.drag.last_pos.unwrap_or(event.lng_lat);
        let delta = event.lng_lat - last;
        if self.selection.is_empty() {
            self.drag_feature(host, delta);
        } else {
            self.drag_vertex(host, event.lng_lat, delta);
        }
        self.fire_live_update(host);

        self.drag.last_pos = Some(event.lng_lat);
    }

    fn drag_feature(&self, host: &mut dyn HostContext, delta: DVec2) {
        let limits = host.options().movement_limits();
        let Some(feature) = host.feature_mut(&self.feature_id) else {
            log::warn!("Feature '{}' beim Drag nicht gefunden", self.feature_id);
            return;
        };
        let groups: Vec<Bounds> = Bounds::of(&feature.geometry.coordinates())
            .into_iter()
            .collect();
        let constrained = constrain_movement(&groups, delta, &limits);
        feature.geometry = translate(&feature.geometry, constrained);
    }

    fn drag_vertex(&self, host: &mut dyn HostContext, pointer: DVec2, delta: DVec2) {
        let options = host.options();
        let defaults = options.edit_defaults();
        let limits = options.movement_limits();
        let min_scale = options.anchor_min_scale;

        let Some(first) = self.selection.first() else {
            return;
        };
        let Some(feature) = host.feature_mut(&self.feature_id) else {
            log::warn!("Feature '{}' beim Drag nicht gefunden", self.feature_id);
            return;
        };
        let Some(vertex) = feature.geometry.coordinate(first) else {
            log::warn!("Selektierter Pfad {} existiert nicht mehr", first);
            return;
        };
        let modify = feature.edit_config(&defaults).modify;
        if modify != ModifyMode::None && feature.pivot.is_none() {
            let pivot = compute_pivot(feature, modify, vertex);
            feature.pivot = pivot;
        }

        match (modify, feature.pivot) {
            (ModifyMode::Center, Some(ScalePivot::Center(center))) => {
                match center_scale_factor(center, vertex, pointer) {
                    Some(factor) => {
                        feature.geometry = scale_about_center(&feature.geometry, center, factor);
                    }
                    None => log::warn!(
                        "Center-Skalierung übersprungen: Vertex {} liegt auf dem Schwerpunkt",
                        first
                    ),
                }
            }
            (ModifyMode::Anchor, Some(ScalePivot::Anchor(anchor))) => {
                let factors = anchor_scale_factors(anchor, vertex, pointer, min_scale);
                feature.geometry = scale_about_anchor(&feature.geometry, anchor, factors);
            }
            _ => {
                let paths = self.selection.to_vec();
                let groups: Vec<Bounds> = paths
                    .iter()
                    .filter_map(|p| feature.geometry.coordinate(p))
                    .filter_map(|c| Bounds::of(&[c]))
                    .collect();
                let constrained = constrain_movement(&groups, delta, &limits);
                feature.geometry = translate_paths(&feature.geometry, &paths, constrained);
            }
        }
    }

    /// Berechnet den Skalierungs-Pivot für die aktuelle Selektion und legt
    /// ihn am Feature ab. Ohne Modify-Modus wird ein alter Pivot entfernt.
    pub(super) fn cache_pivot(&self, host: &mut dyn HostContext) {
        let defaults = host.options().edit_defaults();
        let Some(first) = self.selection.first() else {
            return;
        };
        let Some(feature) = host.feature_mut(&self.feature_id) else {
            return;
        };
        let modify = feature.edit_config(&defaults).modify;
        let pivot = feature
            .geometry
            .coordinate(first)
            .and_then(|vertex| compute_pivot(feature, modify, vertex));
        feature.pivot = pivot;
        if let Some(pivot) = feature.pivot {
            log::debug!("Pivot für Feature '{}': {:?}", feature.id, pivot);
        }
    }
}

/// Schwerpunkt (Center) bzw. entferntester Vertex (Anchor) zum gegriffenen Vertex.
fn compute_pivot(feature: &Feature, modify: ModifyMode, vertex: DVec2) -> Option<ScalePivot> {
    let coords = feature.geometry.coordinates();
    match modify {
        ModifyMode::None => None,
        ModifyMode::Center => center_of_mass(&coords).map(ScalePivot::Center),
        ModifyMode::Anchor => Some(ScalePivot::Anchor(farthest_point(vertex, &coords))),
    }
}
