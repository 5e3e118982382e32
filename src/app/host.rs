//! Vertrag zwischen Editier-Modus und Host-Runtime.
//!
//! Der Modus besitzt nur seinen eigenen Selektions- und Drag-Zustand. Alles
//! andere (Feature-Store, Map-Gesten, Event-Ausgabe, Modus-Wechsel) läuft
//! über `HostContext`.

use super::events::ModeEvent;
use crate::core::{CoordPath, Feature};
use crate::shared::EditorOptions;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Welche Aktionen der Host aktuell anbieten darf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionableState {
    pub trash: bool,
    pub combine_features: bool,
    pub uncombine_features: bool,
}

/// Eine für die Host-Hervorhebung selektierte Koordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCoordinate {
    pub feature_id: String,
    pub coord_path: CoordPath,
}

/// Einstiegs-Optionen des Direct-Select-Modus.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectSelectOptions {
    /// Pflichtfeld; `None` bricht den Modus-Einstieg ab
    #[serde(default)]
    pub feature_id: Option<String>,
    /// Vorselektierter Koordinaten-Pfad
    #[serde(default)]
    pub coord_path: Option<CoordPath>,
    /// Letzte Pointer-Position beim Einstieg
    #[serde(default)]
    pub start_pos: Option<DVec2>,
}

impl DirectSelectOptions {
    /// Optionen für ein Feature ohne Vorselektion.
    pub fn for_feature(feature_id: impl Into<String>) -> Self {
        Self {
            feature_id: Some(feature_id.into()),
            ..Self::default()
        }
    }
}

/// Angeforderter Modus-Wechsel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ModeChange {
    /// Zurück in die Standard-Selektion, optional mit selektierten Features
    SimpleSelect {
        #[serde(default)]
        feature_ids: Vec<String>,
    },
    /// Direct-Select für ein (anderes) Feature
    DirectSelect(DirectSelectOptions),
}

impl ModeChange {
    /// Standard-Selektion ohne Features.
    pub fn simple_select() -> Self {
        Self::SimpleSelect {
            feature_ids: Vec::new(),
        }
    }

    /// Name des Ziel-Modus (für Logs).
    pub fn mode_name(&self) -> &'static str {
        match self {
            Self::SimpleSelect { .. } => "simple_select",
            Self::DirectSelect(_) => "direct_select",
        }
    }
}

/// Fähigkeiten, die ein Host dem Editier-Modus bereitstellt.
pub trait HostContext {
    /// Aktuelle Editor-Optionen.
    fn options(&self) -> &EditorOptions;

    // ── Feature-Store ───────────────────────────────────────────────
    fn feature(&self, id: &str) -> Option<&Feature>;
    fn feature_mut(&mut self, id: &str) -> Option<&mut Feature>;
    fn add_feature(&mut self, feature: Feature);
    fn delete_features(&mut self, ids: &[String]);
    /// Markiert ein Feature als geändert (Host zeichnet neu).
    fn feature_changed(&mut self, id: &str);

    // ── Selektion ───────────────────────────────────────────────────
    fn set_selected_feature(&mut self, id: &str);
    fn set_selected_coordinates(&mut self, coordinates: Vec<SelectedCoordinate>);
    fn clear_selected_coordinates(&mut self);

    // ── Modus & Ausgabe ─────────────────────────────────────────────
    /// Fordert einen Modus-Wechsel an; wird nach dem aktuellen Event ausgeführt.
    fn change_mode(&mut self, change: ModeChange);
    fn set_actionable_state(&mut self, state: ActionableState);
    fn fire(&mut self, event: ModeEvent);

    // ── Map-Gesten ──────────────────────────────────────────────────
    fn is_drag_pan_enabled(&self) -> bool;
    fn set_drag_pan_enabled(&mut self, enabled: bool);
    fn set_double_click_zoom_enabled(&mut self, enabled: bool);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_select_options_use_camel_case_wire_names() {
        let options: DirectSelectOptions = serde_json::from_value(json!({
            "featureId": "poly",
            "coordPath": "0.3",
            "startPos": [1.5, 2.5]
        }))
        .unwrap();
        assert_eq!(options.feature_id.as_deref(), Some("poly"));
        assert_eq!(options.coord_path, Some(CoordPath::ring_point(0, 3)));
        assert_eq!(options.start_pos, Some(DVec2::new(1.5, 2.5)));
    }

    #[test]
    fn test_mode_change_serialization() {
        let change = ModeChange::SimpleSelect {
            feature_ids: vec!["a".into()],
        };
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            json!({ "mode": "simple_select", "feature_ids": ["a"] })
        );
        assert_eq!(ModeChange::simple_select().mode_name(), "simple_select");
    }
}
