//! Editierbares Feature: Identität, Geometrie, Properties und Skalierungs-Pivot.

use super::{Geometry, GeometryKind};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property-Schlüssel der Edit-Konfiguration.
pub mod keys {
    /// Skalierungs-Strategie beim Vertex-Drag
    pub const MODIFY: &str = "modify";
    /// Midpoint-Anzeige (bool oder Zahl)
    pub const MIDPOINTS: &str = "midpoints";
    /// Vertex-Anzeige (bool oder Anzahl für Subsampling)
    pub const VERTICES: &str = "vertices";
    /// Lösch-Strategie für den Trash-Befehl
    pub const VERTEX_DELETE: &str = "vertexDelete";
    /// Zwischengespeicherter Schwerpunkt (nur während eines Center-Drags)
    pub const CENTER: &str = "_center";
    /// Zwischengespeicherter Anker (nur während eines Anchor-Drags)
    pub const ANCHOR: &str = "_anchor";
}

/// Pivot-Strategie für Vertex-Drags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifyMode {
    /// Freies Verschieben der selektierten Vertices
    #[default]
    None,
    /// Gleichmäßige Skalierung um den Schwerpunkt
    Center,
    /// Achsenweise Skalierung um den entferntesten Vertex
    Anchor,
}

/// Verhalten des Trash-Befehls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexDeleteStrategy {
    /// Selektierte Vertices entfernen, ohne Selektion das ganze Feature
    #[default]
    Default,
    /// Immer das ganze Feature löschen
    #[serde(alias = "deleteFeature")]
    DeleteFeature,
    /// Feature-eigene Overrides zurücksetzen, danach wie `Default`
    #[serde(alias = "toDefault")]
    ToDefault,
}

/// Anzeige-Schalter für Vertices bzw. Midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayToggle {
    Enabled,
    Disabled,
    /// Positive Zahl; bei Vertices die Zielanzahl für das Subsampling
    Count(usize),
}

impl OverlayToggle {
    /// Liest den Schalter aus einem Property-Wert (`None` = nicht gesetzt).
    pub fn from_property(value: Option<&Value>) -> Option<Self> {
        match value? {
            Value::Null => None,
            Value::Bool(true) => Some(Self::Enabled),
            Value::Bool(false) => Some(Self::Disabled),
            Value::Number(n) => match n.as_f64() {
                Some(v) if v >= 1.0 => Some(Self::Count(v.floor() as usize)),
                Some(v) if v > 0.0 => Some(Self::Enabled),
                _ => Some(Self::Disabled),
            },
            _ => Some(Self::Disabled),
        }
    }

    /// Ob überhaupt etwas angezeigt wird.
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Aufgelöste Edit-Konfiguration eines Features (Property-Override oder Default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditConfig {
    pub modify: ModifyMode,
    pub midpoints: OverlayToggle,
    pub vertices: OverlayToggle,
    pub vertex_delete: VertexDeleteStrategy,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            modify: ModifyMode::None,
            midpoints: OverlayToggle::Enabled,
            vertices: OverlayToggle::Enabled,
            vertex_delete: VertexDeleteStrategy::Default,
        }
    }
}

/// Zwischengespeicherter Pivot einer laufenden Skalierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalePivot {
    /// Schwerpunkt für `ModifyMode::Center`
    Center(DVec2),
    /// Entferntester Vertex für `ModifyMode::Anchor`
    Anchor(DVec2),
}

/// Ein editierbares Feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Eindeutige ID im Feature-Store
    pub id: String,
    /// Koordinaten (Polygon-Ringe offen)
    pub geometry: Geometry,
    /// GeoJSON-Properties inkl. Edit-Konfiguration
    pub properties: Map<String, Value>,
    /// Nur während eines Skalierungs-Drags gesetzt
    pub pivot: Option<ScalePivot>,
}

impl Feature {
    /// Erstellt ein Feature ohne Properties.
    pub fn new(id: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            id: id.into(),
            geometry,
            properties: Map::new(),
            pivot: None,
        }
    }

    /// Builder: setzt einen Property-Wert.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    /// Geometrie-Art.
    pub fn kind(&self) -> GeometryKind {
        self.geometry.kind()
    }

    /// Löst die Edit-Konfiguration gegen die übergebenen Defaults auf.
    pub fn edit_config(&self, defaults: &EditConfig) -> EditConfig {
        let modify = self
            .properties
            .get(keys::MODIFY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or(defaults.modify);
        let vertex_delete = self
            .properties
            .get(keys::VERTEX_DELETE)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or(defaults.vertex_delete);
        EditConfig {
            modify,
            midpoints: OverlayToggle::from_property(self.properties.get(keys::MIDPOINTS))
                .unwrap_or(defaults.midpoints),
            vertices: OverlayToggle::from_property(self.properties.get(keys::VERTICES))
                .unwrap_or(defaults.vertices),
            vertex_delete,
        }
    }

    /// Entfernt die Feature-eigenen Overrides (Vertices, Midpoints, Lösch- und Modify-Modus).
    pub fn clear_edit_overrides(&mut self) {
        for key in [
            keys::VERTICES,
            keys::MIDPOINTS,
            keys::VERTEX_DELETE,
            keys::MODIFY,
        ] {
            self.properties.remove(key);
        }
    }

    /// Schreibt Properties inkl. eventuell gesetztem Pivot (für den Export).
    pub fn exported_properties(&self) -> Map<String, Value> {
        let mut props = self.properties.clone();
        match self.pivot {
            Some(ScalePivot::Center(c)) => {
                props.insert(keys::CENTER.to_string(), Value::from(vec![c.x, c.y]));
            }
            Some(ScalePivot::Anchor(a)) => {
                props.insert(keys::ANCHOR.to_string(), Value::from(vec![a.x, a.y]));
            }
            None => {}
        }
        props
    }
}
