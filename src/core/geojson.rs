//! GeoJSON-Import/-Export für Features und Anzeige-Features.

use super::{Feature, Geometry};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fehler bei der Umwandlung von GeoJSON in ein editierbares Feature.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoJsonError {
    /// Feature ohne `id`
    #[error("GeoJSON-Feature ohne id")]
    MissingId,
    /// Nicht-endliche Koordinate
    #[error("nicht-endliche Koordinate in Feature '{id}'")]
    NonFiniteCoordinate { id: String },
}

/// GeoJSON-Geometrie (nur die vom Editor unterstützten Arten).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum GeoJsonGeometry {
    Point([f64; 2]),
    LineString(Vec<[f64; 2]>),
    Polygon(Vec<Vec<[f64; 2]>>),
}

/// GeoJSON-Feature, wie es an den Host übergeben wird.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    pub geometry: GeoJsonGeometry,
}

/// GeoJSON-FeatureCollection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    pub features: Vec<GeoJsonFeature>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl GeoJsonFeature {
    /// Erstellt ein Feature mit leeren Properties.
    pub fn new(id: Option<String>, geometry: GeoJsonGeometry) -> Self {
        Self {
            kind: feature_type(),
            id,
            properties: Map::new(),
            geometry,
        }
    }

    /// Liest einen String-Property-Wert.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

impl FeatureCollection {
    /// Erstellt eine Collection aus Features.
    pub fn new(features: Vec<GeoJsonFeature>) -> Self {
        Self {
            kind: collection_type(),
            features,
        }
    }
}

fn to_pair(c: &DVec2) -> [f64; 2] {
    [c.x, c.y]
}

fn from_pair(p: &[f64; 2]) -> DVec2 {
    DVec2::new(p[0], p[1])
}

/// Schließt einen offenen Ring für den Export.
fn close_ring(ring: &[DVec2]) -> Vec<[f64; 2]> {
    let mut out: Vec<[f64; 2]> = ring.iter().map(to_pair).collect();
    if let Some(first) = out.first().copied() {
        out.push(first);
    }
    out
}

/// Öffnet einen geschlossenen Ring für die Bearbeitung.
fn open_ring(ring: &[[f64; 2]]) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = ring.iter().map(from_pair).collect();
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

impl From<&Geometry> for GeoJsonGeometry {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(p) => GeoJsonGeometry::Point(to_pair(p)),
            Geometry::LineString(coords) => {
                GeoJsonGeometry::LineString(coords.iter().map(to_pair).collect())
            }
            Geometry::Polygon(rings) => {
                GeoJsonGeometry::Polygon(rings.iter().map(|r| close_ring(r)).collect())
            }
        }
    }
}

impl From<&GeoJsonGeometry> for Geometry {
    fn from(geometry: &GeoJsonGeometry) -> Self {
        match geometry {
            GeoJsonGeometry::Point(p) => Geometry::Point(from_pair(p)),
            GeoJsonGeometry::LineString(coords) => {
                Geometry::LineString(coords.iter().map(from_pair).collect())
            }
            GeoJsonGeometry::Polygon(rings) => {
                Geometry::Polygon(rings.iter().map(|r| open_ring(r)).collect())
            }
        }
    }
}

impl Feature {
    /// Exportiert das Feature als GeoJSON (Ringe geschlossen).
    pub fn to_geojson(&self) -> GeoJsonFeature {
        let mut out = GeoJsonFeature::new(Some(self.id.clone()), (&self.geometry).into());
        out.properties = self.exported_properties();
        out
    }
}

impl TryFrom<GeoJsonFeature> for Feature {
    type Error = GeoJsonError;

    fn try_from(value: GeoJsonFeature) -> Result<Self, Self::Error> {
        let property_id = value.property_str("id").map(str::to_string);
        let id = value.id.or(property_id).ok_or(GeoJsonError::MissingId)?;
        let geometry = Geometry::from(&value.geometry);
        if !geometry.coordinates().iter().all(|c| c.is_finite()) {
            return Err(GeoJsonError::NonFiniteCoordinate { id });
        }
        let mut properties = value.properties;
        // Pivot-Felder sind transient und werden nie importiert
        properties.remove(super::feature::keys::CENTER);
        properties.remove(super::feature::keys::ANCHOR);
        Ok(Feature {
            id,
            geometry,
            properties,
            pivot: None,
        })
    }
}
