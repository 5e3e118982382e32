//! Editier-Overlay: Vertex- und Midpoint-Punkte eines Features.

use super::geojson::{GeoJsonFeature, GeoJsonGeometry};
use super::{CoordPath, Feature, Geometry};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Art eines Overlay-Punkts (`meta`-Property im Anzeige-Feature).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplementaryKind {
    Vertex,
    Midpoint,
}

/// Synthetischer Overlay-Punkt eines editierten Features.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplementaryPoint {
    pub kind: SupplementaryKind,
    /// ID des besitzenden Features
    pub parent: String,
    /// Vertex: eigene Adresse. Midpoint: Einfügeposition des neuen Vertex.
    pub coord_path: CoordPath,
    pub position: DVec2,
    /// Nur für Vertices: ist der Pfad selektiert?
    pub active: bool,
}

impl SupplementaryPoint {
    /// Anzeige-Feature für den Host.
    pub fn to_geojson(&self) -> GeoJsonFeature {
        let mut out = GeoJsonFeature::new(None, GeoJsonGeometry::Point([self.position.x, self.position.y]));
        let meta = match self.kind {
            SupplementaryKind::Vertex => "vertex",
            SupplementaryKind::Midpoint => "midpoint",
        };
        out.properties.insert("meta".into(), Value::from(meta));
        out.properties.insert("parent".into(), Value::from(self.parent.clone()));
        out.properties
            .insert("coord_path".into(), Value::from(self.coord_path.to_string()));
        match self.kind {
            SupplementaryKind::Vertex => {
                out.properties.insert("active".into(), Value::from(active_state(self.active)));
            }
            SupplementaryKind::Midpoint => {
                out.properties.insert("lng".into(), Value::from(self.position.x));
                out.properties.insert("lat".into(), Value::from(self.position.y));
            }
        }
        out
    }
}

/// Aktiv-Markierung als String, wie sie Host-Styles erwarten.
pub fn active_state(active: bool) -> &'static str {
    if active {
        "true"
    } else {
        "false"
    }
}

/// Erzeugt das Overlay eines Features in Koordinaten-Reihenfolge.
///
/// Vertices und Midpoints sind verschränkt (Midpoint vor dem Vertex, den er
/// abschließt). Bei Polygon-Ringen kommt zuletzt der Midpoint zwischen
/// letztem und erstem Punkt mit Pfad `ring.len`. Ein Midpoint entfällt, wenn
/// einer seiner Endpunkte jenseits von `lat_limit` liegt.
pub fn create_supplementary_points(
    feature: &Feature,
    selected: &[CoordPath],
    include_midpoints: bool,
    lat_limit: f64,
) -> Vec<SupplementaryPoint> {
    let mut out = Vec::new();
    let builder = OverlayBuilder {
        parent: &feature.id,
        selected,
        include_midpoints,
        lat_limit,
    };
    match &feature.geometry {
        Geometry::Point(p) => out.push(builder.vertex(CoordPath::point(0), *p)),
        Geometry::LineString(coords) => builder.sequence(coords, None, false, &mut out),
        Geometry::Polygon(rings) => {
            for (r, ring) in rings.iter().enumerate() {
                builder.sequence(ring, Some(r), true, &mut out);
            }
        }
    }
    out
}

struct OverlayBuilder<'a> {
    parent: &'a str,
    selected: &'a [CoordPath],
    include_midpoints: bool,
    lat_limit: f64,
}

impl OverlayBuilder<'_> {
    fn path(&self, ring: Option<usize>, index: usize) -> CoordPath {
        match ring {
            Some(r) => CoordPath::ring_point(r, index),
            None => CoordPath::point(index),
        }
    }

    fn vertex(&self, coord_path: CoordPath, position: DVec2) -> SupplementaryPoint {
        let active = self.selected.contains(&coord_path);
        SupplementaryPoint {
            kind: SupplementaryKind::Vertex,
            parent: self.parent.to_string(),
            coord_path,
            position,
            active,
        }
    }

    fn midpoint(&self, coord_path: CoordPath, a: DVec2, b: DVec2) -> Option<SupplementaryPoint> {
        if a.y.abs() > self.lat_limit || b.y.abs() > self.lat_limit {
            return None;
        }
        Some(SupplementaryPoint {
            kind: SupplementaryKind::Midpoint,
            parent: self.parent.to_string(),
            coord_path,
            position: (a + b) / 2.0,
            active: false,
        })
    }

    fn sequence(
        &self,
        coords: &[DVec2],
        ring: Option<usize>,
        closed: bool,
        out: &mut Vec<SupplementaryPoint>,
    ) {
        let Some(&first) = coords.first() else {
            return;
        };
        let mut previous: Option<DVec2> = None;
        for (i, &c) in coords.iter().enumerate() {
            let path = self.path(ring, i);
            if self.include_midpoints {
                if let Some(prev) = previous {
                    out.extend(self.midpoint(path.clone(), prev, c));
                }
            }
            previous = Some(c);
            // Schlusspunkt einer geschlossenen Linie bekommt keinen zweiten Vertex
            let closing_duplicate = !closed && i > 0 && i == coords.len() - 1 && c == first;
            if !closing_duplicate {
                out.push(self.vertex(path, c));
            }
        }
        if closed && self.include_midpoints && coords.len() > 1 {
            if let Some(last) = previous {
                out.extend(self.midpoint(self.path(ring, coords.len()), last, first));
            }
        }
    }
}

/// Wählt `n` Elemente zyklisch mit Schrittweite `len / n` aus.
///
/// Index `floor(i * len / n) mod len` für `i in 0..n`. Ist `n` nicht kleiner
/// als die Länge, wird unverändert zurückgegeben.
pub fn subsample<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    if n >= items.len() {
        return items.to_vec();
    }
    let step = items.len() as f64 / n as f64;
    (0..n)
        .map(|i| items[((i as f64 * step).floor() as usize) % items.len()].clone())
        .collect()
}
