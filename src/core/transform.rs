//! Reine Geometrie-Transformationen für Drags: Verschieben, Center-Skalierung,
//! Anchor-Skalierung und Bewegungsbegrenzung.
//!
//! Alle Funktionen liefern neue Geometrien; die Eingabe bleibt unverändert.

use super::{CoordPath, Geometry};
use glam::DVec2;

/// Grenzen, innerhalb derer sich Koordinaten verschieben lassen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementLimits {
    /// Südlichste darstellbare Breite
    pub lat_rendered_min: f64,
    /// Nördlichste darstellbare Breite
    pub lat_rendered_max: f64,
    /// Absolute Südgrenze
    pub lat_min: f64,
    /// Absolute Nordgrenze
    pub lat_max: f64,
    /// Ab dieser Länge wird um 360° zurückgewickelt (West)
    pub lng_min: f64,
    /// Ab dieser Länge wird um 360° zurückgewickelt (Ost)
    pub lng_max: f64,
}

impl Default for MovementLimits {
    fn default() -> Self {
        Self {
            lat_rendered_min: -85.0,
            lat_rendered_max: 85.0,
            lat_min: -90.0,
            lat_max: 90.0,
            lng_min: -270.0,
            lng_max: 270.0,
        }
    }
}

/// Achsenparallele Ausdehnung einer Koordinatengruppe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Ausdehnung einer Koordinatenmenge (`None` bei leerer Menge).
    pub fn of(coords: &[DVec2]) -> Option<Self> {
        let first = *coords.first()?;
        Some(coords.iter().fold(
            Self {
                min: first,
                max: first,
            },
            |b, c| Self {
                min: b.min.min(*c),
                max: b.max.max(*c),
            },
        ))
    }
}

/// Begrenzt ein Verschiebungs-Delta so, dass keine Gruppe über die Pole
/// hinausläuft, und wickelt die Länge um 360° zurück, sobald eine Gruppe die
/// Längengrenzen erreichen würde.
pub fn constrain_movement(groups: &[Bounds], delta: DVec2, limits: &MovementLimits) -> DVec2 {
    if groups.is_empty() {
        return delta;
    }

    // Innere Kanten: südlichster Nordrand / nördlichster Südrand über alle Gruppen
    let mut north_inner = limits.lat_min;
    let mut south_inner = limits.lat_max;
    let mut north_outer = limits.lat_min;
    let mut south_outer = limits.lat_max;
    let mut west = limits.lng_max;
    let mut east = limits.lng_min;

    for b in groups {
        north_inner = north_inner.max(b.min.y);
        south_inner = south_inner.min(b.max.y);
        north_outer = north_outer.max(b.max.y);
        south_outer = south_outer.min(b.min.y);
        west = west.min(b.min.x);
        east = east.max(b.max.x);
    }

    let mut out = delta;
    if north_inner + out.y > limits.lat_rendered_max {
        out.y = limits.lat_rendered_max - north_inner;
    }
    if north_outer + out.y > limits.lat_max {
        out.y = limits.lat_max - north_outer;
    }
    if south_inner + out.y < limits.lat_rendered_min {
        out.y = limits.lat_rendered_min - south_inner;
    }
    if south_outer + out.y < limits.lat_min {
        out.y = limits.lat_min - south_outer;
    }
    if west + out.x <= limits.lng_min {
        out.x += (out.x.abs() / 360.0).ceil() * 360.0;
    }
    if east + out.x >= limits.lng_max {
        out.x -= (out.x.abs() / 360.0).ceil() * 360.0;
    }
    out
}

/// Verschiebt jede Koordinate der Geometrie um `delta`.
pub fn translate(geometry: &Geometry, delta: DVec2) -> Geometry {
    geometry.map_coordinates(|c| c + delta)
}

/// Verschiebt nur die Koordinaten an `paths` starr um `delta`.
///
/// Unbekannte Pfade werden übersprungen.
pub fn translate_paths(geometry: &Geometry, paths: &[CoordPath], delta: DVec2) -> Geometry {
    let mut out = geometry.clone();
    for path in paths {
        if let Some(c) = geometry.coordinate(path) {
            out.set_coordinate(path, c + delta);
        }
    }
    out
}

/// Gleichmäßige Skalierung um `center`: `c + (coord - c) * factor`.
pub fn scale_about_center(geometry: &Geometry, center: DVec2, factor: f64) -> Geometry {
    geometry.map_coordinates(|c| center + (c - center) * factor)
}

/// Skalierungsfaktor für den Center-Drag.
///
/// Verhältnis der Pointer-Distanz zur Distanz des gegriffenen Vertex, beide
/// vom Schwerpunkt aus in Grad gemessen. `None` wenn der Vertex auf dem
/// Schwerpunkt liegt oder das Ergebnis nicht endlich ist.
pub fn center_scale_factor(center: DVec2, vertex: DVec2, pointer: DVec2) -> Option<f64> {
    let original = super::measure::distance_degrees(center, vertex);
    if original <= f64::EPSILON {
        return None;
    }
    let factor = super::measure::distance_degrees(center, pointer) / original;
    factor.is_finite().then_some(factor)
}

/// Achsenweise Skalierungsfaktoren für den Anchor-Drag.
///
/// Pro Achse: `(pointer - anchor) / (vertex - anchor)`, also
/// `(Originalabstand + Pointer-Delta) / Originalabstand`. Ein Originalabstand
/// von null wird durch `1` ersetzt. Der Betrag jedes Faktors wird
/// vorzeichenerhaltend auf mindestens `min_scale` angehoben.
pub fn anchor_scale_factors(anchor: DVec2, vertex: DVec2, pointer: DVec2, min_scale: f64) -> DVec2 {
    let mut original = vertex - anchor;
    if original.x == 0.0 {
        original.x = 1.0;
    }
    if original.y == 0.0 {
        original.y = 1.0;
    }
    let raw = (pointer - anchor) / original;
    DVec2::new(clamp_magnitude(raw.x, min_scale), clamp_magnitude(raw.y, min_scale))
}

fn clamp_magnitude(value: f64, min_scale: f64) -> f64 {
    if value >= 0.0 {
        value.max(min_scale)
    } else {
        value.min(-min_scale)
    }
}

/// Achsenweise Skalierung um `anchor`: `a + (coord - a) * factors`.
pub fn scale_about_anchor(geometry: &Geometry, anchor: DVec2, factors: DVec2) -> Geometry {
    geometry.map_coordinates(|c| anchor + (c - anchor) * factors)
}
