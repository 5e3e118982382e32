//! Editierbare Geometrie mit pfadbasiertem Koordinatenzugriff.
//!
//! Polygon-Ringe werden intern *offen* gespeichert (ohne wiederholten
//! Schlusspunkt). Geschlossen werden sie erst beim GeoJSON-Export.

use super::{sort_descending, CoordPath};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Geometrie-Art eines Features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

/// Koordinaten eines Features, getrennt nach Geometrie-Art.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Einzelner Punkt (im Direct-Select-Modus nicht editierbar)
    Point(DVec2),
    /// Offene Linie
    LineString(Vec<DVec2>),
    /// Ringe ohne Schlusspunkt; Ring 0 ist die Außenkontur
    Polygon(Vec<Vec<DVec2>>),
}

/// Mindestanzahl unterschiedlicher Punkte eines gültigen Polygon-Rings.
pub const MIN_RING_POINTS: usize = 3;
/// Mindestanzahl unterschiedlicher Punkte eines gültigen LineStrings.
pub const MIN_LINE_POINTS: usize = 2;

impl Geometry {
    /// Gibt die Geometrie-Art zurück.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Liest die Koordinate an `path`.
    pub fn coordinate(&self, path: &CoordPath) -> Option<DVec2> {
        match (self, path.segments()) {
            (Geometry::Point(p), [0]) => Some(*p),
            (Geometry::LineString(coords), [i]) => coords.get(*i).copied(),
            (Geometry::Polygon(rings), [r, i]) => rings.get(*r)?.get(*i).copied(),
            _ => None,
        }
    }

    /// Überschreibt die Koordinate an `path`. Gibt `false` zurück wenn der Pfad nicht existiert.
    pub fn set_coordinate(&mut self, path: &CoordPath, value: DVec2) -> bool {
        let slot = match (self, path.segments()) {
            (Geometry::Point(p), [0]) => Some(p),
            (Geometry::LineString(coords), [i]) => coords.get_mut(*i),
            (Geometry::Polygon(rings), [r, i]) => rings.get_mut(*r).and_then(|ring| ring.get_mut(*i)),
            _ => None,
        };
        match slot {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Fügt eine Koordinate an `path` ein (Midpoint-Split).
    ///
    /// Der Index darf gleich der Sequenzlänge sein (Anhängen, z.B. zwischen
    /// letztem und erstem Ring-Punkt).
    pub fn insert_coordinate(&mut self, path: &CoordPath, value: DVec2) -> bool {
        let target = match (self, path.segments()) {
            (Geometry::LineString(coords), [i]) => Some((coords, *i)),
            (Geometry::Polygon(rings), [r, i]) => rings.get_mut(*r).map(|ring| (ring, *i)),
            _ => None,
        };
        match target {
            Some((seq, index)) if index <= seq.len() => {
                seq.insert(index, value);
                true
            }
            _ => false,
        }
    }

    /// Entfernt die Koordinate an `path`.
    ///
    /// Fällt ein Polygon-Ring dadurch unter drei Punkte, wird der ganze Ring
    /// entfernt. Verliert das Polygon seine Außenkontur, werden alle Ringe
    /// verworfen; das Polygon ist danach ungültig.
    pub fn remove_coordinate(&mut self, path: &CoordPath) -> bool {
        self.remove_coordinates(std::slice::from_ref(path)) == 1
    }

    /// Entfernt mehrere Koordinaten in einem Schritt und gibt die Anzahl der
    /// tatsächlich entfernten zurück.
    ///
    /// Entfernt wird in absteigender Pfad-Reihenfolge. Degenerierte Ringe
    /// werden erst danach verworfen, sodass kein ausstehender Pfad auf einen
    /// nachgerückten Ring zeigt.
    pub fn remove_coordinates(&mut self, paths: &[CoordPath]) -> usize {
        let mut sorted = paths.to_vec();
        sort_descending(&mut sorted);
        sorted.dedup();

        let removed = sorted
            .iter()
            .filter(|path| self.remove_without_pruning(path))
            .count();
        if let Geometry::Polygon(rings) = self {
            prune_degenerate_rings(rings);
        }
        removed
    }

    fn remove_without_pruning(&mut self, path: &CoordPath) -> bool {
        match (self, path.segments()) {
            (Geometry::LineString(coords), [i]) if *i < coords.len() => {
                coords.remove(*i);
                true
            }
            (Geometry::Polygon(rings), [r, i]) => match rings.get_mut(*r) {
                Some(ring) if *i < ring.len() => {
                    ring.remove(*i);
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Prüft, ob die Geometrie noch darstellbar ist.
    pub fn is_valid(&self) -> bool {
        match self {
            Geometry::Point(p) => p.is_finite(),
            Geometry::LineString(coords) => distinct_count(coords) >= MIN_LINE_POINTS,
            Geometry::Polygon(rings) => {
                !rings.is_empty()
                    && rings
                        .iter()
                        .all(|ring| distinct_count(ring) >= MIN_RING_POINTS)
            }
        }
    }

    /// Alle Koordinaten in Speicherreihenfolge (ohne Ring-Schlusspunkte).
    pub fn coordinates(&self) -> Vec<DVec2> {
        match self {
            Geometry::Point(p) => vec![*p],
            Geometry::LineString(coords) => coords.clone(),
            Geometry::Polygon(rings) => rings.iter().flatten().copied().collect(),
        }
    }

    /// Anzahl aller Koordinaten.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(coords) => coords.len(),
            Geometry::Polygon(rings) => rings.iter().map(Vec::len).sum(),
        }
    }

    /// Erzeugt eine neue Geometrie, in der jede Koordinate durch `f` abgebildet ist.
    pub fn map_coordinates(&self, f: impl Fn(DVec2) -> DVec2) -> Geometry {
        match self {
            Geometry::Point(p) => Geometry::Point(f(*p)),
            Geometry::LineString(coords) => {
                Geometry::LineString(coords.iter().map(|c| f(*c)).collect())
            }
            Geometry::Polygon(rings) => Geometry::Polygon(
                rings
                    .iter()
                    .map(|ring| ring.iter().map(|c| f(*c)).collect())
                    .collect(),
            ),
        }
    }
}

/// Verwirft Ringe unter drei Punkten; ohne Außenkontur bleibt kein Ring übrig.
fn prune_degenerate_rings(rings: &mut Vec<Vec<DVec2>>) {
    if rings.first().is_some_and(|outer| outer.len() < MIN_RING_POINTS) {
        rings.clear();
    } else {
        rings.retain(|ring| ring.len() >= MIN_RING_POINTS);
    }
}

/// Zählt unterschiedliche Koordinaten (bitgenauer Vergleich, `-0.0 == 0.0`).
fn distinct_count(coords: &[DVec2]) -> usize {
    coords
        .iter()
        .map(|c| *c + DVec2::ZERO)
        .map(|c| (c.x.to_bits(), c.y.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}
