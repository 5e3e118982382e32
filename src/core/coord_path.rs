//! Adressierung einzelner Koordinaten in verschachtelten Geometrie-Arrays.
//!
//! Ein `CoordPath` ist eine punktgetrennte Folge nicht-negativer Ganzzahlen:
//! `"ring.punkt"` für Polygone, `"punkt"` für LineStrings. Verglichen wird
//! segmentweise numerisch (`"9" < "10"`), nie lexikographisch.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fehler beim Parsen eines Koordinaten-Pfads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordPathError {
    /// Leerer String
    #[error("Koordinaten-Pfad ist leer")]
    Empty,
    /// Segment ist keine nicht-negative Ganzzahl
    #[error("ungültiges Pfad-Segment '{segment}' in '{path}'")]
    InvalidSegment { path: String, segment: String },
}

/// Numerische Adresse einer Koordinate innerhalb eines Features.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CoordPath {
    segments: Vec<usize>,
}

impl CoordPath {
    /// Pfad für einen LineString-Punkt.
    pub fn point(index: usize) -> Self {
        Self {
            segments: vec![index],
        }
    }

    /// Pfad für einen Punkt innerhalb eines Polygon-Rings.
    pub fn ring_point(ring: usize, index: usize) -> Self {
        Self {
            segments: vec![ring, index],
        }
    }

    /// Alle Segmente in Reihenfolge (äußerstes zuerst).
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Anzahl der Segmente (1 = LineString, 2 = Polygon).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Letztes Segment: Index des Punkts innerhalb seiner Sequenz.
    pub fn point_index(&self) -> usize {
        // Konstruktion garantiert mindestens ein Segment
        self.segments[self.segments.len() - 1]
    }
}

impl Ord for CoordPath {
    fn cmp(&self, other: &Self) -> Ordering {
        // Vec<usize> vergleicht segmentweise numerisch, kürzere Präfixe zuerst
        self.segments.cmp(&other.segments)
    }
}

impl PartialOrd for CoordPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for CoordPath {
    type Err = CoordPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(CoordPathError::Empty);
        }
        let segments = s
            .split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| CoordPathError::InvalidSegment {
                        path: s.to_string(),
                        segment: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

impl TryFrom<String> for CoordPath {
    type Error = CoordPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CoordPath> for String {
    fn from(path: CoordPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for CoordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Sortiert Pfade absteigend numerisch.
///
/// Reihenfolge für Batch-Löschungen: ein höherer Index wird vor einem
/// niedrigeren desselben Rings entfernt, damit noch offene Pfade gültig bleiben.
pub fn sort_descending(paths: &mut [CoordPath]) {
    paths.sort_by(|a, b| b.cmp(a));
}
