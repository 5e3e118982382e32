//! Selektions- und Drag-Zustand des Direct-Select-Modus.

use crate::core::CoordPath;
use glam::DVec2;
use indexmap::IndexSet;

/// Phasen einer Direct-Select-Interaktion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// Keine Koordinate selektiert, kein Drag
    Idle,
    /// Mindestens eine Koordinate selektiert
    VertexSelected,
    /// Pointer gedrückt, Drag möglich bzw. aktiv
    Dragging,
}

/// Geordnete, eindeutige Menge selektierter Koordinaten-Pfade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    paths: IndexSet<CoordPath>,
}

impl SelectionState {
    /// Startet optional mit einem vorselektierten Pfad.
    pub fn new(initial: Option<CoordPath>) -> Self {
        Self {
            paths: initial.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn contains(&self, path: &CoordPath) -> bool {
        self.paths.contains(path)
    }

    /// Zuerst selektierter Pfad (Referenz für Pivot und Skalierung).
    pub fn first(&self) -> Option<&CoordPath> {
        self.paths.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoordPath> {
        self.paths.iter()
    }

    /// Selektion wird genau dieser Pfad.
    pub fn select_only(&mut self, path: CoordPath) {
        self.paths.clear();
        self.paths.insert(path);
    }

    /// Hängt einen Pfad an. Gibt `false` zurück wenn er schon selektiert war.
    pub fn add(&mut self, path: CoordPath) -> bool {
        self.paths.insert(path)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Kopie der Pfade in Selektionsreihenfolge.
    pub fn to_vec(&self) -> Vec<CoordPath> {
        self.paths.iter().cloned().collect()
    }
}

/// Drag-Buchhaltung zwischen Pointer-Down und Pointer-Up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Pointer-Down auf ziehbarem Ziel erfolgt
    pub can_drag_move: bool,
    /// Seit Pointer-Down tatsächlich bewegt
    pub drag_moving: bool,
    /// Letzte Pointer-Position (Basis für das Delta)
    pub last_pos: Option<DVec2>,
    /// Pan-Geste vor Drag-Beginn aktiv? (`None` = nicht erfasst)
    pub pan_enabled_before: Option<bool>,
}

impl DragState {
    /// Zustand nach Modus-Einstieg mit optionaler Startposition.
    pub fn starting_at(start_pos: Option<DVec2>) -> Self {
        Self {
            last_pos: start_pos,
            ..Self::default()
        }
    }
}
