use crate::app::host::DirectSelectOptions;
use crate::core::CoordPath;
use crate::shared::EditorOptions;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Was unter dem Pointer liegt (Hit-Test des Hosts).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerTarget {
    /// Leere Kartenfläche
    #[default]
    None,
    /// Vertex-Overlay-Punkt
    Vertex {
        feature_id: String,
        coord_path: CoordPath,
    },
    /// Midpoint-Overlay-Punkt; `lng_lat` ist die Einfügeposition
    Midpoint {
        feature_id: String,
        coord_path: CoordPath,
        lng_lat: DVec2,
    },
    /// Körper eines Features (aktiv oder inaktiv entscheidet der Modus)
    Feature { feature_id: String },
}

fn single_touch() -> usize {
    1
}

/// Pointer-Event in Karten-Koordinaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub lng_lat: DVec2,
    #[serde(default)]
    pub target: PointerTarget,
    /// Multi-Select-Modifier
    #[serde(default)]
    pub shift: bool,
    /// Anzahl aktiver Touch-Punkte (Maus: 1)
    #[serde(default = "single_touch")]
    pub touch_points: usize,
}

impl PointerEvent {
    /// Maus-Event ohne Modifier.
    pub fn at(lng_lat: DVec2, target: PointerTarget) -> Self {
        Self {
            lng_lat,
            target,
            shift: false,
            touch_points: 1,
        }
    }

    /// Builder: Shift gedrückt.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// App-Intent Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppIntent {
    /// Direct-Select für ein Feature starten
    EnterDirectSelectRequested { options: DirectSelectOptions },
    /// Zurück in die Standard-Selektion
    ExitToSimpleSelectRequested,

    /// Maustaste gedrückt
    PointerDown(PointerEvent),
    /// Touch begonnen
    TouchStart(PointerEvent),
    /// Pointer bei gedrückter Taste bewegt
    Drag(PointerEvent),
    /// Maustaste losgelassen
    PointerUp(PointerEvent),
    /// Touch beendet
    TouchEnd(PointerEvent),
    /// Pointer ohne gedrückte Taste bewegt
    PointerMove(PointerEvent),
    /// Pointer hat die Karte verlassen
    PointerOut,
    /// Klick
    Click(PointerEvent),
    /// Touch-Tap
    Tap(PointerEvent),

    /// Taste gedrückt (`Backspace`, `Delete`, `Escape`, …)
    KeyPressed { key: String },
    /// Trash-Button
    TrashRequested,
    /// Optionen ersetzt
    OptionsChanged { options: EditorOptions },
}
