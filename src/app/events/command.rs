use super::intent::PointerEvent;
use crate::app::host::ModeChange;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Modus-Wechsel anfordern
    ChangeMode(ModeChange),
    /// Pointer gedrückt (Maus oder Single-Touch)
    PointerDown { event: PointerEvent },
    /// Drag-Bewegung
    Drag { event: PointerEvent },
    /// Pointer losgelassen
    PointerUp { event: PointerEvent },
    /// Pointer ohne Drag bewegt
    PointerMove { event: PointerEvent },
    /// Pointer hat die Karte verlassen
    PointerOut,
    /// Maus-Klick
    Click { event: PointerEvent },
    /// Touch-Tap
    Tap { event: PointerEvent },
    /// Selektierte Vertices bzw. Feature löschen
    Trash,
    /// Laufende Interaktion abbrechen
    Cancel,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
}

impl AppCommand {
    /// Kurzname für Log-Ausgaben und Auswertungen.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ChangeMode(_) => "change_mode",
            Self::PointerDown { .. } => "pointer_down",
            Self::Drag { .. } => "drag",
            Self::PointerUp { .. } => "pointer_up",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerOut => "pointer_out",
            Self::Click { .. } => "click",
            Self::Tap { .. } => "tap",
            Self::Trash => "trash",
            Self::Cancel => "cancel",
            Self::ApplyOptions { .. } => "apply_options",
        }
    }
}
