//! Zentrale Konfiguration des Direct-Select-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{EditConfig, ModifyMode, MovementLimits, OverlayToggle, VertexDeleteStrategy};
use serde::{Deserialize, Serialize};

// ── Skalierung ──────────────────────────────────────────────────────

/// Kleinster Betrag eines Achsen-Skalierungsfaktors beim Anchor-Drag.
pub const ANCHOR_MIN_SCALE: f64 = 0.01;

// ── Koordinaten-Grenzen ─────────────────────────────────────────────

/// Darstellbare Breite (Web-Mercator), Süd/Nord.
pub const LAT_RENDERED_MIN: f64 = -85.0;
pub const LAT_RENDERED_MAX: f64 = 85.0;
/// Absolute Breitengrenzen.
pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
/// Längen, ab denen um 360° zurückgewickelt wird.
pub const LNG_MIN: f64 = -270.0;
pub const LNG_MAX: f64 = 270.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `direct_select.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Feature-Defaults ────────────────────────────────────────
    /// Skalierungs-Strategie für Features ohne `modify`-Property
    #[serde(default)]
    pub default_modify: ModifyMode,
    /// Lösch-Strategie für Features ohne `vertexDelete`-Property
    #[serde(default)]
    pub default_vertex_delete: VertexDeleteStrategy,
    /// Midpoints anzeigen, wenn das Feature nichts vorgibt
    pub show_midpoints: bool,
    /// Vertices anzeigen, wenn das Feature nichts vorgibt
    pub show_vertices: bool,

    // ── Skalierung ──────────────────────────────────────────────
    /// Minimaler Achsen-Faktor beim Anchor-Drag
    #[serde(default = "default_anchor_min_scale")]
    pub anchor_min_scale: f64,

    // ── Grenzen ─────────────────────────────────────────────────
    pub lat_rendered_min: f64,
    pub lat_rendered_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_modify: ModifyMode::None,
            default_vertex_delete: VertexDeleteStrategy::Default,
            show_midpoints: true,
            show_vertices: true,

            anchor_min_scale: ANCHOR_MIN_SCALE,

            lat_rendered_min: LAT_RENDERED_MIN,
            lat_rendered_max: LAT_RENDERED_MAX,
            lat_min: LAT_MIN,
            lat_max: LAT_MAX,
            lng_min: LNG_MIN,
            lng_max: LNG_MAX,
        }
    }
}

/// Serde-Default für `anchor_min_scale` (ältere TOML-Dateien ohne den Eintrag).
fn default_anchor_min_scale() -> f64 {
    ANCHOR_MIN_SCALE
}

fn toggle(enabled: bool) -> OverlayToggle {
    if enabled {
        OverlayToggle::Enabled
    } else {
        OverlayToggle::Disabled
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("direct-select-replay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("direct_select.toml")
    }

    /// Edit-Konfiguration für Features ohne eigene Overrides.
    pub fn edit_defaults(&self) -> EditConfig {
        EditConfig {
            modify: self.default_modify,
            midpoints: toggle(self.show_midpoints),
            vertices: toggle(self.show_vertices),
            vertex_delete: self.default_vertex_delete,
        }
    }

    /// Bewegungsgrenzen für Drags.
    pub fn movement_limits(&self) -> MovementLimits {
        MovementLimits {
            lat_rendered_min: self.lat_rendered_min,
            lat_rendered_max: self.lat_rendered_max,
            lat_min: self.lat_min,
            lat_max: self.lat_max,
            lng_min: self.lng_min,
            lng_max: self.lng_max,
        }
    }
}
