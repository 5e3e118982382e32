//! Editier-Modi des Controllers.

pub mod direct_select;

pub use direct_select::{DirectSelectMode, EditPhase, SetupError};

/// Aktuell aktiver Modus.
#[derive(Debug, Clone)]
pub enum ActiveMode {
    /// Standard-Selektion (außerhalb dieses Editors; nur die Feature-Auswahl wird gehalten)
    SimpleSelect { feature_ids: Vec<String> },
    /// Vertex-Bearbeitung eines Features
    DirectSelect(DirectSelectMode),
}

impl Default for ActiveMode {
    fn default() -> Self {
        Self::SimpleSelect {
            feature_ids: Vec::new(),
        }
    }
}

impl ActiveMode {
    /// Host-Name des Modus.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SimpleSelect { .. } => "simple_select",
            Self::DirectSelect(_) => direct_select::MODE_NAME,
        }
    }

    pub fn as_direct_select(&self) -> Option<&DirectSelectMode> {
        match self {
            Self::DirectSelect(mode) => Some(mode),
            Self::SimpleSelect { .. } => None,
        }
    }
}
