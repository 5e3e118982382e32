use crate::core::GeoJsonFeature;
use serde::{Deserialize, Serialize};

/// Art einer Feature-Änderung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateAction {
    ChangeCoordinates,
}

/// Vom Modus an den Host gemeldete Events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModeEvent {
    /// Abgeschlossene Änderung (einmal pro Interaktion)
    Update {
        action: UpdateAction,
        features: Vec<GeoJsonFeature>,
    },
    /// Zwischenstand während eines Drags
    LiveUpdate {
        action: UpdateAction,
        features: Vec<GeoJsonFeature>,
    },
}

impl ModeEvent {
    /// Committed Koordinaten-Änderung.
    pub fn update(features: Vec<GeoJsonFeature>) -> Self {
        Self::Update {
            action: UpdateAction::ChangeCoordinates,
            features,
        }
    }

    /// Live-Koordinaten-Änderung während eines Drags.
    pub fn live_update(features: Vec<GeoJsonFeature>) -> Self {
        Self::LiveUpdate {
            action: UpdateAction::ChangeCoordinates,
            features,
        }
    }

    /// `true` für committed Updates.
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// `true` für Live-Updates.
    pub fn is_live_update(&self) -> bool {
        matches!(self, Self::LiveUpdate { .. })
    }

    /// Die betroffenen Features.
    pub fn features(&self) -> &[GeoJsonFeature] {
        match self {
            Self::Update { features, .. } | Self::LiveUpdate { features, .. } => features,
        }
    }
}
