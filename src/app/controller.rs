//! Application Controller für zentrale Event-Verarbeitung.

use super::host::{HostContext, ModeChange};
use super::modes::{ActiveMode, DirectSelectMode};
use super::{AppCommand, AppIntent, AppState};
use crate::core::{active_state, GeoJsonFeature};
use anyhow::Context;
use serde_json::Value;

/// Orchestriert Host-Events und den aktiven Modus auf dem AppState.
#[derive(Default)]
pub struct AppController {
    mode: ActiveMode,
}

impl AppController {
    /// Erstellt einen neuen Controller im Standard-Selektionsmodus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuell aktiver Modus.
    pub fn mode(&self) -> &ActiveMode {
        &self.mode
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Angeforderte Modus-Wechsel werden direkt danach angewendet.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            AppCommand::ChangeMode(change) => state.change_mode(change),
            AppCommand::ApplyOptions { options } => {
                state.options = options;
                log::info!("Optionen übernommen");
            }
            other => match &mut self.mode {
                ActiveMode::DirectSelect(mode) => dispatch(mode, state, other),
                ActiveMode::SimpleSelect { .. } => {
                    log::debug!("{:?} im Modus simple_select ignoriert", other);
                }
            },
        }

        self.apply_pending_mode(state)
    }

    /// Führt ausstehende Modus-Wechsel aus; der alte Modus wird zuerst beendet.
    fn apply_pending_mode(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        while let Some(change) = state.take_pending_mode() {
            let previous = std::mem::take(&mut self.mode);
            if let ActiveMode::DirectSelect(mut mode) = previous {
                mode.stop(state);
            }

            match change {
                ModeChange::SimpleSelect { feature_ids } => {
                    state.ui.selected_feature_ids = feature_ids.clone();
                    state.clear_selected_coordinates();
                    self.mode = ActiveMode::SimpleSelect { feature_ids };
                }
                ModeChange::DirectSelect(options) => {
                    let mode = DirectSelectMode::setup(state, options)
                        .context("Direct-Select konnte nicht gestartet werden")?;
                    self.mode = ActiveMode::DirectSelect(mode);
                }
            }
            log::info!("Modus gewechselt: {}", self.mode.name());
        }
        Ok(())
    }

    /// Anzeige-Features aller Features im Store.
    ///
    /// Im Direct-Select liefert der Modus das Overlay; sonst werden die
    /// selektierten Features als aktiv markiert.
    pub fn display_features(&self, state: &mut AppState) -> Vec<GeoJsonFeature> {
        let ids: Vec<String> = state.features.keys().cloned().collect();
        match &self.mode {
            ActiveMode::DirectSelect(mode) => {
                let mut out = Vec::new();
                for id in &ids {
                    out.extend(mode.display_features(state, id));
                }
                out
            }
            ActiveMode::SimpleSelect { feature_ids } => ids
                .iter()
                .filter_map(|id| state.features.get(id))
                .map(|feature| {
                    let mut gj = feature.to_geojson();
                    let active = feature_ids.contains(&feature.id);
                    gj.properties
                        .insert("active".into(), Value::from(active_state(active)));
                    gj
                })
                .collect(),
        }
    }
}

fn dispatch(mode: &mut DirectSelectMode, state: &mut AppState, command: AppCommand) {
    match command {
        AppCommand::PointerDown { event } => mode.on_pointer_down(state, &event),
        AppCommand::Drag { event } => mode.on_drag(state, &event),
        AppCommand::PointerUp { .. } => mode.on_pointer_up(state),
        AppCommand::PointerMove { .. } => mode.on_pointer_move(state),
        AppCommand::PointerOut => mode.on_pointer_out(state),
        AppCommand::Click { event } => mode.on_click(state, &event),
        AppCommand::Tap { event } => mode.on_tap(state, &event),
        AppCommand::Trash => mode.on_trash(state),
        AppCommand::Cancel => mode.on_cancel(state),
        AppCommand::ChangeMode(_) | AppCommand::ApplyOptions { .. } => {}
    }
}
