//! Direct-Select Replay.
//!
//! Lädt eine GeoJSON-FeatureCollection, spielt eine JSON-Liste von
//! `AppIntent`s durch den Controller und gibt alle gemeldeten Events sowie
//! die resultierende FeatureCollection als JSON auf stdout aus.
//!
//! Aufruf: `direct-select-replay <features.geojson> <script.json> [options.toml]`

use anyhow::Context;
use geo_direct_select::{AppController, AppIntent, AppState, EditorOptions, FeatureCollection};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    ReplayRunner::run()
}

struct ReplayRunner;

impl ReplayRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Direct-Select Replay v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let args: Vec<String> = std::env::args().skip(1).collect();
        let (features_path, script_path) = match args.as_slice() {
            [features, script, ..] => (PathBuf::from(features), PathBuf::from(script)),
            _ => anyhow::bail!(
                "Aufruf: direct-select-replay <features.geojson> <script.json> [options.toml]"
            ),
        };
        let options = match args.get(2) {
            Some(path) => EditorOptions::load_from_file(Path::new(path)),
            None => EditorOptions::load_from_file(&EditorOptions::config_path()),
        };

        let collection: FeatureCollection = read_json(&features_path)?;
        let intents: Vec<AppIntent> = read_json(&script_path)?;

        let mut state = AppState::new();
        state.options = options;
        state
            .load_collection(collection)
            .context("FeatureCollection enthält ungültige Features")?;

        let mut controller = AppController::new();
        for (index, intent) in intents.into_iter().enumerate() {
            if let Err(e) = controller.handle_intent(&mut state, intent) {
                log::error!("Intent #{} fehlgeschlagen: {:#}", index, e);
            }
            for event in state.take_events() {
                println!("{}", serde_json::to_string(&event)?);
            }
        }

        log::info!(
            "Replay beendet: Modus {}, {} Features",
            controller.mode().name(),
            state.feature_count()
        );
        log::info!("Ausgeführte Commands: {}", state.command_log.summary());
        println!("{}", serde_json::to_string_pretty(&state.to_collection())?);
        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Ungültiges JSON in {}", path.display()))
}
