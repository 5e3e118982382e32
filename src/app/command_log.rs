//! Command-Verlauf einer Editier-Session.
//!
//! Hält die letzten Commands für Diagnose und Tests und zählt zusätzlich
//! jede Command-Art über die gesamte Session, auch über das Kürzen hinaus.

use super::AppCommand;
use indexmap::IndexMap;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    totals: IndexMap<&'static str, usize>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Ab MAX_ENTRIES wird die ältere Hälfte verworfen; die Zähler bleiben.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
            log::debug!("Command-Log gekürzt auf {} Einträge", self.entries.len());
        }
        *self.totals.entry(command.kind()).or_insert(0) += 1;
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gehaltene Einträge, älteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl je Command-Art seit Session-Beginn, in Reihenfolge des ersten Auftretens.
    pub fn totals(&self) -> &IndexMap<&'static str, usize> {
        &self.totals
    }

    /// Einzeilige Zusammenfassung, z.B. `pointer_down=2 drag=5 pointer_up=2`.
    pub fn summary(&self) -> String {
        self.totals
            .iter()
            .map(|(kind, count)| format!("{kind}={count}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
