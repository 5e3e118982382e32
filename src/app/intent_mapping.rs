//! Mapping von Host-Intents auf mutierende App-Commands.

use super::host::ModeChange;
use super::{AppCommand, AppIntent};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Touch-Events laufen über dieselben Commands wie Maus-Events; nur der Tap
/// bleibt eigenständig, weil er keinen offenen Drag beendet.
pub fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::EnterDirectSelectRequested { options } => {
            vec![AppCommand::ChangeMode(ModeChange::DirectSelect(options))]
        }
        AppIntent::ExitToSimpleSelectRequested => {
            vec![AppCommand::ChangeMode(ModeChange::simple_select())]
        }
        AppIntent::PointerDown(event) | AppIntent::TouchStart(event) => {
            vec![AppCommand::PointerDown { event }]
        }
        AppIntent::Drag(event) => vec![AppCommand::Drag { event }],
        AppIntent::PointerUp(event) | AppIntent::TouchEnd(event) => {
            vec![AppCommand::PointerUp { event }]
        }
        AppIntent::PointerMove(event) => vec![AppCommand::PointerMove { event }],
        AppIntent::PointerOut => vec![AppCommand::PointerOut],
        AppIntent::Click(event) => vec![AppCommand::Click { event }],
        AppIntent::Tap(event) => vec![AppCommand::Tap { event }],
        AppIntent::KeyPressed { key } => match key.as_str() {
            "Backspace" | "Delete" => vec![AppCommand::Trash],
            "Escape" => vec![AppCommand::Cancel],
            _ => vec![],
        },
        AppIntent::TrashRequested => vec![AppCommand::Trash],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
