//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewTaskRequested => vec![AppCommand::GenerateTask],
        AppIntent::InputChanged { value } => {
            // Ohne laufende Aufgabe gibt es kein Eingabefeld
            if state.tutor.is_none() {
                return Vec::new();
            }
            vec![AppCommand::ApplyInput { value }]
        }
        AppIntent::ExportSvgRequested => vec![AppCommand::RequestSvgExportDialog],
        AppIntent::SvgExportPathSelected { path } => vec![AppCommand::ExportSvg { path }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
