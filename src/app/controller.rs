//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Aufgaben ===
            AppCommand::GenerateTask => handlers::task::generate(state)?,
            AppCommand::StartTask { a, b } => handlers::task::start(state, a, b)?,
            AppCommand::ApplyInput { value } => handlers::task::apply_input(state, &value),

            // === SVG-Export ===
            AppCommand::RequestSvgExportDialog => handlers::export::request_dialog(state),
            AppCommand::ExportSvg { path } => handlers::export::export_svg(state, &path)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }
}
