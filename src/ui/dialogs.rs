//! Native Datei-Dialoge.

use crate::app::{AppIntent, UiState};

const DEFAULT_EXPORT_NAME: &str = "aufgabe.svg";

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui_state.show_svg_export_dialog {
        ui_state.show_svg_export_dialog = false;

        let default_name = ui_state
            .last_export_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or(DEFAULT_EXPORT_NAME);

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SvgExportPathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
