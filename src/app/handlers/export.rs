//! Handler für den SVG-Export der aktuellen Zeichnung.

use crate::app::{AppState, StatusMessage};
use anyhow::Context;

/// Öffnet den SVG-Speicherdialog im nächsten Frame.
pub fn request_dialog(state: &mut AppState) {
    state.ui.show_svg_export_dialog = true;
}

/// Schreibt das aktuelle SVG-Dokument nach `path`.
pub fn export_svg(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let svg = state.view.canvas().to_svg_string()?;
    std::fs::write(path, svg)
        .with_context(|| format!("SVG konnte nicht geschrieben werden: {}", path))?;

    log::info!("Zeichnung exportiert nach: {}", path);
    state.ui.status_message = Some(StatusMessage::info(format!("Exportiert: {}", path)));
    state.ui.last_export_path = Some(path.to_owned());
    Ok(())
}
