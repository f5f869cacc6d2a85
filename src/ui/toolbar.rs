//! Toolbar mit Aufgaben- und Export-Aktionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .button("Neue Aufgabe")
                .on_hover_text("Strg+N")
                .clicked()
            {
                events.push(AppIntent::NewTaskRequested);
            }

            ui.separator();

            let has_task = state.tutor.is_some();
            if ui
                .add_enabled(has_task, egui::Button::new("SVG exportieren…"))
                .on_hover_text("Strg+E")
                .clicked()
            {
                events.push(AppIntent::ExportSvgRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });
    });

    events
}
