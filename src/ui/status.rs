//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, StatusLevel};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match (&state.tutor, state.view.step()) {
                (Some(tutor), Some(step)) => {
                    ui.label(format!("Aufgabe: {}?", tutor.task()));
                    ui.separator();
                    ui.label(format!("Schritt: {}", step));
                }
                _ => {
                    ui.label("Keine Aufgabe");
                }
            }

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                match msg.level {
                    StatusLevel::Info => {
                        ui.label(msg.text.as_str());
                    }
                    StatusLevel::Warning => {
                        ui.label(
                            egui::RichText::new(format!("⚠ {}", msg.text))
                                .color(egui::Color32::YELLOW),
                        );
                    }
                }
            }
        });
    });
}
