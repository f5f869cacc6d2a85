//! Globale Tastenkombinationen.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Strg+N: neue Aufgabe, Strg+E: SVG-Export, Strg+Q: Beenden.
pub fn collect_keyboard_intents(ctx: &egui::Context, has_task: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_n_pressed, key_e_pressed, key_q_pressed) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::E),
            i.key_pressed(egui::Key::Q),
        )
    });

    if !modifiers.command {
        return events;
    }

    if key_n_pressed {
        events.push(AppIntent::NewTaskRequested);
    }

    if key_e_pressed && has_task {
        events.push(AppIntent::ExportSvgRequested);
    }

    if key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
