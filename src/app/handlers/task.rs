//! Handler für Aufgabenstart und Eingaben.

use crate::app::{AppState, StatusMessage, Tutor};
use crate::core::Task;

/// Zieht eine zufällige Aufgabe und startet sie.
pub fn generate(state: &mut AppState) -> anyhow::Result<()> {
    let task = state.generator.next_task();
    start_task(state, task)
}

/// Startet eine bestimmte Aufgabe.
pub fn start(state: &mut AppState, a: i32, b: i32) -> anyhow::Result<()> {
    start_task(state, Task::new(a, b))
}

/// Ersetzt Tutor und View vollständig; bei ungültiger Aufgabe bleibt der
/// bisherige Zustand erhalten.
fn start_task(state: &mut AppState, task: Task) -> anyhow::Result<()> {
    let mut view = AppState::fresh_view(&state.options);
    let mut tutor = Tutor::new(task);

    if let Err(e) = tutor.start(&mut view) {
        state.ui.status_message = Some(StatusMessage::warning(e.to_string()));
        return Err(e);
    }

    state.view = view;
    state.tutor = Some(tutor);
    state.ui.status_message = None;
    Ok(())
}

/// Reicht eine Eingabe an die View des aktiven Tutors weiter.
pub fn apply_input(state: &mut AppState, value: &str) {
    let Some(tutor) = state.tutor.as_mut() else {
        log::debug!("Eingabe ohne aktive Aufgabe ignoriert");
        return;
    };
    state.view.on_input(tutor, value);
}
