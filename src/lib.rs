//! Arc Tutor Library.
//! Kern (Aufgabe, Tutor, View, Canvas) als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, StatusLevel, StatusMessage, Tutor, UiState, View,
    ViewLayout,
};
pub use core::{Axis, FieldErrors, Solution, Step, Task, TaskField, TaskGenerator};
pub use render::{Canvas, CanvasCall, PathBuilder, RecordingCanvas, SvgCanvas};
pub use shared::TutorOptions;
