//! Application-Layer: Controller, State, Events, Tutor und View.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod state;
pub mod tutor;
pub mod view;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, StatusLevel, StatusMessage, UiState};
pub use tutor::Tutor;
pub use view::{InputField, TitleLine, TitleTail, View, ViewLayout};
