//! UI-Komponenten: Toolbar, Zeichenfläche, Status-Bar, Dialoge, Shortcuts.

pub mod board;
pub mod dialogs;
mod keyboard;
pub mod painter;
pub mod status;
pub mod toolbar;

pub use board::render_board;
pub use dialogs::handle_file_dialogs;
pub use keyboard::collect_keyboard_intents;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
