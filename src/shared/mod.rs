//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Geometrie, die von `app`, `render` und `ui`
//! gemeinsam genutzt werden.

pub mod geometry;
pub mod options;

pub use options::TutorOptions;
