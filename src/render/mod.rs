//! Zeichen-Layer: Pfad-Builder, Canvas-Schnittstelle und SVG-Dokumentmodell.
//!
//! Kennt weder egui noch den Tutor; die View spricht ausschließlich
//! über das [`Canvas`]-Trait mit der Zeichenfläche.

pub mod canvas;
pub mod path;
pub mod svg_canvas;

pub use canvas::{ArcGeometry, ArcHandle, Canvas, CanvasCall, RecordingCanvas};
pub use path::{PathBuilder, PathCommand};
pub use svg_canvas::{arrow_path, ArcElement, SvgCanvas, SvgElement, SvgStyle, TextElement};
