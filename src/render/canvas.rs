//! Zeichen-Schnittstelle des Tutors und Bogengeometrie am Zahlenstrahl.

use super::path::PathBuilder;
use crate::core::Axis;
use crate::shared::geometry::{point_at_length_fraction, quadratic_bezier};
use glam::Vec2;

/// Verweis auf einen gezeichneten Bogen.
///
/// Nach `Canvas::clear` sind alle älteren Handles ungültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcHandle {
    pub(crate) generation: u32,
    pub(crate) index: usize,
}

/// Zeichenfläche mit genau den vier Operationen, die die View benötigt.
pub trait Canvas {
    /// Entfernt alle gezeichneten Elemente (Definitionen bleiben erhalten).
    fn clear(&mut self);
    /// Zeichnet einen Bogen von Wert `start` nach Wert `end` mit Pfeilspitze.
    fn draw_arc(&mut self, start: i32, end: i32) -> ArcHandle;
    /// Punkt auf halber Bogenlänge; `None` für ungültige Handles.
    fn midpoint(&self, arc: ArcHandle) -> Option<Vec2>;
    /// Zentrierte Beschriftung an `position` (Grundlinie).
    fn draw_text(&mut self, text: &str, position: Vec2);
}

/// Kontrollpunkte eines Bogens zwischen zwei Werten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl ArcGeometry {
    /// Bogen von `start` nach `end`; die Höhe wächst mit der Spannweite.
    pub fn between(axis: &Axis, start: i32, end: i32) -> Self {
        let start_x = axis.value_to_x(start);
        let distance = axis.step * (end - start) as f32;
        let end_x = start_x + distance;
        Self {
            start: Vec2::new(start_x, axis.y),
            control: Vec2::new(start_x + distance / 2.0, axis.y - distance / 2.0),
            end: Vec2::new(end_x, axis.y),
        }
    }

    /// Punkt auf der Kurve bei Parameter `t`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        quadratic_bezier(self.start, self.control, self.end, t)
    }

    /// Punkt auf halber Bogenlänge.
    pub fn midpoint(&self) -> Vec2 {
        point_at_length_fraction(|t| self.point_at(t), 0.5)
    }

    /// SVG-Pfad `M start Q control end`.
    pub fn to_path(&self) -> PathBuilder {
        PathBuilder::new()
            .move_to(self.start.x, self.start.y)
            .curve_to(self.control.x, self.control.y, self.end.x, self.end.y)
    }
}

/// Aufgezeichneter Aufruf am [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Clear,
    DrawArc { start: i32, end: i32 },
    DrawText { text: String, position: Vec2 },
}

/// Test-Double: zeichnet nichts, merkt sich alle Aufrufe.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    axis: Axis,
    generation: u32,
    arcs: Vec<ArcGeometry>,
    calls: Vec<CanvasCall>,
}

impl RecordingCanvas {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Alle Aufrufe in Reihenfolge.
    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    /// Nur die Beschriftungen seit dem letzten `clear`.
    pub fn texts(&self) -> Vec<&str> {
        let since_clear = self
            .calls
            .iter()
            .rposition(|c| *c == CanvasCall::Clear)
            .map_or(0, |i| i + 1);
        self.calls[since_clear..]
            .iter()
            .filter_map(|c| match c {
                CanvasCall::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.arcs.clear();
        self.calls.push(CanvasCall::Clear);
    }

    fn draw_arc(&mut self, start: i32, end: i32) -> ArcHandle {
        self.arcs.push(ArcGeometry::between(&self.axis, start, end));
        self.calls.push(CanvasCall::DrawArc { start, end });
        ArcHandle {
            generation: self.generation,
            index: self.arcs.len() - 1,
        }
    }

    fn midpoint(&self, arc: ArcHandle) -> Option<Vec2> {
        if arc.generation != self.generation {
            return None;
        }
        self.arcs.get(arc.index).map(ArcGeometry::midpoint)
    }

    fn draw_text(&mut self, text: &str, position: Vec2) {
        self.calls.push(CanvasCall::DrawText {
            text: text.to_owned(),
            position,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arc_geometry_from_axis() {
        let arc = ArcGeometry::between(&Axis::default(), 0, 7);
        assert_eq!(arc.start, Vec2::new(34.0, 311.0));
        assert_eq!(arc.control, Vec2::new(100.5, 244.5));
        assert_eq!(arc.end, Vec2::new(167.0, 311.0));
        assert_eq!(arc.to_path().serialize(), "M 34 311 Q 100.5 244.5 167 311");
    }

    #[test]
    fn test_arc_midpoint_is_apex_of_symmetric_curve() {
        let arc = ArcGeometry::between(&Axis::default(), 7, 13);
        let mid = arc.midpoint();
        // distance = 114 → Scheitel bei x = 167 + 57, y = 311 - 114/4
        assert_relative_eq!(mid.x, 224.0, epsilon = 0.05);
        assert_relative_eq!(mid.y, 282.5, epsilon = 0.05);
    }

    #[test]
    fn test_recording_canvas_invalidates_handles_on_clear() {
        let mut canvas = RecordingCanvas::new(Axis::default());
        let arc = canvas.draw_arc(0, 6);
        assert!(canvas.midpoint(arc).is_some());

        canvas.clear();
        assert_eq!(canvas.midpoint(arc), None);
        assert_eq!(
            canvas.calls(),
            &[CanvasCall::DrawArc { start: 0, end: 6 }, CanvasCall::Clear]
        );
    }
}
