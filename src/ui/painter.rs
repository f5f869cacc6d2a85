//! Zeichnet das SVG-Dokumentmodell mit dem egui-Painter.

use crate::render::svg_canvas::ARROW_TIP;
use crate::render::{arrow_path, PathCommand, SvgCanvas, SvgElement};
use crate::shared::geometry::quadratic_bezier_tangent;
use crate::shared::TutorOptions;
use glam::Vec2;

/// Farbe aus RGBA-Floats.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(rgba[0]),
        channel(rgba[1]),
        channel(rgba[2]),
        channel(rgba[3]),
    )
}

fn to_pos(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + p.y)
}

/// Punkte des Pfeil-Markers, ausgerichtet entlang `direction` mit der Spitze in `tip`.
///
/// Entspricht `orient="auto"` und `markerUnits="strokeWidth"`.
pub fn arrow_points(tip: Vec2, direction: Vec2, stroke_width: f32) -> Vec<Vec2> {
    let dir = direction.normalize_or(Vec2::X);
    arrow_path()
        .commands()
        .iter()
        .filter_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::QuadTo { .. } => None,
        })
        .map(|p| tip + dir.rotate((p - ARROW_TIP) * stroke_width))
        .collect()
}

/// Zahlenstrahl mit Teilstrichen und Zahlen.
pub fn paint_axis(painter: &egui::Painter, origin: egui::Pos2, options: &TutorOptions) {
    let axis = options.axis;
    let stroke = egui::Stroke::new(1.0, egui::Color32::DARK_GRAY);
    let max = options.axis_max_value.max(0);

    painter.line_segment(
        [
            to_pos(origin, axis.point(0)),
            to_pos(origin, axis.point(max)),
        ],
        stroke,
    );

    for value in 0..=max {
        let p = axis.point(value);
        let tick = if value % 5 == 0 { 6.0 } else { 3.0 };
        painter.line_segment(
            [
                to_pos(origin, p - Vec2::new(0.0, tick)),
                to_pos(origin, p + Vec2::new(0.0, tick)),
            ],
            stroke,
        );
        painter.text(
            to_pos(origin, p + Vec2::new(0.0, 8.0)),
            egui::Align2::CENTER_TOP,
            value.to_string(),
            egui::FontId::proportional(11.0),
            egui::Color32::GRAY,
        );
    }
}

/// Zeichnet alle Elemente der Hauptgruppe.
pub fn paint_document(painter: &egui::Painter, origin: egui::Pos2, canvas: &SvgCanvas) {
    let style = canvas.style();
    let stroke = egui::Stroke::new(style.arc_stroke_width, to_color32(style.arc_color));

    for element in canvas.elements() {
        match element {
            SvgElement::Arc(arc) => {
                let g = arc.geometry;
                painter.add(egui::epaint::QuadraticBezierShape::from_points_stroke(
                    [
                        to_pos(origin, g.start),
                        to_pos(origin, g.control),
                        to_pos(origin, g.end),
                    ],
                    false,
                    egui::Color32::TRANSPARENT,
                    stroke,
                ));

                let direction = quadratic_bezier_tangent(g.start, g.control, g.end, 1.0);
                let points: Vec<egui::Pos2> =
                    arrow_points(g.end, direction, style.arc_stroke_width)
                        .into_iter()
                        .map(|p| to_pos(origin, p))
                        .collect();
                painter.add(egui::Shape::line(points, stroke));
            }
            SvgElement::Text(text) => {
                painter.text(
                    to_pos(origin, text.position),
                    egui::Align2::CENTER_BOTTOM,
                    &text.text,
                    egui::FontId::proportional(style.font_size),
                    egui::Color32::BLACK,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_arrow_tip_lands_on_curve_end() {
        let tip = Vec2::new(167.0, 311.0);
        let points = arrow_points(tip, Vec2::new(1.0, 1.0), 1.0);
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[1].x, tip.x, epsilon = 1e-4);
        assert_relative_eq!(points[1].y, tip.y, epsilon = 1e-4);
    }

    #[test]
    fn test_arrow_points_backwards_along_direction() {
        let tip = Vec2::new(100.0, 50.0);
        let points = arrow_points(tip, Vec2::X, 2.0);
        // Schenkel liegen hinter der Spitze (kleineres x), symmetrisch zur Richtung
        assert_relative_eq!(points[0].x, 84.0, epsilon = 1e-4);
        assert_relative_eq!(points[0].y, 46.0, epsilon = 1e-4);
        assert_relative_eq!(points[2].y, 54.0, epsilon = 1e-4);
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(
            to_color32([1.0, 0.0, 0.0, 1.0]),
            egui::Color32::from_rgb(255, 0, 0)
        );
    }
}
