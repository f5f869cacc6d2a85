//! Builder für SVG-Pfadbeschreibungen (`d`-Attribut).

use glam::Vec2;
use std::fmt;

/// Einzelner Zeichenbefehl eines Pfads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo(Vec2),
    /// `L x y`
    LineTo(Vec2),
    /// `Q cx cy x y`
    QuadTo { control: Vec2, to: Vec2 },
}

/// Sammelt Zeichenbefehle; jede Methode gibt den Builder zurück.
///
/// ```
/// use arc_tutor::render::PathBuilder;
///
/// let d = PathBuilder::new().move_to(0.0, 0.0).line_to(8.0, 2.0).line_to(0.0, 4.0);
/// assert_eq!(d.serialize(), "M 0 0 L 8 2 L 0 4");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Vec2::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Vec2::new(x, y)));
        self
    }

    /// Quadratische Kurve mit Kontrollpunkt `(cx, cy)` nach `(x, y)`.
    pub fn curve_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: Vec2::new(cx, cy),
            to: Vec2::new(x, y),
        });
        self
    }

    /// Die bisher gesammelten Befehle.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Pfadbeschreibung, Tokens durch Leerzeichen getrennt.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::QuadTo { control, to } => {
                    write!(f, "Q {} {} {} {}", control.x, control.y, to.x, to.y)?
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_serializes_to_empty_string() {
        assert_eq!(PathBuilder::new().serialize(), "");
    }

    #[test]
    fn test_curve_tokens_and_fractional_numbers() {
        let path = PathBuilder::new()
            .move_to(34.0, 311.0)
            .curve_to(100.5, 244.5, 167.0, 311.0);
        assert_eq!(path.serialize(), "M 34 311 Q 100.5 244.5 167 311");
        assert_eq!(path.commands().len(), 2);
    }

    #[test]
    fn test_accepts_any_numbers() {
        let path = PathBuilder::new().move_to(-1.5, 0.0).line_to(f32::MAX, -0.25);
        assert!(path.serialize().starts_with("M -1.5 0 L "));
    }
}
