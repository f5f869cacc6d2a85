//! Zahlenstrahl: Abbildung eines Zahlenwerts auf eine horizontale Pixel-Position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ursprung und Schrittweite des Zahlenstrahls auf der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// X-Position des Werts 0
    pub x: f32,
    /// Y-Position des Zahlenstrahls
    pub y: f32,
    /// Pixel pro Einheit
    pub step: f32,
}

impl Axis {
    /// Standard-Zahlenstrahl passend zur Zeichenfläche.
    pub const DEFAULT: Axis = Axis {
        x: 34.0,
        y: 311.0,
        step: 19.0,
    };

    /// X-Position eines Werts.
    pub fn value_to_x(&self, value: i32) -> f32 {
        self.x + value as f32 * self.step
    }

    /// Punkt eines Werts auf dem Zahlenstrahl.
    pub fn point(&self, value: i32) -> Vec2 {
        Vec2::new(self.value_to_x(value), self.y)
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_value_to_x() {
        let axis = Axis::default();
        assert_relative_eq!(axis.value_to_x(0), 34.0);
        assert_relative_eq!(axis.value_to_x(7), 167.0);
        assert_relative_eq!(axis.point(13).y, 311.0);
    }
}
