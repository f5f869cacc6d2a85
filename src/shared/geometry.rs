//! Reine Geometrie-Funktionen für quadratische Bézier-Kurven.
//!
//! Layer-neutral: wird von `render` (Canvas) und `ui` (Painter) genutzt.

use glam::Vec2;

/// Anzahl der Stützstellen für Längen-Tabellen.
const LUT_SAMPLES: usize = 256;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Tangentenrichtung einer quadratischen Bézier-Kurve bei `t` (nicht normiert).
pub fn quadratic_bezier_tangent(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// Punkt bei einem Anteil `fraction ∈ [0, 1]` der Bogenlänge.
pub fn point_at_length_fraction(eval: impl Fn(f32) -> Vec2, fraction: f32) -> Vec2 {
    let start = eval(0.0);
    let mut arc_lengths = Vec::with_capacity(LUT_SAMPLES + 1);
    let mut prev = start;
    let mut cumulative = 0.0f32;
    arc_lengths.push(0.0f32);
    for i in 1..=LUT_SAMPLES {
        let p = eval(i as f32 / LUT_SAMPLES as f32);
        cumulative += prev.distance(p);
        arc_lengths.push(cumulative);
        prev = p;
    }

    if cumulative < f32::EPSILON {
        return start;
    }

    let target_length = fraction.clamp(0.0, 1.0) * cumulative;
    let idx = arc_lengths
        .partition_point(|&len| len < target_length)
        .clamp(1, LUT_SAMPLES);

    let len_before = arc_lengths[idx - 1];
    let len_after = arc_lengths[idx];
    let frac = if (len_after - len_before).abs() > f32::EPSILON {
        (target_length - len_before) / (len_after - len_before)
    } else {
        0.0
    };

    eval(((idx - 1) as f32 + frac) / LUT_SAMPLES as f32)
}
