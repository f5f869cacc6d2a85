//! Zentrale Konfiguration für den Rechentrainer.
//!
//! `TutorOptions` enthält alle zur Laufzeit einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Axis;
use serde::{Deserialize, Serialize};

// ── Zeichenfläche ───────────────────────────────────────────────────

/// Größe der Zeichenfläche in Pixeln.
pub const BOARD_SIZE: [f32; 2] = [600.0, 340.0];
/// Größter Wert, für den ein Teilstrich gezeichnet wird.
pub const AXIS_MAX_VALUE: i32 = 20;
/// Strichfarbe der Bögen (RGBA: Rot).
pub const ARC_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Strichstärke der Bögen.
pub const ARC_STROKE_WIDTH: f32 = 1.0;
/// Schriftgröße der Beschriftungen.
pub const LABEL_FONT_SIZE: f32 = 16.0;

// ── Eingabefeld ─────────────────────────────────────────────────────

/// Versatz des Eingabefelds relativ zur Bogenmitte.
pub const INPUT_OFFSET: [f32; 2] = [-8.0, -23.0];
/// Versatz einer Beschriftung relativ zur Bogenmitte.
pub const LABEL_OFFSET: [f32; 2] = [0.0, -5.0];
/// Feste Position des Summen-Eingabefelds (neben dem Titel).
pub const TOTAL_INPUT_POSITION: [f32; 2] = [270.0, 22.0];
/// Position des Titels auf der Zeichenfläche.
pub const TITLE_POSITION: [f32; 2] = [190.0, 22.0];
/// Schriftgröße von Titel und Summenfeld.
pub const TITLE_FONT_SIZE: f32 = 20.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `arc_tutor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorOptions {
    /// Zahlenstrahl (Ursprung und Schrittweite)
    pub axis: Axis,
    /// Größe der Zeichenfläche
    pub board_size: [f32; 2],
    /// Teilstriche bis zu diesem Wert zeichnen
    pub axis_max_value: i32,
    /// Farbe der Bögen (RGBA)
    pub arc_color: [f32; 4],
    /// Strichstärke der Bögen
    pub arc_stroke_width: f32,
    /// Schriftgröße der Beschriftungen
    pub label_font_size: f32,
    /// Versatz Eingabefeld ↔ Bogenmitte
    pub input_offset: [f32; 2],
    /// Versatz Beschriftung ↔ Bogenmitte
    pub label_offset: [f32; 2],
    /// Feste Position des Summen-Eingabefelds
    pub total_input_position: [f32; 2],
    /// Position des Titels
    pub title_position: [f32; 2],
    /// Schriftgröße von Titel und Summenfeld
    pub title_font_size: f32,
    /// Fester Seed für den Aufgaben-Generator (reproduzierbare Sitzungen)
    pub seed: Option<u64>,
}

impl Default for TutorOptions {
    fn default() -> Self {
        Self {
            axis: Axis::DEFAULT,
            board_size: BOARD_SIZE,
            axis_max_value: AXIS_MAX_VALUE,
            arc_color: ARC_COLOR,
            arc_stroke_width: ARC_STROKE_WIDTH,
            label_font_size: LABEL_FONT_SIZE,
            input_offset: INPUT_OFFSET,
            label_offset: LABEL_OFFSET,
            total_input_position: TOTAL_INPUT_POSITION,
            title_position: TITLE_POSITION,
            title_font_size: TITLE_FONT_SIZE,
            seed: None,
        }
    }
}

impl TutorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("arc_tutor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("arc_tutor.toml")
    }
}
