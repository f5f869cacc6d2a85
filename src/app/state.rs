//! Application State: zentrale Datenhaltung.

use super::tutor::Tutor;
use super::view::{View, ViewLayout};
use super::CommandLog;
use crate::core::TaskGenerator;
use crate::render::SvgCanvas;
use crate::shared::TutorOptions;

/// Art einer Statusnachricht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Nachricht für die Statusleiste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Statusnachricht für die Statusleiste (z.B. Fehler, Export)
    pub status_message: Option<StatusMessage>,
    /// SVG-Speicherdialog im nächsten Frame öffnen
    pub show_svg_export_dialog: bool,
    /// Zuletzt exportierte Datei
    pub last_export_path: Option<String>,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Laufzeit-Optionen
    pub options: TutorOptions,
    /// Aufgaben-Generator
    pub generator: TaskGenerator,
    /// Aktiver Tutor (None bis zur ersten Aufgabe)
    pub tutor: Option<Tutor>,
    /// View über dem SVG-Dokument
    pub view: View<SvgCanvas>,
    /// UI-Zustand
    pub ui: UiState,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(TutorOptions::default())
    }

    /// Erstellt einen Zustand mit deterministischem Aufgaben-Generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_options(TutorOptions {
            seed: Some(seed),
            ..TutorOptions::default()
        })
    }

    /// Erstellt einen Zustand aus geladenen Optionen.
    pub fn with_options(options: TutorOptions) -> Self {
        let generator = match options.seed {
            Some(seed) => TaskGenerator::with_seed(seed),
            None => TaskGenerator::new(),
        };
        let view = Self::fresh_view(&options);
        Self {
            options,
            generator,
            tutor: None,
            view,
            ui: UiState::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Neue, leere View gemäß den Optionen.
    pub fn fresh_view(options: &TutorOptions) -> View<SvgCanvas> {
        View::new(
            SvgCanvas::from_options(options),
            ViewLayout::from_options(options),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
