//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Button "Neue Aufgabe" gedrückt
    NewTaskRequested,
    /// Text im Eingabefeld geändert (jeder Tastendruck)
    InputChanged { value: String },
    /// SVG-Export angefordert (zeigt Dateidialog)
    ExportSvgRequested,
    /// Speicherpfad für den SVG-Export gewählt
    SvgExportPathSelected { path: String },
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zufällige Aufgabe ziehen und starten
    GenerateTask,
    /// Bestimmte Aufgabe starten
    StartTask { a: i32, b: i32 },
    /// Eingabe an den aktiven Tutor weiterreichen
    ApplyInput { value: String },
    /// SVG-Speicherdialog öffnen
    RequestSvgExportDialog,
    /// Zeichnung als SVG-Datei schreiben
    ExportSvg { path: String },
    /// Anwendung zum Beenden markieren
    RequestExit,
}
