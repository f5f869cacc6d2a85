//! Arc Tutor.
//!
//! Rechentrainer für Additionen mit Zehnerübergang: Aufgaben werden als
//! Bögen am Zahlenstrahl dargestellt und schrittweise gelöst.

use arc_tutor::{ui, AppController, AppIntent, AppState, TutorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Arc Tutor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([640.0, 440.0])
                .with_title("Arc Tutor"),
            ..Default::default()
        };

        eframe::run_native(
            "Arc Tutor",
            options,
            Box::new(|_cc| Ok(Box::new(TutorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TutorApp {
    state: AppState,
    controller: AppController,
}

impl TutorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = TutorOptions::config_path();
        let tutor_options = TutorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(tutor_options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for TutorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        // Zustandsänderungen sofort sichtbar machen (Folgeschritt, Fehler-Darstellung)
        if has_events {
            ctx.request_repaint();
        }
    }
}

impl TutorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::collect_keyboard_intents(
            ctx,
            self.state.tutor.is_some(),
        ));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::render_board(ctx, &mut self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
