//! Zeichenfläche mit Titelzeile und schwebendem Eingabefeld.

use super::painter::{paint_axis, paint_document};
use crate::app::{AppIntent, AppState, TitleLine};
use crate::shared::TutorOptions;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 0, 0);
const SOLVED_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 140, 60);
const INPUT_WIDTH: f32 = 28.0;
const TOTAL_INPUT_WIDTH: f32 = 40.0;

/// Rendert die Zeichenfläche im Central-Panel und gibt erzeugte Events zurück.
pub fn render_board(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let size = egui::vec2(state.options.board_size[0], state.options.board_size[1]);
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 4.0, egui::Color32::WHITE);

        paint_axis(&painter, rect.min, &state.options);
        paint_document(&painter, rect.min, state.view.canvas());

        match state.view.title() {
            Some(title) => {
                // Im Summen-Schritt steht das Eingabefeld an der Stelle des `?`
                let show_tail = title.solved || !state.view.input().total_entry;
                render_title(ctx, rect.min, title, show_tail, &state.options);
            }
            None => {
                painter.text(
                    rect.center_top() + egui::vec2(0.0, 30.0),
                    egui::Align2::CENTER_CENTER,
                    "Neue Aufgabe starten (Strg+N)",
                    egui::FontId::proportional(state.options.title_font_size),
                    egui::Color32::GRAY,
                );
            }
        }

        if let Some(intent) = render_input(ctx, rect.min, state) {
            events.push(intent);
        }
    });

    events
}

/// Titel `a + b = ?` mit rot markierten Fehlern, grün wenn gelöst.
fn render_title(
    ctx: &egui::Context,
    origin: egui::Pos2,
    title: &TitleLine,
    show_tail: bool,
    options: &TutorOptions,
) {
    let pos = origin + egui::vec2(options.title_position[0], options.title_position[1]);
    let size = options.title_font_size;
    let base = if title.solved {
        SOLVED_COLOR
    } else {
        egui::Color32::BLACK
    };

    egui::Area::new(egui::Id::new("tutor_title"))
        .fixed_pos(pos)
        .interactable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                let part = |text: String, color: egui::Color32| {
                    egui::RichText::new(text).size(size).color(color).strong()
                };
                ui.label(part(
                    title.a.to_string(),
                    if title.a_error { ERROR_COLOR } else { base },
                ));
                ui.label(part(" + ".to_string(), base));
                ui.label(part(
                    title.b.to_string(),
                    if title.b_error { ERROR_COLOR } else { base },
                ));
                ui.label(part(" = ".to_string(), base));
                if show_tail {
                    ui.label(part(title.tail.to_string(), base));
                }
            });
        });
}

/// Eingabefeld an der von der View berechneten Position.
fn render_input(
    ctx: &egui::Context,
    origin: egui::Pos2,
    state: &mut AppState,
) -> Option<AppIntent> {
    if state.tutor.is_none() || !state.view.input().visible {
        return None;
    }

    let focus = state.view.take_focus_request();
    let input = state.view.input();
    let pos = origin + egui::vec2(input.position.x, input.position.y);
    let (font_size, width) = if input.total_entry {
        (state.options.title_font_size, TOTAL_INPUT_WIDTH)
    } else {
        (state.options.label_font_size, INPUT_WIDTH)
    };
    let color = if input.error {
        ERROR_COLOR
    } else {
        egui::Color32::BLACK
    };
    let mut value = input.value.clone();

    let mut intent = None;
    egui::Area::new(egui::Id::new("tutor_input"))
        .fixed_pos(pos)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let edit = egui::TextEdit::singleline(&mut value)
                .desired_width(width)
                .font(egui::FontId::proportional(font_size))
                .text_color(color);
            let response = ui.add(edit);
            if focus {
                response.request_focus();
            }
            if response.changed() {
                intent = Some(AppIntent::InputChanged {
                    value: value.clone(),
                });
            }
        });
    intent
}
