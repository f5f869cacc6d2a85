//! Schritt-Renderer: setzt Zeichenfläche, Titel und Eingabefeld pro Schritt.

use super::tutor::Tutor;
use crate::core::{Step, Task};
use crate::render::{ArcHandle, Canvas};
use crate::shared::TutorOptions;
use glam::Vec2;
use std::fmt;

/// Positionierung von Eingabefeld und Beschriftungen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    /// Versatz des Eingabefelds zur Bogenmitte
    pub input_offset: Vec2,
    /// Versatz der Beschriftung zur Bogenmitte
    pub label_offset: Vec2,
    /// Feste Position des Summen-Eingabefelds
    pub total_input_position: Vec2,
}

impl ViewLayout {
    pub fn from_options(options: &TutorOptions) -> Self {
        Self {
            input_offset: Vec2::from(options.input_offset),
            label_offset: Vec2::from(options.label_offset),
            total_input_position: Vec2::from(options.total_input_position),
        }
    }
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self::from_options(&TutorOptions::default())
    }
}

/// Abschluss der Titelzeile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleTail {
    /// Summe noch offen: `?`
    Question,
    /// Gelöste Aufgabe mit Summe
    Answer(i32),
}

/// Titelzeile `a + b = ?` mit Fehler-Hervorhebung der Summanden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleLine {
    pub a: i32,
    pub b: i32,
    pub a_error: bool,
    pub b_error: bool,
    pub tail: TitleTail,
    pub solved: bool,
}

impl TitleLine {
    /// Offene Aufgabe mit den aktuellen Fehler-Markierungen.
    pub fn question(task: &Task) -> Self {
        Self {
            a: task.a,
            b: task.b,
            a_error: task.errors.a,
            b_error: task.errors.b,
            tail: TitleTail::Question,
            solved: false,
        }
    }

    /// Vollständige Gleichung mit Summe.
    pub fn answered(task: &Task) -> Self {
        Self {
            tail: TitleTail::Answer(task.result()),
            solved: true,
            ..Self::question(task)
        }
    }

    /// HTML-Darstellung wie im Browser-Titel.
    pub fn to_html(&self) -> String {
        let mut task = Task::new(self.a, self.b);
        task.errors.a = self.a_error;
        task.errors.b = self.b_error;
        format!("{}{}", task.to_html(), self.tail)
    }
}

impl fmt::Display for TitleTail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleTail::Question => f.write_str("?"),
            TitleTail::Answer(sum) => write!(f, "{sum}"),
        }
    }
}

impl fmt::Display for TitleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Task::new(self.a, self.b), self.tail)
    }
}

/// Zustand des einzigen Texteingabefelds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputField {
    /// Aktueller Text
    pub value: String,
    /// Position (obere linke Ecke) auf der Zeichenfläche
    pub position: Vec2,
    /// Sichtbarkeit
    pub visible: bool,
    /// Fehler-Darstellung aktiv
    pub error: bool,
    /// Darstellung als Summenfeld in der Titelzeile
    pub total_entry: bool,
    /// Fokus beim nächsten Frame anfordern
    pub focus_requested: bool,
}

/// Rendert die vier Schritte auf einer [`Canvas`].
pub struct View<C: Canvas> {
    canvas: C,
    layout: ViewLayout,
    step: Option<Step>,
    title: Option<TitleLine>,
    input: InputField,
    first_arc: Option<ArcHandle>,
    second_arc: Option<ArcHandle>,
}

impl<C: Canvas> View<C> {
    /// Erstellt eine View mit verstecktem Eingabefeld.
    pub fn new(canvas: C, layout: ViewLayout) -> Self {
        Self {
            canvas,
            layout,
            step: None,
            title: None,
            input: InputField::default(),
            first_arc: None,
            second_arc: None,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn step(&self) -> Option<Step> {
        self.step
    }

    pub fn title(&self) -> Option<&TitleLine> {
        self.title.as_ref()
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    /// Liefert und löscht eine ausstehende Fokus-Anforderung.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.input.focus_requested)
    }

    /// Rendert einen Schritt für die Aufgabe des Tutors.
    pub fn render(&mut self, tutor: &Tutor, step: Step) {
        self.step = Some(step);
        let task = tutor.task();
        match step {
            Step::First => self.first_step(task),
            Step::Second => self.second_step(task),
            Step::Third => self.third_step(task),
            Step::Solved => self.solved(task),
        }
    }

    /// Input-Handler: fragt den Tutor, ob der Wert im aktuellen Schritt gültig ist.
    ///
    /// Ungültige Werte setzen die Fehler-Darstellung und aktualisieren den Titel.
    /// Ein verstecktes Eingabefeld nimmt keine Eingaben an.
    pub fn on_input(&mut self, tutor: &mut Tutor, value: &str) -> bool {
        let Some(step) = self.step else {
            return false;
        };
        if !self.input.visible {
            return false;
        }

        self.input.value = value.to_owned();
        let valid = tutor.is_valid_number(value, step, self);
        if !valid {
            self.input.error = true;
            self.title = Some(TitleLine::question(tutor.task()));
        }
        valid
    }

    fn first_step(&mut self, task: &Task) {
        self.canvas.clear();
        self.second_arc = None;

        self.title = Some(TitleLine::question(task));

        let arc = self.canvas.draw_arc(0, task.a);
        self.first_arc = Some(arc);
        self.move_input_to(arc);

        self.input.visible = true;
        self.input.total_entry = false;
        self.input.value.clear();
        self.input.focus_requested = true;
    }

    fn second_step(&mut self, task: &Task) {
        self.title = Some(TitleLine::question(task));

        if let Some(arc) = self.first_arc {
            self.stamp_value(arc);
        }

        let arc = self.canvas.draw_arc(task.a, task.result());
        self.second_arc = Some(arc);
        self.move_input_to(arc);
        self.input.value.clear();
    }

    fn third_step(&mut self, task: &Task) {
        self.title = Some(TitleLine::question(task));

        if let Some(arc) = self.second_arc {
            self.stamp_value(arc);
        }

        self.input.value.clear();
        self.input.error = false;
        self.input.total_entry = true;
        self.input.position = self.layout.total_input_position;
    }

    fn solved(&mut self, task: &Task) {
        self.input.visible = false;
        self.title = Some(TitleLine::answered(task));
    }

    fn move_input_to(&mut self, arc: ArcHandle) {
        self.input.error = false;
        match self.canvas.midpoint(arc) {
            Some(mid) => self.input.position = mid + self.layout.input_offset,
            None => log::warn!("Bogenmitte nicht verfügbar, Eingabefeld bleibt stehen"),
        }
    }

    /// Schreibt den eingegebenen Wert als Beschriftung über die Bogenmitte.
    fn stamp_value(&mut self, arc: ArcHandle) {
        match self.canvas.midpoint(arc) {
            Some(mid) => {
                let value = self.input.value.clone();
                self.canvas.draw_text(&value, mid + self.layout.label_offset);
            }
            None => log::warn!("Bogenmitte nicht verfügbar, Beschriftung entfällt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Axis, Task};
    use crate::render::{CanvasCall, RecordingCanvas};
    use approx::assert_relative_eq;

    fn view() -> View<RecordingCanvas> {
        View::new(RecordingCanvas::new(Axis::default()), ViewLayout::default())
    }

    #[test]
    fn test_new_view_hides_input() {
        let view = view();
        assert!(!view.input().visible);
        assert_eq!(view.step(), None);
        assert!(view.title().is_none());
    }

    #[test]
    fn test_first_step_clears_draws_and_positions_input() {
        let mut view = view();
        let tutor = Tutor::new(Task::new(7, 6));
        view.render(&tutor, Step::First);

        assert_eq!(
            view.canvas().calls(),
            &[CanvasCall::Clear, CanvasCall::DrawArc { start: 0, end: 7 }]
        );
        let input = view.input();
        assert!(input.visible);
        assert!(!input.error);
        assert!(input.focus_requested);
        assert_relative_eq!(input.position.x, 100.5 - 8.0, epsilon = 0.05);
        assert_relative_eq!(input.position.y, 277.75 - 23.0, epsilon = 0.05);
        assert_eq!(
            view.title().map(ToString::to_string).as_deref(),
            Some("7 + 6 = ?")
        );
    }

    #[test]
    fn test_focus_request_is_consumed_once() {
        let mut view = view();
        view.render(&Tutor::new(Task::new(6, 6)), Step::First);
        assert!(view.take_focus_request());
        assert!(!view.take_focus_request());
    }

    #[test]
    fn test_third_step_moves_input_to_fixed_total_position() {
        let mut view = view();
        let tutor = Tutor::new(Task::new(8, 5));
        view.render(&tutor, Step::First);
        view.render(&tutor, Step::Second);
        view.render(&tutor, Step::Third);

        let input = view.input();
        assert!(input.total_entry);
        assert_eq!(input.position, Vec2::new(270.0, 22.0));
        assert!(input.value.is_empty());
    }

    #[test]
    fn test_solved_hides_input_and_shows_sum() {
        let mut view = view();
        let tutor = Tutor::new(Task::new(9, 4));
        view.render(&tutor, Step::Solved);

        assert!(!view.input().visible);
        let title = view.title().expect("Titel gesetzt");
        assert!(title.solved);
        assert_eq!(title.to_string(), "9 + 4 = 13");
    }

    #[test]
    fn test_title_html_marks_errors() {
        let mut task = Task::new(7, 6);
        task.errors.a = true;
        assert_eq!(
            TitleLine::question(&task).to_html(),
            "<span class=\"error\">7</span> + <span class=\"\">6</span> = ?"
        );
    }
}
