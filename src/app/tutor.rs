//! Tutor: Zustandsmaschine der geführten Eingabe.
//!
//! Ablauf `First → Second → Third → Solved`, linear und ohne Rücksprung.
//! Jede korrekte Eingabe lässt die View den Folgeschritt rendern; falsche
//! Eingaben ändern den Schritt nicht.

use super::view::View;
use crate::core::{parse_int, Solution, Step, Task, TaskField};
use crate::render::Canvas;
use anyhow::{bail, Result};

/// Hält die aktuelle Aufgabe und die Lösung des Lernenden.
#[derive(Debug, Clone)]
pub struct Tutor {
    task: Task,
    solution: Solution,
}

impl Tutor {
    /// Erstellt einen Tutor für eine Aufgabe (noch nicht gestartet).
    pub fn new(task: Task) -> Self {
        Self {
            task,
            solution: Solution::new(),
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Prüft die Aufgabe und rendert den ersten Schritt.
    ///
    /// Gibt einen Fehler zurück, wenn die Aufgabe außerhalb der Grenzen liegt.
    pub fn start<C: Canvas>(&mut self, view: &mut View<C>) -> Result<()> {
        if !self.task.is_valid() {
            bail!("The task [{}] is invalid!", self.task);
        }

        log::info!("Neue Aufgabe: {}?", self.task);
        self.solution = Solution::new();
        view.render(self, Step::First);
        Ok(())
    }

    /// Prüft eine Eingabe für den gegebenen Schritt und schaltet bei Erfolg weiter.
    pub fn is_valid_number<C: Canvas>(&mut self, raw: &str, step: Step, view: &mut View<C>) -> bool {
        let number = parse_int(raw);
        let result = match step {
            Step::First => self.check_field(TaskField::A, number),
            Step::Second => self.check_field(TaskField::B, number),
            Step::Third => {
                self.task.equal(&self.solution)
                    && number == Some(i64::from(self.task.result()))
            }
            Step::Solved => false,
        };

        log::debug!("Eingabe {:?} in Schritt '{}': {}", raw, step, result);

        if result {
            if let Some(next) = step.next() {
                if next == Step::Solved {
                    log::info!("Aufgabe gelöst: {}{}", self.task, self.task.result());
                }
                view.render(self, next);
            }
        }
        result
    }

    fn check_field(&mut self, field: TaskField, number: Option<i64>) -> bool {
        self.solution.set(field, number);
        self.task.check(field, &self.solution)
    }
}
