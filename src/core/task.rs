//! Rechenaufgabe `a + b` und die parallel mitgeführte Lösung des Lernenden.

use std::fmt;

/// Kleinster erlaubter erster Summand.
pub const A_MIN: i32 = 6;
/// Größter erlaubter erster Summand.
pub const A_MAX: i32 = 9;
/// Kleinste erlaubte Summe.
pub const SUM_MIN: i32 = 11;
/// Größte erlaubte Summe.
pub const SUM_MAX: i32 = 14;

/// Feld einer Aufgabe, das einzeln geprüft wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    /// Erster Summand
    A,
    /// Zweiter Summand
    B,
}

/// Fehler-Markierungen pro Feld (gesetzt durch [`Task::check`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub a: bool,
    pub b: bool,
}

impl FieldErrors {
    /// Liefert die Markierung für ein Feld.
    pub fn get(&self, field: TaskField) -> bool {
        match field {
            TaskField::A => self.a,
            TaskField::B => self.b,
        }
    }

    fn set(&mut self, field: TaskField, value: bool) {
        match field {
            TaskField::A => self.a = value,
            TaskField::B => self.b = value,
        }
    }
}

/// Die vom Lernenden bisher eingegebenen Werte.
///
/// `None` steht für eine nicht als Zahl lesbare Eingabe und ist
/// mit keinem Aufgabenwert gleich.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solution {
    pub a: Option<i64>,
    pub b: Option<i64>,
}

impl Solution {
    /// Erstellt eine leere Lösung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert den eingegebenen Wert eines Feldes.
    pub fn get(&self, field: TaskField) -> Option<i64> {
        match field {
            TaskField::A => self.a,
            TaskField::B => self.b,
        }
    }

    /// Setzt den eingegebenen Wert eines Feldes.
    pub fn set(&mut self, field: TaskField, value: Option<i64>) {
        match field {
            TaskField::A => self.a = value,
            TaskField::B => self.b = value,
        }
    }
}

/// Eine Additionsaufgabe mit Fehler-Markierungen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub a: i32,
    pub b: i32,
    pub errors: FieldErrors,
}

impl Task {
    /// Erstellt eine Aufgabe ohne Fehler-Markierungen.
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            a,
            b,
            errors: FieldErrors::default(),
        }
    }

    /// `true` genau dann, wenn `a ∈ [6, 9]` und `a + b ∈ [11, 14]`.
    pub fn is_valid(&self) -> bool {
        (A_MIN..=A_MAX).contains(&self.a) && (SUM_MIN..=SUM_MAX).contains(&self.result())
    }

    /// Summe `a + b`.
    pub fn result(&self) -> i32 {
        self.a + self.b
    }

    /// Wert eines Feldes.
    pub fn field(&self, field: TaskField) -> i32 {
        match field {
            TaskField::A => self.a,
            TaskField::B => self.b,
        }
    }

    /// Vergleicht ein Feld mit der Lösung und merkt sich das Ergebnis
    /// in `errors`. Gibt die Gleichheit zurück.
    pub fn check(&mut self, field: TaskField, solution: &Solution) -> bool {
        let result = solution.get(field) == Some(i64::from(self.field(field)));
        self.errors.set(field, !result);
        result
    }

    /// Strukturelle Gleichheit beider Felder mit der Lösung.
    pub fn equal(&self, solution: &Solution) -> bool {
        solution.a == Some(i64::from(self.a)) && solution.b == Some(i64::from(self.b))
    }

    /// HTML-Fragment der Aufgabe; fehlerhafte Felder tragen die Klasse `error`.
    pub fn to_html(&self) -> String {
        format!(
            "<span class=\"{}\">{}</span> + <span class=\"{}\">{}</span> = ",
            error_class(self.errors.a),
            self.a,
            error_class(self.errors.b),
            self.b
        )
    }
}

fn error_class(is_error: bool) -> &'static str {
    if is_error {
        "error"
    } else {
        ""
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} = ", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_bounds() {
        assert!(Task::new(6, 5).is_valid());
        assert!(Task::new(9, 5).is_valid());
        assert!(Task::new(7, 7).is_valid());
        assert!(!Task::new(9, 6).is_valid(), "Summe 15 liegt außerhalb");
        assert!(!Task::new(5, 6).is_valid(), "a = 5 liegt außerhalb");
        assert!(!Task::new(10, 2).is_valid(), "a = 10 liegt außerhalb");
        assert!(!Task::new(6, 4).is_valid(), "Summe 10 liegt außerhalb");
    }

    #[test]
    fn test_check_records_and_resets_error() {
        let mut task = Task::new(7, 6);
        let mut solution = Solution::new();

        solution.a = Some(5);
        assert!(!task.check(TaskField::A, &solution));
        assert!(task.errors.a);
        assert!(!task.errors.b);

        solution.a = Some(7);
        assert!(task.check(TaskField::A, &solution));
        assert!(!task.errors.a);
    }

    #[test]
    fn test_check_treats_missing_number_as_mismatch() {
        let mut task = Task::new(7, 6);
        let solution = Solution::new();
        assert!(!task.check(TaskField::B, &solution));
        assert!(task.errors.get(TaskField::B));
    }

    #[test]
    fn test_equal_requires_both_fields() {
        let task = Task::new(8, 4);
        let mut solution = Solution {
            a: Some(8),
            b: None,
        };
        assert!(!task.equal(&solution));
        solution.b = Some(4);
        assert!(task.equal(&solution));
        solution.a = Some(9);
        assert!(!task.equal(&solution));
    }

    #[test]
    fn test_display_and_html() {
        let mut task = Task::new(7, 6);
        assert_eq!(task.to_string(), "7 + 6 = ");
        assert_eq!(
            task.to_html(),
            "<span class=\"\">7</span> + <span class=\"\">6</span> = "
        );

        task.check(TaskField::B, &Solution::new());
        assert_eq!(
            task.to_html(),
            "<span class=\"\">7</span> + <span class=\"error\">6</span> = "
        );
    }
}
