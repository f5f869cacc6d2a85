//! Schritte der geführten Eingabe.

use std::fmt;

/// Schritt des Tutors. Die Reihenfolge ist linear und ohne Rücksprung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Ersten Summanden eingeben
    First,
    /// Zweiten Summanden eingeben
    Second,
    /// Summe eingeben
    Third,
    /// Aufgabe gelöst
    Solved,
}

impl Step {
    /// Folgeschritt, `None` nach `Solved`.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::First => Some(Step::Second),
            Step::Second => Some(Step::Third),
            Step::Third => Some(Step::Solved),
            Step::Solved => None,
        }
    }

    /// Anzeigename für die Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            Step::First => "1. Summand",
            Step::Second => "2. Summand",
            Step::Third => "Summe",
            Step::Solved => "Gelöst",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_advance_linearly() {
        let mut visited = vec![Step::First];
        while let Some(next) = visited.last().and_then(|s| s.next()) {
            visited.push(next);
        }
        assert_eq!(
            visited,
            vec![Step::First, Step::Second, Step::Third, Step::Solved]
        );
    }
}
