//! Zufallsgenerator für gültige Aufgaben.

use super::task::{Task, A_MAX, A_MIN, SUM_MAX, SUM_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Zieht `a` gleichverteilt aus `[6, 9]` und die Summe aus `[11, 14]`.
pub struct TaskGenerator {
    rng: StdRng,
}

impl TaskGenerator {
    /// Generator mit Entropie-Seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministischer Generator (Tests, reproduzierbare Sitzungen).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Erzeugt die nächste Aufgabe.
    pub fn next_task(&mut self) -> Task {
        let a = self.rng.gen_range(A_MIN..=A_MAX);
        let sum = self.rng.gen_range(SUM_MIN..=SUM_MAX);
        Task::new(a, sum - a)
    }
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}
