//! Core-Domänentypen: Aufgabe, Lösung, Schritte, Zahlenstrahl, Generator.

pub mod axis;
pub mod entry;
pub mod generator;
pub mod step;
pub mod task;

pub use axis::Axis;
pub use entry::parse_int;
pub use generator::TaskGenerator;
pub use step::Step;
pub use task::{FieldErrors, Solution, Task, TaskField};
