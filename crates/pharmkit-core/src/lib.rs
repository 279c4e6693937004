//! pharmkit-core
//!
//! Shared vocabulary of the PharmKit calculators: raw-field parsing,
//! the `Evaluation` result type, number rendering, and calendar
//! arithmetic. Pure functions only — no I/O.

pub mod dates;
pub mod evaluation;
pub mod field;
pub mod format;

pub use evaluation::Evaluation;
