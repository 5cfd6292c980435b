//! Append-only, capped log of successful generations.
//!
//! Journaling sits beside assembly, never inside it: a failed write is
//! logged and dropped so it cannot turn a good blueprint into an error.

pub mod store;
pub mod types;

pub use store::{DEFAULT_CAPACITY, GenerationJournal, JsonFileJournal, record_best_effort};
pub use types::GenerationEntry;
