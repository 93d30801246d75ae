//! Repository layer over the notes database.
//!
//! # Responsibility
//! - Define the data access contract used by the controller.
//! - Isolate SQLite query details from menu orchestration.
//!
//! # Invariants
//! - "Not found" is a value (`None` / `false`), never an error.

pub mod note_repo;
