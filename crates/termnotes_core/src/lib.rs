//! Core of the termnotes terminal note-taking tool.
//! Owns storage access, the note repository and the menu controller.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{AppConfig, ConfigError};
pub use controller::input::ValidationError;
pub use controller::presenter::Presenter;
pub use controller::{Controller, ControllerState, MenuChoice};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::note::{Note, NoteId, NoteSummary};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
