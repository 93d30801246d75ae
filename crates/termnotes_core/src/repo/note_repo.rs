//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/search/create/get/delete over the `notes` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every operation opens its own connection and drops it before returning,
//!   on success and on error alike. Nothing is cached between calls.
//! - Results are ordered by `id ASC`, which is creation order.
//! - Search keywords are matched literally: LIKE wildcards are escaped.
//!   Matching is case-insensitive for ASCII letters only (SQLite `LIKE`).

use crate::db::{connect, ensure_schema, DbError};
use crate::model::note::{Note, NoteId, NoteSummary};
use log::{error, info};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const NOTE_SELECT_SQL: &str = "SELECT id, title, description FROM notes";
const LIKE_ESCAPE: char = '\\';

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error. Storage failures are the only kind that originate here.
#[derive(Debug)]
pub enum RepoError {
    StorageUnavailable(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StorageUnavailable(err) => write!(f, "storage unavailable: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StorageUnavailable(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::StorageUnavailable(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::StorageUnavailable(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Returns every note in creation order; empty when there are none.
    fn list_all(&self) -> RepoResult<Vec<Note>>;
    /// Returns notes whose title or description contains `keyword`.
    fn search(&self, keyword: &str) -> RepoResult<Vec<NoteSummary>>;
    /// Inserts a note and returns its storage-assigned id.
    fn create(&self, title: &str, description: &str) -> RepoResult<NoteId>;
    /// Returns the note with `id`, or `None` when no row matches.
    fn get_by_id(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Deletes the note with `id`. Returns `false` when nothing was deleted.
    fn delete_by_id(&self, id: NoteId) -> RepoResult<bool>;
}

/// SQLite-backed note repository bound to one database file.
#[derive(Debug, Clone)]
pub struct SqliteNoteRepository {
    path: PathBuf,
}

impl SqliteNoteRepository {
    /// Opens the database once to make sure the `notes` table exists.
    ///
    /// # Errors
    /// Returns [`RepoError::StorageUnavailable`] when the file cannot be
    /// opened or the schema cannot be created.
    pub fn try_new(path: impl AsRef<Path>) -> RepoResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = connect(&path)?;
        ensure_schema(&conn)?;
        Ok(Self { path })
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_connection<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&Connection) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let result = connect(&self.path)
            .map_err(RepoError::from)
            .and_then(|conn| op(&conn));
        if let Err(err) = &result {
            error!("event={event} module=repo status=error error={err}");
        }
        result
    }
}

impl NoteRepository for SqliteNoteRepository {
    fn list_all(&self) -> RepoResult<Vec<Note>> {
        self.with_connection("note_list", |conn| {
            let mut stmt = conn.prepare(&format!("{NOTE_SELECT_SQL} ORDER BY id ASC;"))?;
            let notes = stmt
                .query_map([], note_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            info!(
                "event=note_list module=repo status=ok count={}",
                notes.len()
            );
            Ok(notes)
        })
    }

    fn search(&self, keyword: &str) -> RepoResult<Vec<NoteSummary>> {
        self.with_connection("note_search", |conn| {
            let pattern = format!("%{}%", escape_like(keyword));
            let mut stmt = conn.prepare(
                "SELECT id, title
                 FROM notes
                 WHERE title LIKE ?1 ESCAPE '\\'
                    OR description LIKE ?1 ESCAPE '\\'
                 ORDER BY id ASC;",
            )?;
            let hits = stmt
                .query_map([pattern.as_str()], |row| {
                    Ok(NoteSummary {
                        id: row.get("id")?,
                        title: row.get("title")?,
                    })
                })?
                .collect::<Result<Vec<_>, _>>()?;
            info!(
                "event=note_search module=repo status=ok keyword_len={} count={}",
                keyword.chars().count(),
                hits.len()
            );
            Ok(hits)
        })
    }

    fn create(&self, title: &str, description: &str) -> RepoResult<NoteId> {
        self.with_connection("note_create", |conn| {
            conn.execute(
                "INSERT INTO notes (title, description) VALUES (?1, ?2);",
                params![title, description],
            )?;
            let id = conn.last_insert_rowid();
            info!("event=note_create module=repo status=ok note_id={id}");
            Ok(id)
        })
    }

    fn get_by_id(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.with_connection("note_get", |conn| {
            let mut stmt = conn.prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
            let mut rows = stmt.query([id])?;
            let note = match rows.next()? {
                Some(row) => Some(note_from_row(row)?),
                None => None,
            };
            info!(
                "event=note_get module=repo status=ok note_id={id} found={}",
                note.is_some()
            );
            Ok(note)
        })
    }

    fn delete_by_id(&self, id: NoteId) -> RepoResult<bool> {
        self.with_connection("note_delete", |conn| {
            let changed = conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;
            info!(
                "event=note_delete module=repo status=ok note_id={id} deleted={}",
                changed > 0
            );
            Ok(changed > 0)
        })
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
    })
}

/// Escapes `LIKE` metacharacters so `keyword` matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}
