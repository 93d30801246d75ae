//! Interactive menu controller.
//!
//! # Responsibility
//! - Drive the menu state machine from raw input lines.
//! - Validate numeric and required input before touching the repository.
//! - Turn repository results into presenter calls.
//!
//! # Invariants
//! - Rejected input never reaches the repository.
//! - A storage failure aborts only the current operation; the loop returns
//!   to the main menu.
//! - Closed input ends the loop the same way as choosing exit.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{debug, error, info};

pub mod input;
pub mod presenter;

use input::{parse_non_negative, parse_note_id, require_title};
use presenter::Presenter;

const MAIN_MENU_TITLE: &str = "Notes - Main Menu";
const MAIN_MENU_ITEMS: [&str; 3] = ["My Notes", "Create Note", "Search Notes"];
const NOTE_ACTIONS_LINE: &str = "[1] Delete note    [2] Back";

const MSG_GOODBYE: &str = "Goodbye.";
const MSG_NOT_A_NUMBER: &str = "Invalid input, enter a number.";
const MSG_BAD_MENU_ITEM: &str = "Invalid menu item.";
const MSG_BAD_NOTE_ID: &str = "Invalid input, expected a note ID.";
const MSG_BAD_ACTION: &str = "Invalid action.";
const MSG_NO_NOTES: &str = "No notes found.";
const MSG_NO_MATCHES: &str = "No matches found.";
const MSG_NOT_FOUND: &str = "Note not found.";
const MSG_DELETED: &str = "Note deleted.";
const MSG_BLANK_TITLE: &str = "Title cannot be empty.";
const MSG_CREATED: &str = "Note created successfully.";
const MSG_STORAGE: &str = "Storage is unavailable, operation aborted.";

/// Where the menu loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    MainMenu,
    ViewingNotesList,
    ViewingSingleNote(NoteId),
    CreatingNote,
    SearchingNotes,
}

/// Entries of the main menu, keyed by the number the user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    MyNotes,
    CreateNote,
    SearchNotes,
}

impl MenuChoice {
    pub fn from_number(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Exit),
            1 => Some(Self::MyNotes),
            2 => Some(Self::CreateNote),
            3 => Some(Self::SearchNotes),
            _ => None,
        }
    }
}

/// Menu loop over a note repository and a presenter.
pub struct Controller<R: NoteRepository, P: Presenter> {
    repo: R,
    presenter: P,
}

impl<R: NoteRepository, P: Presenter> Controller<R, P> {
    pub fn new(repo: R, presenter: P) -> Self {
        Self { repo, presenter }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Runs the loop from the main menu until the user exits or input closes.
    pub fn run(&mut self) {
        info!("event=controller_start module=controller status=ok");
        let mut state = ControllerState::MainMenu;
        while let Some(next) = self.step(state) {
            state = next;
        }
        info!("event=controller_exit module=controller status=ok");
    }

    /// Handles one state and returns the next one, or `None` to stop.
    pub fn step(&mut self, state: ControllerState) -> Option<ControllerState> {
        debug!("event=controller_step module=controller state={state:?}");
        match state {
            ControllerState::MainMenu => self.main_menu(),
            ControllerState::ViewingNotesList => self.notes_list(),
            ControllerState::ViewingSingleNote(id) => self.single_note(id),
            ControllerState::CreatingNote => self.create_note(),
            ControllerState::SearchingNotes => self.search_notes(),
        }
    }

    fn main_menu(&mut self) -> Option<ControllerState> {
        self.presenter.render_title(MAIN_MENU_TITLE);
        self.presenter.render_menu(&MAIN_MENU_ITEMS);
        let answer = self.prompt("Choose menu item: ")?;

        let Ok(number) = parse_non_negative(&answer) else {
            return Some(self.reject("menu_choice", MSG_NOT_A_NUMBER));
        };
        match MenuChoice::from_number(number) {
            Some(MenuChoice::Exit) => {
                self.presenter.render_info(MSG_GOODBYE);
                None
            }
            Some(MenuChoice::MyNotes) => Some(ControllerState::ViewingNotesList),
            Some(MenuChoice::CreateNote) => Some(ControllerState::CreatingNote),
            Some(MenuChoice::SearchNotes) => Some(ControllerState::SearchingNotes),
            None => Some(self.reject("menu_choice", MSG_BAD_MENU_ITEM)),
        }
    }

    fn notes_list(&mut self) -> Option<ControllerState> {
        self.presenter.render_title("My Notes");
        let notes = match self.repo.list_all() {
            Ok(notes) => notes,
            Err(err) => return Some(self.storage_failed("note_list", &err)),
        };
        if notes.is_empty() {
            self.presenter.render_info(MSG_NO_NOTES);
            return Some(ControllerState::MainMenu);
        }

        for note in &notes {
            let line = self.presenter.format_note_line(&note.summary());
            self.presenter.render_text(&line);
        }

        let answer = self.prompt("Enter note ID to view or delete: ")?;
        match parse_note_id(&answer) {
            Ok(id) => Some(ControllerState::ViewingSingleNote(id)),
            Err(_) => Some(self.reject("note_id", MSG_BAD_NOTE_ID)),
        }
    }

    fn single_note(&mut self, id: NoteId) -> Option<ControllerState> {
        let note = match self.repo.get_by_id(id) {
            Ok(Some(note)) => note,
            Ok(None) => {
                self.presenter.render_info(MSG_NOT_FOUND);
                return Some(ControllerState::MainMenu);
            }
            Err(err) => return Some(self.storage_failed("note_get", &err)),
        };

        self.show_note("View Note", &note);
        self.presenter.render_text(NOTE_ACTIONS_LINE);
        let answer = self.prompt("Choose action: ")?;

        match parse_non_negative(&answer) {
            Ok(1) => match self.repo.delete_by_id(id) {
                Ok(true) => self.presenter.render_info(MSG_DELETED),
                Ok(false) => self.presenter.render_info(MSG_NOT_FOUND),
                Err(err) => return Some(self.storage_failed("note_delete", &err)),
            },
            Ok(2) => {}
            Ok(_) => return Some(self.reject("note_action", MSG_BAD_ACTION)),
            Err(_) => return Some(self.reject("note_action", MSG_NOT_A_NUMBER)),
        }
        Some(ControllerState::MainMenu)
    }

    fn create_note(&mut self) -> Option<ControllerState> {
        self.presenter.render_title("Create Note");
        let raw_title = self.prompt("Enter title: ")?;
        let Ok(title) = require_title(&raw_title) else {
            return Some(self.reject("note_title", MSG_BLANK_TITLE));
        };
        let description = self.prompt("Enter content: ")?;

        match self.repo.create(title, description.trim()) {
            Ok(_) => self.presenter.render_info(MSG_CREATED),
            Err(err) => return Some(self.storage_failed("note_create", &err)),
        }
        Some(ControllerState::MainMenu)
    }

    fn search_notes(&mut self) -> Option<ControllerState> {
        self.presenter.render_title("Search Notes");
        let keyword = self.prompt("Enter keyword: ")?;
        let hits = match self.repo.search(&keyword) {
            Ok(hits) => hits,
            Err(err) => return Some(self.storage_failed("note_search", &err)),
        };
        if hits.is_empty() {
            self.presenter.render_info(MSG_NO_MATCHES);
            return Some(ControllerState::MainMenu);
        }

        for hit in &hits {
            let line = self.presenter.format_note_line(hit);
            self.presenter.render_text(&line);
        }

        let answer = self.prompt("Enter note ID to view: ")?;
        if answer.trim().is_empty() {
            return Some(ControllerState::MainMenu);
        }
        let Ok(id) = parse_note_id(&answer) else {
            return Some(self.reject("note_id", MSG_BAD_NOTE_ID));
        };

        match self.repo.get_by_id(id) {
            Ok(Some(note)) => self.show_note("Search Result", &note),
            Ok(None) => self.presenter.render_info(MSG_NOT_FOUND),
            Err(err) => return Some(self.storage_failed("note_get", &err)),
        }
        Some(ControllerState::MainMenu)
    }

    fn show_note(&mut self, heading: &str, note: &Note) {
        self.presenter.render_title(heading);
        self.presenter
            .render_text(&format!("{}\n\n{}", note.title, note.description));
    }

    fn prompt(&mut self, message: &str) -> Option<String> {
        let answer = self.presenter.prompt_line(message);
        if answer.is_none() {
            info!("event=input_closed module=controller status=ok");
            self.presenter.render_info(MSG_GOODBYE);
        }
        answer
    }

    fn reject(&mut self, field: &'static str, message: &str) -> ControllerState {
        debug!("event=input_rejected module=controller field={field}");
        self.presenter.render_error(message);
        ControllerState::MainMenu
    }

    fn storage_failed(&mut self, event: &'static str, err: &RepoError) -> ControllerState {
        error!("event={event} module=controller status=error error={err}");
        self.presenter.render_error(MSG_STORAGE);
        ControllerState::MainMenu
    }
}
