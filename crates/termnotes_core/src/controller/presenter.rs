//! Output and input surface consumed by the controller.

use crate::model::note::NoteSummary;

/// Terminal rendering and line input.
///
/// The controller decides what to show; implementations decide how it looks.
pub trait Presenter {
    /// Shows a section heading.
    fn render_title(&mut self, text: &str);
    /// Shows `items` numbered from 1, followed by the `0` exit entry.
    fn render_menu(&mut self, items: &[&str]);
    fn render_info(&mut self, message: &str);
    fn render_error(&mut self, message: &str);
    /// Shows text as-is, such as a note body or a list line.
    fn render_text(&mut self, text: &str);
    /// Prompts for one line. Returns `None` once input is closed.
    fn prompt_line(&mut self, message: &str) -> Option<String>;
    /// Formats one note for a result list.
    fn format_note_line(&self, note: &NoteSummary) -> String;
}
