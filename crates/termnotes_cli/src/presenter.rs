//! Plain-text terminal presenter.

use log::warn;
use std::io::{self, BufRead, Write};
use termnotes_core::{NoteSummary, Presenter};

const DEFAULT_WIDTH: usize = 80;
const MAX_WIDTH: usize = 512;

/// Renders controller output to a writer and reads answers from a reader.
///
/// Write failures are ignored: a closed stdout leaves nothing to report to.
pub struct TerminalPresenter<I: BufRead, O: Write> {
    input: I,
    output: O,
    width: usize,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    /// Presenter bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), terminal_width())
    }
}

impl<I: BufRead, O: Write> TerminalPresenter<I, O> {
    pub fn new(input: I, output: O, width: usize) -> Self {
        Self {
            input,
            output,
            width: width.clamp(1, MAX_WIDTH),
        }
    }

    #[cfg(test)]
    fn into_output(self) -> O {
        self.output
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }
}

impl<I: BufRead, O: Write> Presenter for TerminalPresenter<I, O> {
    fn render_title(&mut self, text: &str) {
        let rule = "=".repeat(self.width);
        let centered = format!("{text:^width$}", width = self.width);
        self.line(&rule);
        self.line(centered.trim_end());
        self.line(&rule);
    }

    fn render_menu(&mut self, items: &[&str]) {
        self.line("");
        for (index, item) in items.iter().enumerate() {
            self.line(&format!("[{}] {item}", index + 1));
        }
        self.line("[0] Exit");
    }

    fn render_info(&mut self, message: &str) {
        self.line(message);
    }

    fn render_error(&mut self, message: &str) {
        self.line(&format!("error: {message}"));
    }

    fn render_text(&mut self, text: &str) {
        self.line(text);
    }

    fn prompt_line(&mut self, message: &str) -> Option<String> {
        let _ = write!(self.output, "{message}");
        let _ = self.output.flush();

        // Undecodable bytes become U+FFFD so the controller rejects the line
        // like any other malformed answer.
        let mut buffer = Vec::new();
        match self.input.read_until(b'\n', &mut buffer) {
            Ok(0) => None,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buffer);
                Some(line.trim_end_matches(['\n', '\r']).to_string())
            }
            Err(err) => {
                warn!("event=prompt_read module=cli status=error error={err}");
                None
            }
        }
    }

    fn format_note_line(&self, note: &NoteSummary) -> String {
        format!("[{}] {}", note.id, note.title)
    }
}

/// Width from `COLUMNS`, falling back to 80.
fn terminal_width() -> usize {
    width_from(std::env::var("COLUMNS").ok().as_deref())
}

fn width_from(columns: Option<&str>) -> usize {
    columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
        .map_or(DEFAULT_WIDTH, |width| width.min(MAX_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::{width_from, TerminalPresenter, DEFAULT_WIDTH, MAX_WIDTH};
    use std::io::Cursor;
    use termnotes_core::{NoteSummary, Presenter};

    fn presenter(input: &str) -> TerminalPresenter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPresenter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), 11)
    }

    fn rendered(presenter: TerminalPresenter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(presenter.into_output()).unwrap()
    }

    #[test]
    fn title_is_centered_between_rules() {
        let mut p = presenter("");
        p.render_title("Notes");
        assert_eq!(rendered(p), "===========\n   Notes\n===========\n");
    }

    #[test]
    fn menu_numbers_items_and_appends_exit() {
        let mut p = presenter("");
        p.render_menu(&["My Notes", "Create Note"]);
        assert_eq!(rendered(p), "\n[1] My Notes\n[2] Create Note\n[0] Exit\n");
    }

    #[test]
    fn prompt_strips_line_ending_and_reports_eof() {
        let mut p = presenter("first\r\n second \n");
        assert_eq!(p.prompt_line("> ").as_deref(), Some("first"));
        assert_eq!(p.prompt_line("> ").as_deref(), Some(" second "));
        assert_eq!(p.prompt_line("> "), None);
        assert_eq!(rendered(p), "> > > ");
    }

    #[test]
    fn undecodable_line_is_returned_not_treated_as_closed_input() {
        let mut p = TerminalPresenter::new(Cursor::new(b"\xff\n0\n".to_vec()), Vec::new(), 11);
        assert_eq!(p.prompt_line("> ").as_deref(), Some("\u{FFFD}"));
        assert_eq!(p.prompt_line("> ").as_deref(), Some("0"));
        assert_eq!(p.prompt_line("> "), None);
    }

    #[test]
    fn width_falls_back_and_is_capped() {
        assert_eq!(width_from(None), DEFAULT_WIDTH);
        assert_eq!(width_from(Some("abc")), DEFAULT_WIDTH);
        assert_eq!(width_from(Some("0")), DEFAULT_WIDTH);
        assert_eq!(width_from(Some(" 120 ")), 120);
        assert_eq!(width_from(Some("18446744073709551615")), MAX_WIDTH);
    }

    #[test]
    fn oversized_width_renders_capped_rule() {
        let mut p = TerminalPresenter::new(Cursor::new(Vec::new()), Vec::new(), usize::MAX);
        p.render_title("Notes");
        let output = rendered(p);
        assert_eq!(output.lines().next().unwrap().len(), MAX_WIDTH);
    }

    #[test]
    fn note_line_shows_id_and_title() {
        let p = presenter("");
        let line = p.format_note_line(&NoteSummary {
            id: 12,
            title: "Groceries".to_string(),
        });
        assert_eq!(line, "[12] Groceries");
    }

    #[test]
    fn errors_are_prefixed() {
        let mut p = presenter("");
        p.render_error("Invalid menu item.");
        assert_eq!(rendered(p), "error: Invalid menu item.\n");
    }
}
