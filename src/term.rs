//! Line-oriented terminal front-end.
//!
//! Implements the session's [`Console`] surface over any buffered
//! reader/writer pair: commands are read from prompted lines, and notices
//! block until the user presses Enter.

use crate::app::Console;
use egp_core::{Notifier, SymptomPrompter};
use std::io::{BufRead, Write};

pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line, without its trailing newline. `None` on end of input
    /// or read failure.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_owned()),
            Err(_) => None,
        }
    }
}

impl<R: BufRead, W: Write> SymptomPrompter for LineConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        let _ = write!(self.output, "{} ", message);
        let _ = self.output.flush();
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Notifier for LineConsole<R, W> {
    fn notify(&mut self, message: &str) {
        let _ = writeln!(self.output, "!! {}", message);
        let _ = write!(self.output, "   [press Enter to continue] ");
        let _ = self.output.flush();
        self.read_line();
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_command(&mut self) -> Option<String> {
        let _ = write!(self.output, "egp> ");
        let _ = self.output.flush();
        self.read_line()
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_returns_the_answer_without_newline() {
        let input = Cursor::new("Head\n");
        let mut output: Vec<u8> = Vec::new();
        let mut console = LineConsole::new(input, &mut output);

        assert_eq!(console.prompt("Enter Symptom Category:"), Some("Head".into()));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Enter Symptom Category:"));
    }

    #[test]
    fn test_prompt_is_dismissed_at_end_of_input() {
        let input = Cursor::new("");
        let mut output: Vec<u8> = Vec::new();
        let mut console = LineConsole::new(input, &mut output);
        assert_eq!(console.prompt("anything"), None);
    }

    #[test]
    fn test_notify_blocks_on_one_input_line() {
        let input = Cursor::new("\nnext command\n");
        let mut output: Vec<u8> = Vec::new();
        let mut console = LineConsole::new(input, &mut output);

        console.notify("Invalid JSON file.");
        // The Enter that acknowledged the notice is consumed; the next
        // command line is still available.
        assert_eq!(console.read_command(), Some("next command".into()));
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("!! Invalid JSON file."));
    }
}
