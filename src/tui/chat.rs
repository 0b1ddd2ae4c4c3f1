//! Chat side panel state: a scrollback log plus a one-line input field.
//!
//! Purely local. Submitted lines are echoed back into the log with the
//! speaker tag; there is no networking behind it.

use derive_getters::Getters;
use tracing::debug;

/// Tag prepended to submitted chat lines.
const SPEAKER_TAG: &str = "1";

/// Maximum retained scrollback lines.
const SCROLLBACK: usize = 200;

/// State of the chat panel.
#[derive(Debug, Default, Getters)]
pub struct ChatPanel {
    lines: Vec<String>,
    input: String,
}

impl ChatPanel {
    /// Creates an empty chat panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a typed character to the input line.
    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Removes the last character of the input line.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submits the current input line to the log and clears the input.
    ///
    /// Blank input is dropped rather than logged.
    pub fn submit(&mut self) {
        let message = self.input.trim();
        if message.is_empty() {
            self.input.clear();
            return;
        }
        debug!(len = message.len(), "Chat line submitted");
        self.lines.push(format!("{SPEAKER_TAG}: {message}"));
        if self.lines.len() > SCROLLBACK {
            let overflow = self.lines.len() - SCROLLBACK;
            self.lines.drain(..overflow);
        }
        self.input.clear();
    }
}
