//! Presentation Boundary
//!
//! The only things the core needs from a terminal surface: append text,
//! clear it, show a status label, and switch input acceptance on or off.
//! Completed input lines travel the other way as session events.

use std::io::Write;

use tracing::debug;

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[H";

/// Output surface the interpreter writes into.
pub trait Console {
    /// Append text to the output.
    fn write(&mut self, text: &str);

    /// Erase everything written so far.
    fn clear(&mut self);

    /// Replace the status label (the prompt).
    fn set_label(&mut self, label: &str);

    /// Accept or refuse interactive input.
    fn set_input_enabled(&mut self, enabled: bool);

    /// Called after every dispatch: input is cleared and the view scrolled to the end.
    fn finish_dispatch(&mut self) {}
}

/// Console that keeps everything in memory.
#[derive(Debug, Clone)]
pub struct BufferConsole {
    text: String,
    label: String,
    input_enabled: bool,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            label: String::new(),
            input_enabled: true,
        }
    }

    /// Everything written since the last clear.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn clear(&mut self) {
        self.text.clear();
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }
}

/// Console over a terminal stream. The label is printed as the prompt
/// whenever input is accepted.
pub struct TerminalConsole<W: Write> {
    out: W,
    label: String,
    input_enabled: bool,
}

impl TerminalConsole<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            label: String::new(),
            input_enabled: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            debug!("Terminal write failed: {}", e);
        }
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn write(&mut self, text: &str) {
        self.emit(text);
    }

    fn clear(&mut self) {
        self.emit(CLEAR_SEQUENCE);
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn finish_dispatch(&mut self) {
        if self.input_enabled {
            let prompt = self.label.clone();
            self.emit(&prompt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_write_and_clear() {
        let mut console = BufferConsole::new();
        console.write("> one\n");
        console.write("> two\n");
        assert_eq!(console.lines(), vec!["> one", "> two"]);
        console.clear();
        assert_eq!(console.text(), "");
    }

    #[test]
    fn test_buffer_console_label_and_input() {
        let mut console = BufferConsole::default();
        assert!(console.input_enabled());
        console.set_input_enabled(false);
        console.set_label("/docs> ");
        assert!(!console.input_enabled());
        assert_eq!(console.label(), "/docs> ");
    }

    #[test]
    fn test_terminal_console_clear_sequence() {
        let mut console = TerminalConsole::new(Vec::new());
        console.write("hello\n");
        console.clear();
        assert_eq!(console.into_inner(), b"hello\n\x1B[2J\x1B[H".to_vec());
    }

    #[test]
    fn test_terminal_console_prompt_only_when_input_enabled() {
        let mut console = TerminalConsole::new(Vec::new());
        console.set_label("/> ");
        console.finish_dispatch();
        console.set_input_enabled(false);
        console.finish_dispatch();
        assert_eq!(console.into_inner(), b"/> ".to_vec());
    }
}
