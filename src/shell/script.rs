//! Script Runner
//!
//! Replays pre-loaded lines through the interpreter. A blank line or a line
//! starting with `#` stops the whole run, not just that line. `exit` or the
//! end of the lines also ends it.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::interpreter::{Interpreter, Outcome};
use crate::shell::console::Console;

const COMMENT_MARKER: char = '#';
const PROMPT_MARKER: &str = "$ ";

/// Failure to read a script source
#[derive(Error, Debug)]
#[error("cannot read script {path}: {source}")]
pub struct ScriptError {
    path: String,
    #[source]
    source: std::io::Error,
}

/// A linear cursor over script lines.
#[derive(Debug, Clone, Default)]
pub struct Script {
    lines: Vec<String>,
    index: usize,
}

impl Script {
    pub fn from_source(source: &str) -> Self {
        Self {
            lines: source.split('\n').map(String::from).collect(),
            index: 0,
        }
    }

    /// Read a script file.
    pub async fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ScriptError {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::from_source(&source))
    }

    /// Index of the next line to be taken.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Take the next line and advance. `None` means the run stops here:
    /// end of script, a blank line, or a comment line.
    pub fn next_command(&mut self) -> Option<String> {
        let line = self.lines.get(self.index)?.trim().to_string();
        self.index += 1;
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            debug!("Script halted at line {}", self.index);
            return None;
        }
        Some(line)
    }

    /// Run to completion, echoing each command before dispatching it.
    pub async fn run(&mut self, interpreter: &Interpreter, console: &mut dyn Console) -> Outcome {
        info!("Running script ({} lines)", self.lines.len());
        while let Some(line) = self.next_command() {
            console.write(&format!("{}{}\n", PROMPT_MARKER, line));
            if interpreter.dispatch(&line, console).await == Outcome::Exit {
                info!("Script requested exit at line {}", self.index);
                return Outcome::Exit;
            }
        }
        Outcome::Continue
    }
}
