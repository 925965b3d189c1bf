//! Command Interpreter
//!
//! Tokenizes a line into a verb and positional arguments and dispatches it
//! through the verb registry against whichever backend the session selected.
//! This is the single boundary where handler failures become diagnostics.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::commands::{
    create_shell_registry, CommandContext, CommandRegistry, Effect, VERBS,
};
use crate::fs::{BackendKind, FileSystem};
use crate::shell::console::Console;

/// Label shown when the current directory cannot be determined.
const FALLBACK_LABEL: &str = "$> ";

/// Whether the session continues after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Split a line on whitespace into `(verb, args)`. Blank lines yield `None`.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace().map(String::from);
    let verb = words.next()?;
    Some((verb, words.collect()))
}

/// Interpreter bound to one backend.
pub struct Interpreter {
    fs: Arc<dyn FileSystem>,
    registry: CommandRegistry,
}

impl Interpreter {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_registry(fs, create_shell_registry())
    }

    pub fn with_registry(fs: Arc<dyn FileSystem>, registry: CommandRegistry) -> Self {
        Self { fs, registry }
    }

    pub fn kind(&self) -> BackendKind {
        self.fs.kind()
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    /// Status label: the current directory followed by `> `.
    pub async fn label(&self) -> String {
        match self.fs.resolve_path(".").await {
            Ok(path) => format!("{}> ", path),
            Err(e) => {
                debug!("Cannot resolve current directory for label: {}", e);
                FALLBACK_LABEL.to_string()
            }
        }
    }

    /// Dispatch one line, writing its outcome to the console.
    pub async fn dispatch(&self, line: &str, console: &mut dyn Console) -> Outcome {
        let Some((verb, args)) = tokenize(line) else {
            return Outcome::Continue;
        };
        let outcome = self.dispatch_verb(&verb, args, console).await;
        console.finish_dispatch();
        outcome
    }

    async fn dispatch_verb(&self, verb: &str, args: Vec<String>, console: &mut dyn Console) -> Outcome {
        let Some(command) = self.registry.get(verb) else {
            debug!("Unknown verb: {}", verb);
            console.write(&self.unknown_command(verb));
            return Outcome::Continue;
        };

        debug!("Dispatching {} {:?}", verb, args);
        let ctx = CommandContext {
            args,
            fs: self.fs.clone(),
        };

        match command.execute(ctx).await {
            Ok(output) => {
                console.write(&output.stdout);
                match output.effect {
                    Effect::None => {}
                    Effect::Clear => console.clear(),
                    Effect::RefreshLabel => {
                        let label = self.label().await;
                        console.set_label(&label);
                    }
                    Effect::Exit => return Outcome::Exit,
                }
            }
            Err(e) => {
                warn!("{} failed: {}", verb, e);
                console.write(&self.kind().diagnostic(verb, &e.to_string()));
            }
        }
        Outcome::Continue
    }

    fn unknown_command(&self, verb: &str) -> String {
        match self.kind() {
            BackendKind::Os => format!("> Wrong input try another command: {}\n", verb),
            BackendKind::Virtual => format!(
                "> Unknown command: {}\n> Available commands: {}\n",
                verb,
                VERBS.join(", ")
            ),
        }
    }
}
