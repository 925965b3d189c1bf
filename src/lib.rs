//! vfs-shell - A small terminal shell over two interchangeable backends
//!
//! Interprets a fixed verb vocabulary (`cd`, `ls`, `whoami`, `wc`, `touch`,
//! `clear`, `exit`) against either the real filesystem or an in-memory tree
//! seeded from a CSV description, interactively or from a startup script.

pub mod commands;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod shell;

pub use commands::{Command, CommandError, CommandOutput, CommandRegistry, Effect};
pub use fs::{BackendKind, FileSystem, FsError, InMemoryFs, OsFs, Tree};
pub use interpreter::{Interpreter, Outcome};
pub use shell::{Console, Script, Session, SessionEvent};
