// src/commands/mod.rs
pub mod cd_cmd;
pub mod clear_cmd;
pub mod exit_cmd;
pub mod ls;
pub mod registry;
pub mod touch;
pub mod types;
pub mod wc;
pub mod whoami_cmd;

pub use registry::{create_shell_registry, CommandRegistry, VERBS};
pub use types::{Command, CommandContext, CommandError, CommandOutput, Effect};
