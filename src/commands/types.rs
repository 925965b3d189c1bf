// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use crate::fs::{FileSystem, FsError};

/// Side effect a command asks the session to perform after its output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Erase everything written so far
    Clear,
    /// Refresh the status label (the current directory changed)
    RefreshLabel,
    /// End the session
    Exit,
}

/// Successful command outcome
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub effect: Effect,
}

impl CommandOutput {
    pub fn text(stdout: String) -> Self {
        Self { stdout, effect: Effect::None }
    }

    pub fn effect(effect: Effect) -> Self {
        Self { stdout: String::new(), effect }
    }
}

/// Command failure, rendered into one diagnostic line at the dispatch boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("missing file operand")]
    MissingOperand,
}

/// Command execution context
pub struct CommandContext {
    pub args: Vec<String>,
    pub fs: Arc<dyn FileSystem>,
}

impl CommandContext {
    /// First positional argument, if any
    pub fn operand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// First positional argument, or a missing-operand error
    pub fn required_operand(&self) -> Result<&str, CommandError> {
        self.operand().ok_or(CommandError::MissingOperand)
    }
}

/// A verb handler
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> Result<CommandOutput, CommandError>;
}
