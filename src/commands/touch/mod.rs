// src/commands/touch/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};
use crate::fs::BackendKind;

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        let file = ctx.required_operand()?;
        ctx.fs.write_empty_file(file).await?;

        let stdout = match ctx.fs.kind() {
            BackendKind::Os => format!("> Created: {}\n", file),
            BackendKind::Virtual => format!("> Created file: {}\n", file),
        };
        Ok(CommandOutput::text(stdout))
    }
}
