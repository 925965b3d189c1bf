use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, Effect};

pub struct ExitCommand;

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    async fn execute(&self, _ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::effect(Effect::Exit))
    }
}
