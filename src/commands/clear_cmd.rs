use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, Effect};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::effect(Effect::Clear))
    }
}
