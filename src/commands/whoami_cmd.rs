use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        Ok(CommandOutput::text(format!("> {}\n", ctx.fs.owner())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::fs::InMemoryFs;

    #[tokio::test]
    async fn test_whoami() {
        let cmd = WhoamiCommand;
        let ctx = CommandContext {
            args: vec![],
            fs: Arc::new(InMemoryFs::new("alice")),
        };
        let result = cmd.execute(ctx).await.unwrap();
        assert_eq!(result.stdout, "> alice\n");
    }

    #[tokio::test]
    async fn test_whoami_default_owner() {
        let ctx = CommandContext {
            args: vec![],
            fs: Arc::new(InMemoryFs::default()),
        };
        let result = WhoamiCommand.execute(ctx).await.unwrap();
        assert_eq!(result.stdout, "> Default user\n");
    }
}
