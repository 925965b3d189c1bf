// src/commands/cd_cmd.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput, Effect};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        // Without an argument the backend decides: the tree returns to its root,
        // the OS backend refuses.
        ctx.fs.change_cursor(ctx.operand()).await?;
        Ok(CommandOutput::effect(Effect::RefreshLabel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{FileSystem, FsError, InMemoryFs, Tree};
    use std::sync::Arc;

    fn make_ctx(fs: &Arc<InMemoryFs>, args: Vec<&str>) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs: fs.clone(),
        }
    }

    fn seeded() -> Arc<InMemoryFs> {
        let mut tree = Tree::default();
        tree.create_node("/bin", true, "");
        tree.create_node("/docs/readme.txt", false, "text");
        Arc::new(InMemoryFs::from_tree(tree))
    }

    #[tokio::test]
    async fn test_cd_moves_cursor() {
        let fs = seeded();
        let out = CdCommand.execute(make_ctx(&fs, vec!["/bin"])).await.unwrap();
        assert_eq!(out.effect, Effect::RefreshLabel);
        assert_eq!(fs.resolve_path(".").await.unwrap(), "/bin");
    }

    #[tokio::test]
    async fn test_cd_parent_returns_to_root() {
        let fs = seeded();
        CdCommand.execute(make_ctx(&fs, vec!["/bin"])).await.unwrap();
        CdCommand.execute(make_ctx(&fs, vec![".."])).await.unwrap();
        assert_eq!(fs.resolve_path(".").await.unwrap(), "/");
    }

    #[tokio::test]
    async fn test_cd_without_args_resets_to_root() {
        let fs = seeded();
        CdCommand.execute(make_ctx(&fs, vec!["docs"])).await.unwrap();
        CdCommand.execute(make_ctx(&fs, vec![])).await.unwrap();
        assert_eq!(fs.resolve_path(".").await.unwrap(), "/");
    }

    #[tokio::test]
    async fn test_cd_into_file_fails() {
        let fs = seeded();
        let err = CdCommand
            .execute(make_ctx(&fs, vec!["/docs/readme.txt"]))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Fs(FsError::NotDirectory { .. })));
        assert_eq!(fs.resolve_path(".").await.unwrap(), "/");
    }
}
