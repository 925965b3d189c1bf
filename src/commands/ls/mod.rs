// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};
use crate::fs::{BackendKind, DirentEntry};

pub struct LsCommand;

/// The OS listing breaks the line before every sixth entry.
const ENTRIES_PER_LINE: usize = 6;

fn display_name(entry: &DirentEntry) -> String {
    if entry.is_directory {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    }
}

fn format_os(entries: &[DirentEntry]) -> String {
    let mut out = String::from("> ");
    for (idx, entry) in entries.iter().enumerate() {
        if (idx + 1) % ENTRIES_PER_LINE == 0 {
            out.push('\n');
        }
        out.push_str(&format!("'{}' ", display_name(entry)));
    }
    out.push('\n');
    out
}

fn format_virtual(entries: &[DirentEntry]) -> String {
    let names: Vec<String> = entries.iter().map(display_name).collect();
    format!("> {}\n", names.join("  "))
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        let path = ctx.operand().unwrap_or("");
        let mut entries = ctx.fs.list_children(path).await?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let stdout = match ctx.fs.kind() {
            BackendKind::Os => format_os(&entries),
            BackendKind::Virtual => format_virtual(&entries),
        };
        Ok(CommandOutput::text(stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{FsError, InMemoryFs, Tree};
    use std::sync::Arc;

    fn make_ctx(args: Vec<&str>, nodes: Vec<(&str, bool)>) -> CommandContext {
        let mut tree = Tree::default();
        for (path, is_dir) in nodes {
            tree.create_node(path, is_dir, "");
        }
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs: Arc::new(InMemoryFs::from_tree(tree)),
        }
    }

    fn entry(name: &str, is_directory: bool) -> DirentEntry {
        DirentEntry { name: name.to_string(), is_directory }
    }

    #[tokio::test]
    async fn test_ls_root_marks_directories() {
        let ctx = make_ctx(vec!["/"], vec![("/docs/readme.txt", false), ("/bin", true), ("/a.txt", false)]);
        let out = LsCommand.execute(ctx).await.unwrap();
        assert_eq!(out.stdout, "> a.txt  bin/  docs/\n");
    }

    #[tokio::test]
    async fn test_ls_defaults_to_cursor() {
        let ctx = make_ctx(vec![], vec![("/x", true)]);
        let out = LsCommand.execute(ctx).await.unwrap();
        assert_eq!(out.stdout, "> x/\n");
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let ctx = make_ctx(vec!["/bin"], vec![("/bin", true)]);
        let out = LsCommand.execute(ctx).await.unwrap();
        assert_eq!(out.stdout, "> \n");
    }

    #[tokio::test]
    async fn test_ls_file_fails() {
        let ctx = make_ctx(vec!["/a.txt"], vec![("/a.txt", false)]);
        let err = LsCommand.execute(ctx).await.unwrap_err();
        assert!(matches!(err, CommandError::Fs(FsError::NotDirectory { .. })));
    }

    #[tokio::test]
    async fn test_ls_missing_path_fails() {
        let ctx = make_ctx(vec!["/nope"], vec![]);
        let err = LsCommand.execute(ctx).await.unwrap_err();
        assert!(matches!(err, CommandError::Fs(FsError::NotFound { .. })));
    }

    #[test]
    fn test_format_os_wraps_before_every_sixth_entry() {
        let entries: Vec<DirentEntry> = (1..=7).map(|i| entry(&format!("f{}", i), false)).collect();
        assert_eq!(
            format_os(&entries),
            "> 'f1' 'f2' 'f3' 'f4' 'f5' \n'f6' 'f7' \n"
        );
    }

    #[test]
    fn test_format_os_marks_directories() {
        let entries = vec![entry("src", true), entry("Cargo.toml", false)];
        assert_eq!(format_os(&entries), "> 'src/' 'Cargo.toml' \n");
    }
}
