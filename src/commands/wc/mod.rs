// src/commands/wc/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandError, CommandOutput};
use crate::fs::BackendKind;

pub struct WcCommand;

#[derive(Debug, Default, PartialEq, Eq)]
struct Stats {
    lines: usize,
    words: usize,
    bytes: usize,
}

fn count_stats(kind: BackendKind, content: &[u8]) -> Stats {
    Stats {
        lines: kind.line_count(content),
        words: content
            .split(u8::is_ascii_whitespace)
            .filter(|word| !word.is_empty())
            .count(),
        bytes: content.len(),
    }
}

#[async_trait]
impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    async fn execute(&self, ctx: CommandContext) -> Result<CommandOutput, CommandError> {
        let file = ctx.required_operand()?;
        let content = ctx.fs.read_file(file).await?;
        let stats = count_stats(ctx.fs.kind(), &content);
        Ok(CommandOutput::text(format!(
            "> {} {} {} {}\n",
            stats.lines, stats.words, stats.bytes, file
        )))
    }
}
