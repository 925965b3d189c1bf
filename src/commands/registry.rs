// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

/// Verbs in the order they are advertised to the user
pub const VERBS: [&str; 7] = ["cd", "ls", "whoami", "wc", "touch", "clear", "exit"];

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        create_shell_registry()
    }
}

use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::exit_cmd::ExitCommand;
use super::ls::LsCommand;
use super::touch::TouchCommand;
use super::wc::WcCommand;
use super::whoami_cmd::WhoamiCommand;

/// Register every shell verb
pub fn register_shell_verbs(registry: &mut CommandRegistry) {
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(WhoamiCommand));
    registry.register(Box::new(WcCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(ExitCommand));
}

/// Create a registry holding the full verb vocabulary
pub fn create_shell_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_shell_verbs(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_holds_every_advertised_verb() {
        let registry = create_shell_registry();
        for verb in VERBS {
            assert!(registry.contains(verb), "missing {}", verb);
        }
        assert_eq!(registry.names().len(), VERBS.len());
    }

    #[test]
    fn test_unknown_verb() {
        let registry = CommandRegistry::default();
        assert!(registry.get("foo").is_none());
        assert_eq!(registry.get("ls").map(|c| c.name()), Some("ls"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = CommandRegistry::new();
        assert!(registry.names().is_empty());
    }
}
