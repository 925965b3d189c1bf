//! Startup Configuration
//!
//! Command-line flags, optionally layered over a TOML file. Flags win.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Deserialize;
use thiserror::Error;

use crate::fs::DEFAULT_OWNER;

#[derive(Parser, Debug, Default)]
#[command(name = "vfs-shell")]
#[command(about = "A terminal shell over the real filesystem or an in-memory tree")]
#[command(version)]
pub struct Cli {
    /// Tree description (CSV) to run against instead of the real filesystem
    #[arg(short = 'v', long = "vfs")]
    pub vfs: Option<PathBuf>,

    /// Script to run at startup
    #[arg(short = 's', long = "script")]
    pub script: Option<PathBuf>,

    /// Owner label reported by `whoami` in tree mode
    #[arg(short = 'o', long = "owner")]
    pub owner: Option<String>,

    /// TOML file with `vfs`, `script` and `owner` keys
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Diagnostic log level (written to stderr)
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Trace => Some(tracing::Level::TRACE),
        }
    }
}

/// Keys accepted in the config file
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub vfs: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub owner: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Effective session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absent selects the OS backend
    pub vfs: Option<PathBuf>,
    /// Absent means purely interactive
    pub script: Option<PathBuf>,
    pub owner: String,
}

impl Settings {
    /// Combine the CLI with the config file it names, if any.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => read_config(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    /// Flags override file values. Empty paths count as absent.
    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        Self {
            vfs: non_empty(cli.vfs.clone().or(file.vfs)),
            script: non_empty(cli.script.clone().or(file.script)),
            owner: cli
                .owner
                .clone()
                .or(file.owner)
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
        }
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["vfs-shell", "-v", "tree.csv", "--script", "start.txt"]);
        assert_eq!(cli.vfs, Some(PathBuf::from("tree.csv")));
        assert_eq!(cli.script, Some(PathBuf::from("start.txt")));
        assert_eq!(cli.log_level, LogLevel::Off);
    }

    #[test]
    fn test_defaults_select_os_interactive() {
        let settings = Settings::resolve(&Cli::parse_from(["vfs-shell"])).unwrap();
        assert_eq!(settings, Settings {
            vfs: None,
            script: None,
            owner: DEFAULT_OWNER.to_string(),
        });
    }

    #[test]
    fn test_empty_paths_are_absent() {
        let cli = Cli {
            vfs: Some(PathBuf::new()),
            script: Some(PathBuf::new()),
            ..Default::default()
        };
        let settings = Settings::merge(&cli, FileConfig::default());
        assert_eq!(settings.vfs, None);
        assert_eq!(settings.script, None);
    }

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from(["vfs-shell", "--owner", "root"]);
        let file = FileConfig {
            vfs: Some(PathBuf::from("from-file.csv")),
            script: None,
            owner: Some("file-owner".to_string()),
        };
        let settings = Settings::merge(&cli, file);
        assert_eq!(settings.vfs, Some(PathBuf::from("from-file.csv")));
        assert_eq!(settings.owner, "root");
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "vfs = \"tree.csv\"\nowner = \"alice\"\n").unwrap();
        let cli = Cli {
            config: Some(path),
            ..Default::default()
        };
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.vfs, Some(PathBuf::from("tree.csv")));
        assert_eq!(settings.owner, "alice");
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.toml");
        std::fs::write(&path, "theme = \"dark\"\n").unwrap();
        let cli = Cli {
            config: Some(path),
            ..Default::default()
        };
        assert!(matches!(Settings::resolve(&cli), Err(ConfigError::Parse { .. })));

        let missing = Cli {
            config: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };
        assert!(matches!(Settings::resolve(&missing), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Off.to_tracing_level(), None);
        assert_eq!(LogLevel::Debug.to_tracing_level(), Some(tracing::Level::DEBUG));
    }
}
