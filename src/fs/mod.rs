//! File System Module
//!
//! Provides the virtual tree and the two backends the interpreter runs against:
//! - InMemoryFs: the in-memory tree seeded from a CSV description
//! - OsFs: the real filesystem

pub mod types;
pub mod node;
pub mod tree;
pub mod loader;
pub mod in_memory_fs;
pub mod os_fs;

pub use types::*;
pub use node::{Node, NodeKind};
pub use tree::{Tree, DEFAULT_OWNER};
pub use loader::{load_from_csv, load_from_reader, LoadError};
pub use in_memory_fs::InMemoryFs;
pub use os_fs::{DetachedWorkingDir, OsFs, ProcessWorkingDir, WorkingDirectory};
