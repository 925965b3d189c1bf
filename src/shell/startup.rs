//! Startup
//!
//! Turns settings into a backend and an optional startup script. Load
//! failures never end the session: a bad tree description falls back to the
//! OS backend, a bad script falls back to interactive input, and both leave
//! a visible warning in the output.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Settings;
use crate::fs::{load_from_csv, FileSystem, InMemoryFs, OsFs, Tree};
use crate::shell::console::Console;
use crate::shell::script::Script;

/// Pick the backend: the in-memory tree when a description loads, otherwise the OS.
pub async fn select_backend(settings: &Settings, console: &mut dyn Console) -> Arc<dyn FileSystem> {
    let Some(path) = &settings.vfs else {
        info!("No tree description given, using the real filesystem");
        return Arc::new(OsFs::new());
    };

    let mut tree = Tree::new(&settings.owner);
    match load_from_csv(&mut tree, path).await {
        Ok(rows) => {
            info!("Loaded {} rows from {}", rows, path.display());
            Arc::new(InMemoryFs::from_tree(tree))
        }
        Err(e) => {
            warn!("Falling back to the real filesystem: {}", e);
            console.write(&format!("Error loading VFS: {}\n Started in OS mode\n", e));
            Arc::new(OsFs::new())
        }
    }
}

/// Load the startup script, if one was requested.
pub async fn load_startup_script(settings: &Settings, console: &mut dyn Console) -> Option<Script> {
    let path = settings.script.as_ref()?;
    match Script::load(path).await {
        Ok(script) => {
            info!("Loaded script {} ({} lines)", path.display(), script.line_count());
            Some(script)
        }
        Err(e) => {
            warn!("Script disabled: {}", e);
            console.write(&format!("Error loading script: {}\n Started in interactive mode\n", e));
            None
        }
    }
}
