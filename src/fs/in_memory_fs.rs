//! In-Memory File System Implementation
//!
//! Backend over a [`Tree`]. The tree lives behind a lock so the backend can
//! be shared with the interpreter, but only one dispatch touches it at a time.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::tree::Tree;
use super::types::*;

/// In-memory virtual file system.
pub struct InMemoryFs {
    tree: RwLock<Tree>,
    owner: String,
}

impl InMemoryFs {
    /// Create a backend with an empty tree.
    pub fn new(owner: &str) -> Self {
        Self::from_tree(Tree::new(owner))
    }

    /// Wrap an already seeded tree.
    pub fn from_tree(tree: Tree) -> Self {
        let owner = tree.owner().to_string();
        Self { tree: RwLock::new(tree), owner }
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::from_tree(Tree::default())
    }
}

#[async_trait]
impl FileSystem for InMemoryFs {
    fn kind(&self) -> BackendKind {
        BackendKind::Virtual
    }

    async fn resolve_path(&self, path: &str) -> Result<String, FsError> {
        self.tree.read().await.resolve_path(path)
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirentEntry>, FsError> {
        let tree = self.tree.read().await;
        let entries = tree.entries(path)?;
        Ok(entries
            .into_iter()
            .map(|node| DirentEntry {
                name: node.name().to_string(),
                is_directory: node.is_directory(),
            })
            .collect())
    }

    async fn change_cursor(&self, path: Option<&str>) -> Result<(), FsError> {
        let mut tree = self.tree.write().await;
        match path {
            Some(path) => tree.change_directory(path),
            None => {
                tree.reset_cursor();
                Ok(())
            }
        }
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let tree = self.tree.read().await;
        tree.read_content(path).map(|content| content.as_bytes().to_vec())
    }

    async fn write_empty_file(&self, name: &str) -> Result<(), FsError> {
        self.tree.write().await.create_empty_file(name)
    }

    fn owner(&self) -> String {
        self.owner.clone()
    }
}
