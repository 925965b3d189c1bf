//! Virtual Filesystem Tree
//!
//! Owns the sentinel root node and a cursor naming the current directory.
//!
//! Path resolution rules:
//! - `""` and `"."` name the cursor
//! - `".."` and `"/"` name the root
//! - a leading `/` starts at the root, anything else starts at the cursor
//! - empty segments are discarded
//! - a `..` segment anywhere in a path jumps to the root (there are no parent
//!   links, so "up" is flattened to the root)
//!
//! Resolution does not check directory-ness; consumers (`list`,
//! `change_directory`, `read_content`) do.

use super::node::Node;
use super::types::FsError;

pub const DEFAULT_OWNER: &str = "Default user";

/// In-memory tree with a movable current-directory cursor.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
    /// Segments from the root to the current directory. Always names a directory.
    cursor: Vec<String>,
    owner: String,
}

impl Tree {
    /// Create an empty tree (root only) with the cursor at the root.
    pub fn new(owner: &str) -> Self {
        Self {
            root: Node::directory("/"),
            cursor: Vec::new(),
            owner: owner.to_string(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Display label of whoever runs the session.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The current directory node.
    pub fn cursor(&self) -> &Node {
        node_at(&self.root, &self.cursor).unwrap_or(&self.root)
    }

    /// Absolute path of the cursor, e.g. `/docs/notes`.
    pub fn cursor_path(&self) -> String {
        join_segments(&self.cursor)
    }

    /// Create (or overwrite) a node at a root-relative path, creating missing
    /// intermediate directories. Last write wins.
    pub fn create_node(&mut self, path: &str, is_directory: bool, content: &str) {
        let parts: Vec<&str> = split_segments(path).collect();
        let Some((last, parents)) = parts.split_last() else {
            return;
        };

        let Some(current) = parents
            .iter()
            .try_fold(&mut self.root, |node, part| node.ensure_directory(part))
        else {
            return;
        };

        let node = if is_directory {
            Node::directory(last)
        } else {
            Node::file(last, content)
        };
        current.insert_child(node);

        // Overwriting an ancestor of the cursor detaches it; fall back to the root.
        if !node_at(&self.root, &self.cursor).is_some_and(Node::is_directory) {
            self.cursor.clear();
        }
    }

    /// Resolve a path to a node.
    pub fn resolve(&self, path: &str) -> Result<&Node, FsError> {
        self.locate(path).map(|(_, node)| node)
    }

    /// Resolve a path to its absolute display form.
    pub fn resolve_path(&self, path: &str) -> Result<String, FsError> {
        self.locate(path).map(|(segments, _)| join_segments(&segments))
    }

    /// Child names of a directory. Order is not significant.
    pub fn list(&self, path: &str) -> Result<Vec<String>, FsError> {
        Ok(self
            .entries(path)?
            .into_iter()
            .map(|node| node.name().to_string())
            .collect())
    }

    /// Child nodes of a directory. Order is not significant.
    pub fn entries(&self, path: &str) -> Result<Vec<&Node>, FsError> {
        let node = self.resolve(path)?;
        match node.children() {
            Some(children) => Ok(children.values().collect()),
            None => Err(FsError::NotDirectory { path: path.to_string() }),
        }
    }

    /// Move the cursor. On failure the cursor is left where it was.
    pub fn change_directory(&mut self, path: &str) -> Result<(), FsError> {
        let (segments, node) = self.locate(path)?;
        if !node.is_directory() {
            return Err(FsError::NotDirectory { path: path.to_string() });
        }
        self.cursor = segments;
        Ok(())
    }

    /// Move the cursor back to the root.
    pub fn reset_cursor(&mut self) {
        self.cursor.clear();
    }

    /// Body of a file.
    pub fn read_content(&self, path: &str) -> Result<&str, FsError> {
        let node = self.resolve(path)?;
        if node.is_directory() {
            return Err(FsError::IsDirectory { path: path.to_string() });
        }
        Ok(node.content())
    }

    /// Insert (or overwrite) an empty file as a direct child of the cursor.
    pub fn create_empty_file(&mut self, name: &str) -> Result<(), FsError> {
        if name.is_empty() {
            return Err(FsError::InvalidArgument {
                message: "filename cannot be empty".to_string(),
            });
        }
        let created = self
            .cursor_mut()
            .is_some_and(|dir| dir.insert_child(Node::file(name, "")));
        if !created {
            return Err(FsError::NotDirectory { path: self.cursor_path() });
        }
        Ok(())
    }

    fn cursor_mut(&mut self) -> Option<&mut Node> {
        let Tree { root, cursor, .. } = self;
        // The cursor always names existing directories, so this only walks.
        cursor
            .iter()
            .try_fold(root, |node, segment| node.ensure_directory(segment))
    }

    fn locate(&self, path: &str) -> Result<(Vec<String>, &Node), FsError> {
        match path {
            "" | "." => return Ok((self.cursor.clone(), self.cursor())),
            ".." | "/" => return Ok((Vec::new(), &self.root)),
            _ => {}
        }

        let (mut segments, mut node) = if path.starts_with('/') {
            (Vec::new(), &self.root)
        } else {
            (self.cursor.clone(), self.cursor())
        };

        for part in split_segments(path) {
            if part == ".." {
                segments.clear();
                node = &self.root;
                continue;
            }
            match node.child(part) {
                Some(child) => {
                    segments.push(part.to_string());
                    node = child;
                }
                None => return Err(FsError::NotFound { path: path.to_string() }),
            }
        }

        Ok((segments, node))
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}

fn join_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

fn node_at<'a>(root: &'a Node, segments: &[String]) -> Option<&'a Node> {
    segments
        .iter()
        .try_fold(root, |node, segment| node.child(segment))
}
