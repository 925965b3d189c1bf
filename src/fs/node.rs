//! Virtual Tree Nodes
//!
//! A node is either a directory owning its children by name, or a file
//! holding its full body as text.

use std::collections::HashMap;

/// Payload of a node. Directories own their children; files own their content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File { content: String },
    Directory { children: HashMap<String, Node> },
}

/// A single entry in the virtual tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    kind: NodeKind,
}

impl Node {
    /// Create an empty directory node.
    pub fn directory(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Directory { children: HashMap::new() },
        }
    }

    /// Create a file node with the given body.
    pub fn file(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::File { content: content.to_string() },
        }
    }

    /// Segment label (not a full path).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// File body; always empty for directories.
    pub fn content(&self) -> &str {
        match &self.kind {
            NodeKind::File { content } => content,
            NodeKind::Directory { .. } => "",
        }
    }

    /// Children of a directory, `None` for files.
    pub fn children(&self) -> Option<&HashMap<String, Node>> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }

    /// Look up a direct child by name. Files have no children.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|children| children.get(name))
    }

    /// Insert (or overwrite) a direct child. Returns `false` for files.
    pub(crate) fn insert_child(&mut self, node: Node) -> bool {
        match &mut self.kind {
            NodeKind::Directory { children } => {
                children.insert(node.name.clone(), node);
                true
            }
            NodeKind::File { .. } => false,
        }
    }

    /// Walk into the named child, creating it as a directory when missing and
    /// replacing it with a directory when it is a file. Files have no children
    /// to walk into.
    pub(crate) fn ensure_directory(&mut self, name: &str) -> Option<&mut Node> {
        let NodeKind::Directory { children } = &mut self.kind else {
            return None;
        };
        let entry = children
            .entry(name.to_string())
            .or_insert_with(|| Node::directory(name));
        if !entry.is_directory() {
            *entry = Node::directory(name);
        }
        Some(entry)
    }
}
