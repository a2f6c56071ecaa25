//! Node model: files, folders, and the closed node variant set.

use serde::{Deserialize, Serialize};

/// Kind of node in the namespace tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A leaf node with no children.
    File,
    /// A container node holding uniquely-named children.
    Folder,
}

impl NodeKind {
    /// Get the string name of this node kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "folder",
        }
    }
}

/// A leaf node with no children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    name: String,
}

impl File {
    /// Create a new file node.
    pub fn new(name: impl Into<String>) -> Self {
        File { name: name.into() }
    }

    /// Name of the file, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A container node owning an ordered sequence of children.
///
/// Children keep insertion order and are unique by exact (case-sensitive)
/// name within their folder. The folder is the sole owner of its children:
/// relocating a node between folders is a detach followed by an attach of
/// the owned value, never a shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    name: String,
    children: Vec<Node>,
}

impl Folder {
    /// Create a new, empty folder.
    pub fn new(name: impl Into<String>) -> Self {
        Folder {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Name of the folder, fixed at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Immediate children, in insertion order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Attach a child, keeping per-folder name uniqueness.
    ///
    /// If a child with the same (case-sensitive) name already exists, the
    /// node is dropped and `false` is returned: the first write wins and no
    /// error is raised.
    pub fn add_child(&mut self, node: Node) -> bool {
        if self.find_child(node.name()).is_some() {
            return false;
        }
        self.children.push(node);
        true
    }

    /// Detach the child with the given name, returning its whole subtree.
    pub fn remove_child(&mut self, name: &str) -> Option<Node> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }

    /// Immediate child with the given (case-sensitive) name.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    pub(crate) fn child_at_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.children.get_mut(index)
    }

    pub(crate) fn insert_child(&mut self, index: usize, node: Node) {
        self.children.insert(index, node);
    }
}

/// Either a file or a folder in the namespace tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A leaf node.
    File(File),
    /// A container node.
    Folder(Folder),
}

impl Node {
    /// Create a new node of the given kind.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        match kind {
            NodeKind::File => Node::File(File::new(name)),
            NodeKind::Folder => Node::Folder(Folder::new(name)),
        }
    }

    /// Name of the node.
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Folder(folder) => folder.name(),
        }
    }

    /// True iff the node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Kind of the node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Folder(_) => NodeKind::Folder,
        }
    }

    /// Borrow the folder variant, if this is one.
    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }

    /// Mutably borrow the folder variant, if this is one.
    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Node::Folder(folder) => Some(folder),
            Node::File(_) => None,
        }
    }
}
