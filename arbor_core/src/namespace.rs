//! The namespace manager: root ownership, name resolution, and mutation.

use crate::error::{Error, Result};
use crate::node::{Folder, Node, NodeKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An in-memory hierarchical namespace with a single root folder.
///
/// The root is created at construction and lives for the lifetime of the
/// namespace. Every operation resolves names with a whole-tree pre-order
/// search from the root; nothing is cached between calls. Structural lookup
/// is case-sensitive exact matching; only the file searches in
/// [`search`](crate::Namespace::search_file_exact_match) are
/// case-insensitive.
///
/// Missing parents, sources, or destinations make an operation a silent
/// no-op or an empty result rather than an error. The single hard error is
/// an insertion whose resolved parent is a file
/// ([`Error::InvalidParent`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    root: Folder,
}

impl Namespace {
    /// Create a namespace whose root folder has the given name.
    pub fn new(root_name: impl Into<String>) -> Self {
        Namespace {
            root: Folder::new(root_name),
        }
    }

    /// The root folder.
    pub fn root(&self) -> &Folder {
        &self.root
    }

    /// Total number of nodes in the tree, the root included.
    pub fn node_count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Add a file or folder under the named parent folder.
    ///
    /// The parent is resolved anywhere in the tree; the root's own name is a
    /// valid match. An unresolved parent is a silent no-op, as is a
    /// case-sensitive duplicate of `name` already present in the parent
    /// (first write wins). Resolving the parent to a file is the one hard
    /// error.
    pub fn add_file_or_folder(
        &mut self,
        parent_name: &str,
        name: &str,
        kind: NodeKind,
    ) -> Result<()> {
        let Some(path) = self.locate(parent_name) else {
            debug!(parent = parent_name, name, "add: parent not found, ignoring");
            return Ok(());
        };
        let Some(parent) = folder_at_mut(&mut self.root, &path) else {
            return Err(Error::invalid_parent(parent_name));
        };
        if parent.add_child(Node::new(name, kind)) {
            debug!(parent = parent_name, name, kind = kind.as_str(), "add: created");
        } else {
            debug!(parent = parent_name, name, "add: duplicate name, ignoring");
        }
        Ok(())
    }

    /// Move a file or folder into the named destination folder.
    ///
    /// The source is resolved anywhere in the tree, then its current parent,
    /// then the destination folder. If any of the three cannot be resolved
    /// the call is a no-op with zero partial mutation; the root matches by
    /// name but has no parent, so it can never be moved.
    ///
    /// The moved node keeps its whole subtree. If the destination already
    /// holds a child with the same name, duplicate suppression applies and
    /// the moved node is dropped from both locations.
    pub fn move_file_or_folder(&mut self, source_name: &str, destination_folder_name: &str) {
        let Some(source_path) = self.locate(source_name) else {
            debug!(source = source_name, "move: source not found, ignoring");
            return;
        };
        let Some((&child_index, parent_path)) = source_path.split_last() else {
            debug!(source = source_name, "move: source is the root, ignoring");
            return;
        };
        let Some(node) = folder_at_mut(&mut self.root, parent_path)
            .and_then(|parent| parent.remove_child(source_name))
        else {
            return;
        };

        // The destination is resolved after the detach. A destination that
        // was only reachable inside the moved subtree (moving a folder into
        // its own descendant) no longer resolves and the detach is rolled
        // back below, keeping the call a no-op.
        let node = match self.locate(destination_folder_name) {
            Some(path) => match folder_at_mut(&mut self.root, &path) {
                Some(destination) => {
                    if destination.add_child(node) {
                        debug!(
                            source = source_name,
                            destination = destination_folder_name,
                            "move: relocated"
                        );
                    } else {
                        debug!(
                            source = source_name,
                            destination = destination_folder_name,
                            "move: destination already holds that name, node dropped"
                        );
                    }
                    return;
                }
                // First match of the destination name is a file.
                None => node,
            },
            None => node,
        };

        if let Some(parent) = folder_at_mut(&mut self.root, parent_path) {
            parent.insert_child(child_index, node);
        }
        debug!(
            source = source_name,
            destination = destination_folder_name,
            "move: destination not resolvable, ignoring"
        );
    }

    /// Names of the immediate children of the named folder, in insertion
    /// order. An unresolved folder yields an empty list.
    pub fn list_contents(&self, folder_name: &str) -> Vec<String> {
        match self.resolve_folder(folder_name) {
            Some(folder) => folder
                .children()
                .iter()
                .map(|child| child.name().to_string())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Resolve a folder by name anywhere in the tree, the root included.
    ///
    /// A first pre-order match that is a file counts as absent.
    pub(crate) fn resolve_folder(&self, name: &str) -> Option<&Folder> {
        let path = self.locate(name)?;
        folder_at(&self.root, &path)
    }

    /// Child-index path from the root to the first pre-order match of
    /// `name`. The empty path is the root itself.
    fn locate(&self, name: &str) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        locate_in(&self.root, name, &mut path).then_some(path)
    }
}

fn locate_in(folder: &Folder, name: &str, path: &mut Vec<usize>) -> bool {
    if folder.name() == name {
        return true;
    }
    for (index, child) in folder.children().iter().enumerate() {
        path.push(index);
        let found = match child {
            Node::File(file) => file.name() == name,
            Node::Folder(sub) => locate_in(sub, name, path),
        };
        if found {
            return true;
        }
        path.pop();
    }
    false
}

fn folder_at<'a>(root: &'a Folder, path: &[usize]) -> Option<&'a Folder> {
    let mut current = root;
    for &index in path {
        current = match current.children().get(index)? {
            Node::Folder(sub) => sub,
            Node::File(_) => return None,
        };
    }
    Some(current)
}

fn folder_at_mut<'a>(root: &'a mut Folder, path: &[usize]) -> Option<&'a mut Folder> {
    let mut current = root;
    for &index in path {
        current = match current.child_at_mut(index)? {
            Node::Folder(sub) => sub,
            Node::File(_) => return None,
        };
    }
    Some(current)
}

fn count_nodes(folder: &Folder) -> usize {
    1 + folder
        .children()
        .iter()
        .map(|child| match child {
            Node::Folder(sub) => count_nodes(sub),
            Node::File(_) => 1,
        })
        .sum::<usize>()
}
