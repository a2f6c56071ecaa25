//! Directory structure rendering.

use crate::namespace::Namespace;
use crate::node::{Folder, Node};

impl Namespace {
    /// Render the whole tree as indented lines, one per node.
    ///
    /// Depth-first, pre-order: each folder renders as `"<indent>+ <name>"`
    /// followed by all of its descendants before the next sibling; files
    /// render as `"<indent>  - <name>"` carrying their folder's indent plus
    /// one extra level. Indentation is two spaces per depth level, the root
    /// at depth zero.
    pub fn list_directory_structure(&self) -> Vec<String> {
        let mut lines = Vec::new();
        render_folder(&mut lines, self.root(), 0);
        lines
    }
}

fn render_folder(lines: &mut Vec<String>, folder: &Folder, level: usize) {
    let indent = "  ".repeat(level);
    lines.push(format!("{}+ {}", indent, folder.name()));
    for child in folder.children() {
        match child {
            Node::Folder(sub) => render_folder(lines, sub, level + 1),
            Node::File(file) => lines.push(format!("{}  - {}", indent, file.name())),
        }
    }
}
