//! Name-based file search.
//!
//! Structural lookup elsewhere in the crate is case-sensitive; both searches
//! here are deliberately case-insensitive. The asymmetry is part of the
//! namespace's contract and is preserved exactly.

use crate::namespace::Namespace;
use crate::node::{Folder, Node};

impl Namespace {
    /// Exact-name file search among the immediate children of a folder.
    ///
    /// Case-insensitive; does not descend into subfolders and never matches
    /// a folder. Returns the stored name of the first match, or `None` when
    /// either the folder or the file is absent.
    pub fn search_file_exact_match(&self, folder_name: &str, file_name: &str) -> Option<String> {
        let folder = self.resolve_folder(folder_name)?;
        let wanted = file_name.to_lowercase();
        folder.children().iter().find_map(|child| match child {
            Node::File(file) if file.name().to_lowercase() == wanted => {
                Some(file.name().to_string())
            }
            _ => None,
        })
    }

    /// Substring file search over the whole subtree of a folder.
    ///
    /// Case-insensitive containment, descending into every subfolder.
    /// Matches are collected in pre-order: siblings in insertion order, each
    /// subtree exhausted before the next sibling. Folders never match. An
    /// unresolved folder yields an empty result.
    pub fn search_file_like_match(&self, folder_name: &str, pattern: &str) -> Vec<String> {
        let Some(folder) = self.resolve_folder(folder_name) else {
            return Vec::new();
        };
        let mut matches = Vec::new();
        collect_like_matches(folder, &pattern.to_lowercase(), &mut matches);
        matches
    }
}

fn collect_like_matches(folder: &Folder, pattern: &str, matches: &mut Vec<String>) {
    for child in folder.children() {
        match child {
            Node::File(file) => {
                if file.name().to_lowercase().contains(pattern) {
                    matches.push(file.name().to_string());
                }
            }
            Node::Folder(sub) => collect_like_matches(sub, pattern, matches),
        }
    }
}
