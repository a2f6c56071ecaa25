//! # Arbor Core
//!
//! An in-memory hierarchical namespace: a tree of named folders and files
//! supporting insertion, relocation, enumeration, and name-based search.
//!
//! The tree simulates a filesystem directory structure without touching real
//! storage. A [`Namespace`] owns a single root folder; every operation
//! resolves names with a whole-tree search starting at the root, and missing
//! names degrade to silent no-ops or empty results rather than errors.
//!
//! ## Features
//!
//! - Folders own their children: ordered, uniquely named, moved by value
//! - Whole-tree name resolution for every operation, root included
//! - Case-sensitive structural lookup, case-insensitive file search
//! - Indented pre-order rendering of the full directory structure
//!
//! ## Example
//!
//! ```
//! use arbor_core::{Namespace, NodeKind};
//!
//! # fn main() -> Result<(), arbor_core::Error> {
//! let mut ns = Namespace::new("root");
//! ns.add_file_or_folder("root", "docs", NodeKind::Folder)?;
//! ns.add_file_or_folder("docs", "notes.txt", NodeKind::File)?;
//!
//! assert_eq!(ns.list_contents("docs"), vec!["notes.txt"]);
//! assert_eq!(
//!     ns.search_file_exact_match("docs", "NOTES.TXT"),
//!     Some("notes.txt".to_string())
//! );
//! # Ok(())
//! # }
//! ```

mod error;
mod namespace;
mod node;
mod render;
mod search;

pub use error::{Error, Result};
pub use namespace::Namespace;
pub use node::{File, Folder, Node, NodeKind};
