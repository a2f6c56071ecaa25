//! Error types for arbor_core.

use thiserror::Error;

/// Result type alias using arbor_core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during namespace operations.
///
/// Most failure classes are deliberately not represented here: a missing
/// parent, source, or destination makes the operation a silent no-op or an
/// empty result, and a duplicate name suppresses the insertion without
/// complaint. The only condition surfaced as a hard error is an insertion
/// that targets a node which cannot hold children.
#[derive(Error, Debug)]
pub enum Error {
    /// Target of an insertion is a file, not a folder.
    #[error("Invalid parent: {name} is not a folder")]
    InvalidParent { name: String },
}

impl Error {
    /// Create an InvalidParent error.
    pub fn invalid_parent(name: impl Into<String>) -> Self {
        Error::InvalidParent { name: name.into() }
    }
}
