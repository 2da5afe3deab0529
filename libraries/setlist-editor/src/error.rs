//! Error types for playlist editing

use setlist_core::StoreError;
use thiserror::Error;

/// Editing errors
#[derive(Debug, Error)]
pub enum EditError {
    /// Index does not address a song in the working list
    #[error("Index {index} out of bounds for {len} songs")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Current song count
        len: usize,
    },

    /// The playlist was published, it no longer accepts edits
    #[error("Playlist is published and can no longer be edited")]
    Published,

    /// The remote store rejected or failed a request
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The write task ended without producing a result
    #[error("Remote write aborted: {0}")]
    WriteAborted(String),
}

/// Result type for editing operations
pub type Result<T> = std::result::Result<T, EditError>;
