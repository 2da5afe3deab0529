//! Setlist Core
//!
//! Platform-agnostic domain types, traits, and error handling for the Setlist
//! playlist editor.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Song`, `PlaylistDocument`, `SelectedPlaylist`, ids
//! - **Core Traits**: `PlaylistStore` (remote document store) and
//!   `SelectionStore` (shared song selection)
//! - **Error Handling**: `StoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use setlist_core::types::{PlaylistDocument, PlaylistId, Song};
//!
//! let mut playlist = PlaylistDocument::new(PlaylistId::new("p1"), "Road Trip");
//! playlist.songs.push(Song::new("Untitled", "?", "dQw4w9WgXcQ"));
//!
//! let input = playlist.to_input();
//! assert_eq!(input.songs.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use traits::{PlaylistStore, SelectionStore};

pub use types::{
    PlaylistDocument, PlaylistId, PlaylistInput, SelectedPlaylist, Song, SongFields, SongId,
    UserId,
};
