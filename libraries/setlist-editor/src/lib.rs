//! Setlist playlist editor
//!
//! Incremental playlist editing with undo/redo, kept in sync with a remote
//! playlist store.
//!
//! # Features
//!
//! - **Command model**: insert, remove, move and replace, each with an exact
//!   inverse
//! - **Transaction history**: bounded undo/redo stack that drops the redo
//!   branch when a new edit is recorded
//! - **Edit sessions**: optimistic local edits, every change pushed to the
//!   store as a full-document write
//! - **Selection upkeep**: the shared song selection follows removals
//!
//! # Example
//!
//! ```ignore
//! use setlist_editor::{EditSession, EditorConfig, MemoryPlaylistStore, SharedSelection};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryPlaylistStore::new(user.clone()));
//! let mut session =
//!     EditSession::open(store, SharedSelection::new(), playlist_id, EditorConfig::default())
//!         .await?;
//!
//! let write = session.create_song()?;
//! session.settle(write).await?;
//!
//! if let Some(write) = session.undo()? {
//!     session.settle(write).await?;
//! }
//! ```

#![forbid(unsafe_code)]

pub mod command;
mod config;
mod error;
pub mod history;
mod memory;
mod selection;
mod session;

pub use command::Command;
pub use config::{EditorConfig, DEFAULT_HISTORY_CAPACITY, DEFAULT_MEDIA_REF};
pub use error::{EditError, Result};
pub use history::TransactionHistory;
pub use memory::MemoryPlaylistStore;
pub use selection::SharedSelection;
pub use session::{EditSession, PendingWrite, PlaylistWorkingState};
