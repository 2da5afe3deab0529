/// Core traits for Setlist
use crate::error::Result;
use crate::types::{PlaylistDocument, PlaylistId, PlaylistInput, SongId};
use async_trait::async_trait;
use std::sync::Arc;

/// Remote playlist document store
///
/// The durable source of truth for a playlist. Writes replace the whole
/// document; there are no partial patches.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Fetch a playlist by ID
    ///
    /// # Errors
    /// `NotFound` if no such playlist exists, `Unauthorized` if the caller
    /// may not read it
    async fn fetch_playlist(&self, id: &PlaylistId) -> Result<PlaylistDocument>;

    /// Replace a playlist's name, songs and publication flag
    ///
    /// Returns the document as stored, with ids assigned to new songs.
    ///
    /// # Errors
    /// `Forbidden` if the playlist is already published, `Unauthorized` if
    /// the caller does not own it, `NotFound` if it was deleted
    async fn write_playlist(&self, id: &PlaylistId, input: PlaylistInput)
        -> Result<PlaylistDocument>;
}

/// Shared song selection state
///
/// Injected into the editor so it can keep the selection valid when the
/// selected song is removed. Purely local; never fails.
pub trait SelectionStore: Send + Sync {
    /// Selected song for this playlist, `None` if the playlist is not the
    /// selected one or nothing is selected
    fn selection(&self, playlist_id: &PlaylistId) -> Option<SongId>;

    /// Select a song (or nothing) in this playlist
    fn set_selection(&self, playlist_id: &PlaylistId, song_id: Option<SongId>);

    /// Note that this playlist was published
    fn mark_published(&self, playlist_id: &PlaylistId) {
        let _ = playlist_id;
    }
}

impl<T: SelectionStore + ?Sized> SelectionStore for Arc<T> {
    fn selection(&self, playlist_id: &PlaylistId) -> Option<SongId> {
        (**self).selection(playlist_id)
    }

    fn set_selection(&self, playlist_id: &PlaylistId, song_id: Option<SongId>) {
        (**self).set_selection(playlist_id, song_id);
    }

    fn mark_published(&self, playlist_id: &PlaylistId) {
        (**self).mark_published(playlist_id);
    }
}
