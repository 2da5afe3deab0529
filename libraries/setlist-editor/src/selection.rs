//! Shared song selection
//!
//! The application tracks a single selected playlist and, within it, a
//! selected song. Every clone of [`SharedSelection`] sees the same state.

use setlist_core::{PlaylistId, SelectedPlaylist, SelectionStore, SongId};
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle over the global selection
#[derive(Debug, Clone, Default)]
pub struct SharedSelection {
    inner: Arc<RwLock<Option<SelectedPlaylist>>>,
}

impl SharedSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection, if any playlist is selected
    pub fn current(&self) -> Option<SelectedPlaylist> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the selection wholesale
    pub fn replace(&self, selected: Option<SelectedPlaylist>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = selected;
    }
}

impl SelectionStore for SharedSelection {
    fn selection(&self, playlist_id: &PlaylistId) -> Option<SongId> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .filter(|selected| &selected.playlist_id == playlist_id)
            .and_then(|selected| selected.selected_song.clone())
    }

    fn set_selection(&self, playlist_id: &PlaylistId, song_id: Option<SongId>) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(selected) = guard.as_mut().filter(|s| &s.playlist_id == playlist_id) {
            selected.selected_song = song_id;
            return;
        }
        *guard = Some(SelectedPlaylist::new(playlist_id.clone(), song_id));
    }

    fn mark_published(&self, playlist_id: &PlaylistId) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(selected) = guard.as_mut().filter(|s| &s.playlist_id == playlist_id) {
            selected.published = true;
        }
    }
}
