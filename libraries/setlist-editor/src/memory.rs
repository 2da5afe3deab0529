//! In-memory playlist store
//!
//! Applies the same rules as the GraphQL backend: only the author may edit,
//! published playlists are frozen, names are unique per author, and songs
//! written without an id get one assigned.

use async_trait::async_trait;
use setlist_core::{
    PlaylistDocument, PlaylistId, PlaylistInput, PlaylistStore, SongId, StoreError, UserId,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredPlaylist {
    author: UserId,
    document: PlaylistDocument,
}

/// Playlist store held entirely in memory
///
/// Requests are made on behalf of a single caller; playlists authored by
/// someone else are readable only once published.
#[derive(Debug)]
pub struct MemoryPlaylistStore {
    caller: UserId,
    playlists: RwLock<HashMap<PlaylistId, StoredPlaylist>>,
    writes: AtomicUsize,
}

impl MemoryPlaylistStore {
    /// Create an empty store acting for `caller`
    pub fn new(caller: UserId) -> Self {
        Self {
            caller,
            playlists: RwLock::new(HashMap::new()),
            writes: AtomicUsize::new(0),
        }
    }

    /// Seed a playlist authored by `author`
    ///
    /// Songs without an id are assigned one.
    pub async fn insert(&self, author: UserId, mut document: PlaylistDocument) {
        assign_song_ids(&mut document);
        self.playlists
            .write()
            .await
            .insert(document.id.clone(), StoredPlaylist { author, document });
    }

    /// Current stored document
    pub async fn get(&self, id: &PlaylistId) -> Option<PlaylistDocument> {
        self.playlists
            .read()
            .await
            .get(id)
            .map(|stored| stored.document.clone())
    }

    /// Delete a playlist, returns whether it existed
    pub async fn remove(&self, id: &PlaylistId) -> bool {
        self.playlists.write().await.remove(id).is_some()
    }

    /// Number of accepted writes
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

fn assign_song_ids(document: &mut PlaylistDocument) {
    for song in document.songs.iter_mut().filter(|song| song.id.is_none()) {
        song.id = Some(SongId::generate());
    }
}

#[async_trait]
impl PlaylistStore for MemoryPlaylistStore {
    async fn fetch_playlist(&self, id: &PlaylistId) -> setlist_core::Result<PlaylistDocument> {
        let playlists = self.playlists.read().await;
        let stored = playlists
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if !stored.document.published && stored.author != self.caller {
            return Err(StoreError::unauthorized("Not authorized!"));
        }

        Ok(stored.document.clone())
    }

    async fn write_playlist(
        &self,
        id: &PlaylistId,
        input: PlaylistInput,
    ) -> setlist_core::Result<PlaylistDocument> {
        let mut playlists = self.playlists.write().await;

        let stored = playlists
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        if stored.author != self.caller {
            return Err(StoreError::unauthorized("Not authorized!"));
        }
        if stored.document.published {
            return Err(StoreError::forbidden("Playlist already published!"));
        }

        if input.name != stored.document.name {
            let taken = playlists.values().any(|other| {
                other.author == self.caller && other.document.name == input.name
            });
            if taken {
                return Err(StoreError::conflict("Playlist name already taken!"));
            }
        }

        let Some(stored) = playlists.get_mut(id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        stored.document.name = input.name;
        stored.document.songs = input.songs;
        stored.document.published = input.published;
        assign_song_ids(&mut stored.document);

        self.writes.fetch_add(1, Ordering::SeqCst);
        debug!(
            playlist_id = %id,
            songs = stored.document.songs.len(),
            published = stored.document.published,
            "Stored playlist"
        );

        Ok(stored.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use setlist_core::Song;

    fn owner() -> UserId {
        UserId::new("alice")
    }

    async fn store_with(document: PlaylistDocument) -> MemoryPlaylistStore {
        let store = MemoryPlaylistStore::new(owner());
        store.insert(owner(), document).await;
        store
    }

    #[tokio::test]
    async fn fetch_missing_playlist_is_not_found() {
        let store = MemoryPlaylistStore::new(owner());
        let err = store
            .fetch_playlist(&PlaylistId::new("nope"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(PlaylistId::new("nope")));
    }

    #[tokio::test]
    async fn unpublished_playlist_of_other_author_is_hidden() {
        let store = MemoryPlaylistStore::new(owner());
        store
            .insert(
                UserId::new("bob"),
                PlaylistDocument::new(PlaylistId::new("p1"), "Bob's"),
            )
            .await;

        let err = store.fetch_playlist(&PlaylistId::new("p1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn write_assigns_ids_to_new_songs() {
        let store = store_with(PlaylistDocument::new(PlaylistId::new("p1"), "Mix")).await;
        let input = PlaylistInput {
            name: "Mix".to_string(),
            songs: vec![Song::new("Untitled", "?", "ref")],
            published: false,
        };

        let doc = store
            .write_playlist(&PlaylistId::new("p1"), input)
            .await
            .unwrap();
        assert!(doc.songs[0].id.is_some());
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn published_playlist_rejects_writes() {
        let mut doc = PlaylistDocument::new(PlaylistId::new("p1"), "Mix");
        doc.published = true;
        let store = store_with(doc.clone()).await;

        let err = store
            .write_playlist(&PlaylistId::new("p1"), doc.to_input())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Forbidden(_)));
        assert_eq!(store.write_count(), 0);
    }

    #[tokio::test]
    async fn rename_to_taken_name_conflicts() {
        let store = store_with(PlaylistDocument::new(PlaylistId::new("p1"), "One")).await;
        store
            .insert(owner(), PlaylistDocument::new(PlaylistId::new("p2"), "Two"))
            .await;

        let mut input = store.get(&PlaylistId::new("p1")).await.unwrap().to_input();
        input.name = "Two".to_string();

        let err = store
            .write_playlist(&PlaylistId::new("p1"), input)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn other_author_cannot_write() {
        let store = MemoryPlaylistStore::new(owner());
        let doc = PlaylistDocument::new(PlaylistId::new("p1"), "Bob's");
        store.insert(UserId::new("bob"), doc.clone()).await;

        let err = store
            .write_playlist(&PlaylistId::new("p1"), doc.to_input())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unauthorized(_)));
    }
}
