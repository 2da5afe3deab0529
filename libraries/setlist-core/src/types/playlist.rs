/// Playlist domain types
use crate::types::{PlaylistId, Song, SongId};
use serde::{Deserialize, Serialize};

/// A playlist document as held by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDocument {
    /// Unique playlist identifier
    #[serde(rename = "_id")]
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Ordered song list
    pub songs: Vec<Song>,

    /// Whether the playlist has been published
    pub published: bool,
}

impl PlaylistDocument {
    /// Create an unpublished, empty playlist document
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            songs: Vec::new(),
            published: false,
        }
    }

    /// Input that would write this document back unchanged
    pub fn to_input(&self) -> PlaylistInput {
        PlaylistInput {
            name: self.name.clone(),
            songs: self.songs.clone(),
            published: self.published,
        }
    }
}

/// Full-document write payload
///
/// Writes always carry the complete ordered song list; the store replaces
/// the previous list wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistInput {
    /// Playlist name
    pub name: String,

    /// Complete ordered song list
    pub songs: Vec<Song>,

    /// Publication flag
    pub published: bool,
}

/// The globally selected playlist and song
///
/// Only one playlist is selected at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedPlaylist {
    /// Selected playlist
    pub playlist_id: PlaylistId,

    /// Whether the selected playlist is published
    pub published: bool,

    /// Selected song within the playlist
    pub selected_song: Option<SongId>,
}

impl SelectedPlaylist {
    /// Select a playlist, optionally pointing at a song
    pub fn new(playlist_id: PlaylistId, selected_song: Option<SongId>) -> Self {
        Self {
            playlist_id,
            published: false,
            selected_song,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_round_trips_through_input() {
        let mut doc = PlaylistDocument::new(PlaylistId::new("p1"), "Untitled 0");
        doc.songs.push(Song::new("A", "B", "C"));

        let input = doc.to_input();
        assert_eq!(input.name, "Untitled 0");
        assert_eq!(input.songs, doc.songs);
        assert!(!input.published);
    }

    #[test]
    fn document_uses_remote_field_names() {
        let doc: PlaylistDocument = serde_json::from_str(
            r#"{"_id":"p1","name":"Mix","songs":[],"published":true}"#,
        )
        .unwrap();

        assert_eq!(doc.id, PlaylistId::new("p1"));
        assert!(doc.published);
    }
}
