/// Song domain types
use crate::types::SongId;
use serde::{Deserialize, Serialize};

/// A song entry in a playlist
///
/// The wire format follows the remote document: the id travels as `_id` and
/// the media reference as `youTubeId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Store-assigned identifier, `None` until the song is first persisted
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SongId>,

    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Reference to the playable media
    #[serde(rename = "youTubeId")]
    pub media_ref: String,
}

impl Song {
    /// Create a song that has not been persisted yet
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        media_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            media_ref: media_ref.into(),
        }
    }

    /// Attach a store-assigned id
    #[must_use]
    pub fn with_id(mut self, id: SongId) -> Self {
        self.id = Some(id);
        self
    }

    /// Editable fields of this song
    pub fn fields(&self) -> SongFields {
        SongFields {
            title: self.title.clone(),
            artist: self.artist.clone(),
            media_ref: self.media_ref.clone(),
        }
    }

    /// Build the song that replaces this one, keeping its identifier
    pub fn replaced_with(&self, fields: SongFields) -> Song {
        Song {
            id: self.id.clone(),
            title: fields.title,
            artist: fields.artist,
            media_ref: fields.media_ref,
        }
    }
}

/// User-editable song fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFields {
    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Reference to the playable media
    #[serde(rename = "youTubeId")]
    pub media_ref: String,
}

impl SongFields {
    /// Create a new set of song fields
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        media_ref: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            media_ref: media_ref.into(),
        }
    }
}
