//! Editor configuration

use serde::{Deserialize, Serialize};
use setlist_core::Song;

/// Default media reference for newly created songs
pub const DEFAULT_MEDIA_REF: &str = "dQw4w9WgXcQ";

/// Default number of commands kept for undo
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Settings for an edit session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Maximum commands retained in the undo history
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Title given to new songs
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Artist given to new songs
    #[serde(default = "default_artist")]
    pub default_artist: String,

    /// Media reference given to new songs
    #[serde(default = "default_media_ref")]
    pub default_media_ref: String,
}

impl EditorConfig {
    /// Placeholder song appended by `create_song`
    pub fn placeholder_song(&self) -> Song {
        Song::new(
            self.default_title.clone(),
            self.default_artist.clone(),
            self.default_media_ref.clone(),
        )
    }
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_title() -> String {
    "Untitled".to_string()
}

fn default_artist() -> String {
    "?".to_string()
}

fn default_media_ref() -> String {
    DEFAULT_MEDIA_REF.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            default_title: default_title(),
            default_artist: default_artist(),
            default_media_ref: default_media_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uses_fixed_defaults() {
        let song = EditorConfig::default().placeholder_song();

        assert_eq!(song.id, None);
        assert_eq!(song.title, "Untitled");
        assert_eq!(song.artist, "?");
        assert_eq!(song.media_ref, DEFAULT_MEDIA_REF);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"history_capacity": 5}"#).unwrap();

        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.default_title, "Untitled");
        assert_eq!(config.default_artist, "?");
    }
}
