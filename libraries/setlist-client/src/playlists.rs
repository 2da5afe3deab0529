//! Playlist queries and mutations.

use crate::error::{ClientError, Result};
use crate::graphql::GraphqlTransport;
use crate::types::{
    CreatePlaylistData, NoVariables, PlaylistData, PlaylistVariables, UpdatePlaylistData,
    UpdatePlaylistVariables,
};
use reqwest::Client;
use setlist_core::{PlaylistDocument, PlaylistId, PlaylistInput};
use tracing::debug;

const PLAYLIST_QUERY: &str = "query Playlist($id: ID!) { \
    playlist(id: $id) { _id name songs { _id title artist youTubeId } published } }";

const UPDATE_PLAYLIST_MUTATION: &str = "mutation UpdatePlaylist(\
    $id: ID!, $name: String!, $songs: [SongInput!]!, $published: Boolean!) { \
    updatePlaylist(id: $id, playlistInput: { name: $name, songs: $songs, published: $published }) { \
    _id name songs { _id title artist youTubeId } published } }";

const CREATE_PLAYLIST_MUTATION: &str = "mutation CreatePlaylist { \
    createPlaylist { _id name songs { _id title artist youTubeId } published } }";

/// Playlist client for a Setlist server.
pub struct PlaylistClient<'a> {
    http: &'a Client,
    endpoint: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(http: &'a Client, endpoint: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            endpoint,
            access_token,
        }
    }

    fn transport(&self) -> GraphqlTransport<'_> {
        GraphqlTransport::new(self.http, self.endpoint, self.access_token)
    }

    /// Fetch a playlist by id.
    pub async fn get_playlist(&self, id: &PlaylistId) -> Result<PlaylistDocument> {
        let data: PlaylistData = self
            .transport()
            .execute(PLAYLIST_QUERY, PlaylistVariables { id: id.as_str() }, id.as_str())
            .await?;

        let playlist = data
            .playlist
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;

        debug!(id = %id, songs = playlist.songs.len(), "Fetched playlist");
        Ok(playlist)
    }

    /// Replace a playlist's name, songs and publication flag.
    pub async fn update_playlist(
        &self,
        id: &PlaylistId,
        input: &PlaylistInput,
    ) -> Result<PlaylistDocument> {
        let variables = UpdatePlaylistVariables {
            id: id.as_str(),
            name: &input.name,
            songs: &input.songs,
            published: input.published,
        };

        let data: UpdatePlaylistData = self
            .transport()
            .execute(UPDATE_PLAYLIST_MUTATION, variables, id.as_str())
            .await?;

        let playlist = data
            .update_playlist
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;

        debug!(
            id = %id,
            songs = playlist.songs.len(),
            published = playlist.published,
            "Updated playlist"
        );
        Ok(playlist)
    }

    /// Create a new empty playlist owned by the caller.
    pub async fn create_playlist(&self) -> Result<PlaylistDocument> {
        if self.access_token.is_none() {
            return Err(ClientError::AuthRequired);
        }

        let data: CreatePlaylistData = self
            .transport()
            .execute(CREATE_PLAYLIST_MUTATION, NoVariables {}, "createPlaylist")
            .await?;

        debug!(id = %data.create_playlist.id, "Created playlist");
        Ok(data.create_playlist)
    }
}
