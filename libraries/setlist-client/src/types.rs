//! Types for Setlist GraphQL requests and responses.

use serde::{Deserialize, Serialize};
use setlist_core::{PlaylistDocument, Song};

/// Default path of the GraphQL endpoint below the server URL.
pub const DEFAULT_GRAPHQL_PATH: &str = "/api/graphql";

/// Configuration for connecting to a Setlist server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "https://setlist.example.com")
    pub url: String,

    /// Path of the GraphQL endpoint
    #[serde(default = "default_graphql_path")]
    pub graphql_path: String,

    /// Current access token (if authenticated)
    #[serde(default)]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            graphql_path: default_graphql_path(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::new(url)
        }
    }
}

fn default_graphql_path() -> String {
    DEFAULT_GRAPHQL_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// =============================================================================
// GraphQL envelope
// =============================================================================

/// Request body sent to the GraphQL endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Response body returned by the GraphQL endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Token returned by `login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginVariables<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub login: AuthData,
}

// =============================================================================
// Playlist Types
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct PlaylistVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdatePlaylistVariables<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub songs: &'a [Song],
    pub published: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct NoVariables {}

#[derive(Debug, Deserialize)]
pub(crate) struct PlaylistData {
    pub playlist: Option<PlaylistDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePlaylistData {
    pub update_playlist: Option<PlaylistDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePlaylistData {
    pub create_playlist: PlaylistDocument,
}
