//! Main Setlist server client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::playlists::PlaylistClient;
use crate::types::{AuthData, ClientConfig};
use async_trait::async_trait;
use reqwest::Client;
use setlist_core::{PlaylistDocument, PlaylistId, PlaylistInput, PlaylistStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;
use url::Url;

/// Main client for interacting with a Setlist server.
///
/// The client holds the access token and implements [`PlaylistStore`], so an
/// edit session can write straight through it.
///
/// # Example
///
/// ```ignore
/// use setlist_client::{ClientConfig, SetlistClient};
///
/// let client = SetlistClient::new(ClientConfig::new("https://setlist.example.com"))?;
/// client.login("me@example.com", "secret").await?;
///
/// let playlist = client.playlists().await.client().get_playlist(&id).await?;
/// println!("{} has {} songs", playlist.name, playlist.songs.len());
/// ```
pub struct SetlistClient {
    http: Client,
    endpoint: String,
    config: Arc<RwLock<ClientConfig>>,
}

impl SetlistClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let path = if config.graphql_path.starts_with('/') {
            config.graphql_path.clone()
        } else {
            format!("/{}", config.graphql_path)
        };
        let endpoint = format!("{}{}", url, path);

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Setlist/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let normalized_config = ClientConfig {
            url,
            graphql_path: path,
            ..config
        };

        Ok(Self {
            http,
            endpoint,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the server URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Full URL of the GraphQL endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if the client has an access token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.access_token.is_some()
    }

    /// Login with email and password.
    ///
    /// On success, the token is stored for subsequent requests.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData> {
        let auth = AuthClient::new(&self.http, &self.endpoint)
            .login(email, password)
            .await?;

        self.config.write().await.access_token = Some(auth.token.clone());
        Ok(auth)
    }

    /// Set the token directly (e.g., from stored credentials).
    pub async fn set_token(&self, access_token: impl Into<String>) {
        self.config.write().await.access_token = Some(access_token.into());
    }

    /// Get the current token.
    pub async fn token(&self) -> Option<String> {
        self.config.read().await.access_token.clone()
    }

    /// Clear the stored token (logout).
    pub async fn logout(&self) {
        self.config.write().await.access_token = None;
        info!("Logged out");
    }

    /// Get a handle for playlist operations.
    ///
    /// Reading published playlists works without a token; writes will fail
    /// with `Unauthorized` from the server.
    pub async fn playlists(&self) -> PlaylistClientHandle {
        PlaylistClientHandle {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            access_token: self.token().await,
        }
    }
}

#[async_trait]
impl PlaylistStore for SetlistClient {
    async fn fetch_playlist(&self, id: &PlaylistId) -> setlist_core::Result<PlaylistDocument> {
        let handle = self.playlists().await;
        Ok(handle.client().get_playlist(id).await?)
    }

    async fn write_playlist(
        &self,
        id: &PlaylistId,
        input: PlaylistInput,
    ) -> setlist_core::Result<PlaylistDocument> {
        let handle = self.playlists().await;
        Ok(handle.client().update_playlist(id, &input).await?)
    }
}

/// Handle for playlist operations.
///
/// Returned by `SetlistClient::playlists()`; holds a snapshot of the token.
pub struct PlaylistClientHandle {
    http: Client,
    endpoint: String,
    access_token: Option<String>,
}

impl PlaylistClientHandle {
    /// Get the playlist client.
    pub fn client(&self) -> PlaylistClient<'_> {
        PlaylistClient::new(&self.http, &self.endpoint, self.access_token.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(SetlistClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(SetlistClient::new(ClientConfig::new("http://localhost:4000")).is_ok());

        assert!(SetlistClient::new(ClientConfig::new("")).is_err());
        assert!(SetlistClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(SetlistClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_endpoint_normalization() {
        let client = SetlistClient::new(ClientConfig::new("https://example.com/")).unwrap();
        assert_eq!(client.endpoint(), "https://example.com/api/graphql");

        let mut config = ClientConfig::new("http://localhost:4000");
        config.graphql_path = "graphql".into();
        let client = SetlistClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:4000/graphql");
    }

    #[tokio::test]
    async fn test_token_lifecycle() {
        let client = SetlistClient::new(ClientConfig::new("https://example.com")).unwrap();
        assert!(!client.is_authenticated().await);

        client.set_token("abc").await;
        assert_eq!(client.token().await.as_deref(), Some("abc"));

        client.logout().await;
        assert!(!client.is_authenticated().await);
    }
}
