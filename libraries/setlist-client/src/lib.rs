//! Setlist Server Client
//!
//! GraphQL-over-HTTP client for the Setlist playlist API.
//!
//! # Features
//!
//! - **Authentication**: login with email/password, bearer token handling
//! - **Playlists**: fetch, full-document update, create
//! - **Store adapter**: [`SetlistClient`] implements
//!   [`setlist_core::PlaylistStore`], with server error messages mapped onto
//!   typed [`setlist_core::StoreError`] variants
//!
//! # Example
//!
//! ```ignore
//! use setlist_client::{ClientConfig, SetlistClient};
//! use setlist_editor::{EditSession, EditorConfig, SharedSelection};
//! use std::sync::Arc;
//!
//! let client = SetlistClient::new(ClientConfig::new("https://setlist.example.com"))?;
//! client.login("me@example.com", "secret").await?;
//!
//! let mut session = EditSession::open(
//!     Arc::new(client),
//!     SharedSelection::new(),
//!     playlist_id,
//!     EditorConfig::default(),
//! )
//! .await?;
//! ```

mod auth;
mod client;
mod error;
mod graphql;
mod playlists;
mod types;

pub use client::{PlaylistClientHandle, SetlistClient};
pub use error::{ClientError, Result};
pub use graphql::classify_graphql_error;
pub use types::{AuthData, ClientConfig, DEFAULT_GRAPHQL_PATH};

pub use auth::AuthClient;
pub use playlists::PlaylistClient;
