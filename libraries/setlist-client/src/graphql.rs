//! GraphQL-over-HTTP transport shared by the auth and playlist clients.

use crate::error::{ClientError, Result};
use crate::types::{GraphqlRequest, GraphqlResponse};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// A single POST target for GraphQL operations.
pub(crate) struct GraphqlTransport<'a> {
    http: &'a Client,
    endpoint: &'a str,
    access_token: Option<&'a str>,
}

impl<'a> GraphqlTransport<'a> {
    pub(crate) fn new(http: &'a Client, endpoint: &'a str, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            endpoint,
            access_token,
        }
    }

    /// Run one operation and return its `data` member.
    ///
    /// `subject` names the resource the operation is about, used when an
    /// error has to be reported as `NotFound`.
    pub(crate) async fn execute<V, T>(&self, query: &str, variables: V, subject: &str) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        debug!(endpoint = %self.endpoint, subject = %subject, "Sending GraphQL request");

        let mut request = self
            .http
            .post(self.endpoint)
            .json(&GraphqlRequest { query, variables });
        if let Some(token) = self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await?;

        // graphql-http style servers answer resolver errors with 200, others
        // use a 4xx/5xx status and still carry an `errors` array.
        let parsed: Option<GraphqlResponse<T>> = serde_json::from_str(&body).ok();

        if let Some(message) = parsed
            .as_ref()
            .and_then(|r| r.errors.first())
            .map(|e| e.message.as_str())
        {
            warn!(status = status.as_u16(), message = %message, "GraphQL operation failed");
            return Err(classify_graphql_error(message, subject));
        }

        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized(body),
                StatusCode::FORBIDDEN => ClientError::Forbidden(body),
                StatusCode::NOT_FOUND => ClientError::NotFound(subject.to_string()),
                _ => ClientError::ServerError {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        parsed
            .and_then(|r| r.data)
            .ok_or_else(|| ClientError::ParseError(format!("Response carries no data: {}", body)))
    }
}

/// Map a GraphQL error message onto a typed client error.
pub fn classify_graphql_error(message: &str, subject: &str) -> ClientError {
    let lower = message.to_lowercase();

    if lower.contains("not authenticated") || lower.contains("not authorized") {
        ClientError::Unauthorized(message.to_string())
    } else if lower.contains("already published") {
        ClientError::Forbidden(message.to_string())
    } else if lower.contains("already taken") {
        ClientError::Conflict(message.to_string())
    } else if lower.contains("not found") || lower.contains("of null") {
        // Resolvers dereferencing a missing document fail with "... of null"
        ClientError::NotFound(subject.to_string())
    } else {
        ClientError::GraphQL(message.to_string())
    }
}
