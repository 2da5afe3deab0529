//! Authentication operations for a Setlist server.

use crate::error::{ClientError, Result};
use crate::graphql::GraphqlTransport;
use crate::types::{AuthData, LoginData, LoginVariables};
use reqwest::Client;
use tracing::{debug, info};

const LOGIN_QUERY: &str = "mutation Login($email: String!, $password: String!) { \
    login(email: $email, password: $password) { token } }";

/// Authentication client.
pub struct AuthClient<'a> {
    http: &'a Client,
    endpoint: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, endpoint: &'a str) -> Self {
        Self { http, endpoint }
    }

    /// Exchange email and password for an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthData> {
        debug!(email = %email, "Attempting login");

        let data: LoginData = GraphqlTransport::new(self.http, self.endpoint, None)
            .execute(LOGIN_QUERY, LoginVariables { email, password }, email)
            .await
            .map_err(|e| match e {
                ClientError::Unauthorized(msg) | ClientError::GraphQL(msg) => {
                    ClientError::AuthFailed(msg)
                }
                other => other,
            })?;

        info!(email = %email, "Login successful");
        Ok(data.login)
    }
}
