//! GraphQL over HTTP.

use crate::backend::auth::session::{CurrentUser, SharedData};
use crate::backend::auth::signout::SessionBackend;
use crate::backend::graphql::queries;
use crate::simple_error;
use crate::utils::config::ShellConfig;
use crate::utils::error::Result;
use reqwest::cookie::{CookieStore, Jar};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    query: &'a str,
    variables: Value,
    operation_name: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// Turns a `{ data, errors }` body into the data or an error.
pub fn decode_response<T: DeserializeOwned>(body: Value) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_value(body)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<&str> = envelope.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(simple_error!("GraphQL error: {}", messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| simple_error!("GraphQL response carried no data"))
}

#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    cookies: Arc<Jar>,
    endpoint: Url,
    logout_url: Url,
}

impl GraphqlClient {
    pub fn new(config: &ShellConfig) -> Result<Self> {
        let cookies = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(cookies.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            cookies,
            endpoint: config.graphql_url()?,
            logout_url: config.logout_url()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Session cookie for `url`, for transports that bypass reqwest.
    pub fn cookie_header(&self, url: &Url) -> Option<String> {
        self.cookies
            .cookies(url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    pub async fn execute<T: DeserializeOwned>(
        &self,
        operation_name: &str,
        query: &str,
        variables: Value,
    ) -> Result<T> {
        let request = Request {
            query,
            variables,
            operation_name: Some(operation_name),
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        decode_response(body)
    }

    /// Loads the signed-in user, `None` when nobody is signed in.
    pub async fn current_user(&self) -> Result<Option<CurrentUser>> {
        let data: SharedData = self
            .execute("SharedQuery", &queries::shared_query(), json!({}))
            .await?;
        Ok(data.current_user)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let data: Value = self
            .execute(
                "Login",
                queries::LOGIN_MUTATION,
                json!({ "username": username, "password": password }),
            )
            .await?;

        if data.pointer("/login/user/id").is_none() {
            return Err(simple_error!("Incorrect username or password"));
        }
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        let _: Value = self
            .execute("Logout", queries::LOGOUT_MUTATION, json!({}))
            .await?;
        Ok(())
    }

    /// Creates an organization owned by the current user and returns its slug.
    pub async fn create_organization(&self, name: &str, slug: &str) -> Result<String> {
        let data: Value = self
            .execute(
                "CreateOrganization",
                queries::CREATE_ORGANIZATION_MUTATION,
                json!({ "name": name, "slug": slug }),
            )
            .await?;

        data.pointer("/createOrganization/organization/slug")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| simple_error!("Organization was not created"))
    }

    /// Hits the server's logout route, which destroys the session cookie
    /// without going through GraphQL.
    pub async fn force_logout(&self) -> Result<()> {
        self.http
            .get(self.logout_url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl SessionBackend for GraphqlClient {
    async fn logout(&self) -> Result<()> {
        GraphqlClient::logout(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_shared_query_data() {
        let body = json!({
            "data": {
                "currentUser": {
                    "id": "1",
                    "username": "alice",
                    "name": "Alice",
                    "role": "USER",
                    "isVerified": false,
                    "organizationMemberships": { "nodes": [] }
                }
            }
        });

        let data: SharedData = decode_response(body).unwrap();
        let user = data.current_user.unwrap();
        assert_eq!(user.username, "alice");
        assert!(!user.is_verified);
    }

    #[test]
    fn null_user_means_signed_out() {
        let data: SharedData = decode_response(json!({ "data": { "currentUser": null } })).unwrap();
        assert!(data.current_user.is_none());
    }

    #[test]
    fn errors_take_precedence_over_data() {
        let body = json!({
            "data": { "currentUser": null },
            "errors": [{ "message": "first" }, { "message": "second" }]
        });

        let err = decode_response::<SharedData>(body).unwrap_err();
        assert_eq!(err.message(), "GraphQL error: first; second");
    }

    #[test]
    fn missing_data_is_an_error() {
        let err = decode_response::<SharedData>(json!({})).unwrap_err();
        assert!(err.message().contains("no data"));
    }

    #[test]
    fn endpoints_follow_config() {
        let client = GraphqlClient::new(&ShellConfig::default()).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:5678/graphql");
        assert_eq!(client.cookie_header(client.endpoint()), None);
    }
}
