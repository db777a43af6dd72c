//! Type-safe API clients that enforce authentication requirements at compile time

use super::ClientError;
use reqwest::{header, Client, ClientBuilder, RequestBuilder, Response};
use serde_json::Value as JsonValue;
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Uniform API call result: the HTTP status plus the parsed JSON body, if any.
///
/// `data` is `None` when the response does not declare a JSON content type or
/// when the body fails to parse; a malformed body never turns into an error,
/// so status-code handling still proceeds.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Option<JsonValue>,
}

impl ApiResponse {
    /// Mirrors HTTP 2xx
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into a typed value; `None` on absence or mismatch
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicNimbusClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Client for authenticated endpoints that require a bearer token
#[derive(Clone)]
pub struct AuthenticatedNimbusClient {
    client: Client,
    base_url: String,
    token: String,
    timeout: Duration,
}

impl PublicNimbusClient {
    /// Create a new public client with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = ClientBuilder::new()
            .user_agent("nimbus-web/0.1.0")
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request, returning the uniform status+body result
    pub async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ClientError> {
        let response = send_with_timeout(request, self.timeout).await?;
        Ok(into_api_response(response).await)
    }

    /// Attach a bearer token to get an authenticated client
    pub fn authenticate(self, token: impl Into<String>) -> AuthenticatedNimbusClient {
        AuthenticatedNimbusClient {
            client: self.client,
            base_url: self.base_url,
            token: token.into(),
            timeout: self.timeout,
        }
    }
}

impl AuthenticatedNimbusClient {
    /// Create a new authenticated client with the default timeout
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(PublicNimbusClient::new(base_url)?.authenticate(token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer header
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request, returning the uniform status+body result
    pub async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ClientError> {
        let response = send_with_timeout(request, self.timeout).await?;
        Ok(into_api_response(response).await)
    }

    /// Create a public client sharing the same connection pool
    pub fn to_public(&self) -> PublicNimbusClient {
        PublicNimbusClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn send_with_timeout(
    request: RequestBuilder,
    timeout: Duration,
) -> Result<Response, ClientError> {
    request.timeout(timeout).send().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Request(e)
        }
    })
}

// reqwest has no timeout support on wasm; race the fetch against a timer.
// Dropping the losing send future aborts the underlying browser fetch.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    request: RequestBuilder,
    timeout: Duration,
) -> Result<Response, ClientError> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let send = request.send();
    futures::pin_mut!(send);
    let deadline = TimeoutFuture::new(timeout.as_millis() as u32);
    futures::pin_mut!(deadline);

    match select(send, deadline).await {
        Either::Left((result, _)) => result.map_err(ClientError::Request),
        Either::Right(((), _)) => Err(ClientError::Timeout),
    }
}

async fn into_api_response(response: Response) -> ApiResponse {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("json"))
        .unwrap_or(false);

    let data = if is_json {
        response.json::<JsonValue>().await.ok()
    } else {
        None
    };

    ApiResponse { status, data }
}

/// Type-safe builder that creates the appropriate client type
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicNimbusClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicNimbusClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedNimbusClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_mirrors_2xx() {
        for status in [200u16, 201, 204, 299] {
            assert!(ApiResponse { status, data: None }.ok());
        }
        for status in [199u16, 301, 400, 401, 404, 422, 500] {
            assert!(!ApiResponse { status, data: None }.ok());
        }
    }

    #[test]
    fn json_returns_none_on_shape_mismatch() {
        let response = ApiResponse {
            status: 200,
            data: Some(json!({"unexpected": true})),
        };
        assert!(response.json::<crate::types::ChallengeResponse>().is_none());
    }

    #[test]
    fn builder_requires_base_url() {
        assert!(matches!(
            TypedClientBuilder::new().build_public(),
            Err(ClientError::Configuration(_))
        ));
    }
}
