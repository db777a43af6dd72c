//! Client configuration and initialization

use crate::config::AuthConfig;
use nimbus_http::client::{
    AuthenticatedNimbusClient, ClientError, PublicNimbusClient, TypedClientBuilder,
};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use std::time::Duration;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicNimbusClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<AuthenticatedNimbusClient>>> = Lazy::new(|| Mutex::new(None));

fn builder() -> TypedClientBuilder {
    TypedClientBuilder::new()
        .base_url(AuthConfig::API_BASE_URL)
        .timeout(Duration::from_millis(AuthConfig::REQUEST_TIMEOUT_MS))
}

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicNimbusClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = builder().build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the authenticated client instance (None when no token is set)
pub fn create_authenticated_client() -> Option<AuthenticatedNimbusClient> {
    AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock")
        .clone()
}

/// Update the typed clients with a bearer token; `None` drops the
/// authenticated client entirely
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if let Some(token) = token {
        *auth_lock = Some(builder().build_authenticated(token)?);
    } else {
        *auth_lock = None;
    }

    Ok(())
}
