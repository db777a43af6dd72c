//! Authentication API service (public endpoints)

use super::transport_message;
use crate::client::create_public_client;
use nimbus_http::client::ApiResponse;
use nimbus_http::types::{LoginRequest, RecoverRequest, ResendRequest, VerifyRequest};

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthApiService {
    /// Submit credentials to start a login challenge
    pub async fn login(&self, login: String, password: String) -> Result<ApiResponse, String> {
        let client = create_public_client().map_err(transport_message)?;
        client
            .login(LoginRequest { login, password })
            .await
            .map_err(transport_message)
    }

    /// Complete the pending challenge with the entered code
    pub async fn verify(&self, challenge_id: String, code: String) -> Result<ApiResponse, String> {
        let client = create_public_client().map_err(transport_message)?;
        client
            .verify(VerifyRequest { challenge_id, code })
            .await
            .map_err(transport_message)
    }

    /// Ask for the OTP to be re-delivered
    pub async fn resend(&self, challenge_id: String) -> Result<ApiResponse, String> {
        let client = create_public_client().map_err(transport_message)?;
        client
            .resend(ResendRequest { challenge_id })
            .await
            .map_err(transport_message)
    }

    /// Start password recovery for the given e-mail
    pub async fn recover(&self, email: String) -> Result<ApiResponse, String> {
        let client = create_public_client().map_err(transport_message)?;
        client
            .recover(RecoverRequest { email })
            .await
            .map_err(transport_message)
    }
}
