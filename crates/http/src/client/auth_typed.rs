//! Authentication endpoints for the public client

use super::typed::{ApiResponse, PublicNimbusClient};
use super::ClientError;
use crate::types::{LoginRequest, RecoverRequest, ResendRequest, VerifyRequest};

impl PublicNimbusClient {
    /// Submit credentials; a 200 carries the OTP challenge
    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/web/login")
            .json(&request);
        self.execute(req).await
    }

    /// Complete the pending challenge with the entered OTP code
    pub async fn verify(&self, request: VerifyRequest) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/web/login/verify")
            .json(&request);
        self.execute(req).await
    }

    /// Ask the server to re-deliver the OTP for a pending challenge (204 on success)
    pub async fn resend(&self, request: ResendRequest) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/web/login/resend")
            .json(&request);
        self.execute(req).await
    }

    /// Start password recovery for the given e-mail (204 on success)
    pub async fn recover(&self, request: RecoverRequest) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/web/recover")
            .json(&request);
        self.execute(req).await
    }
}
