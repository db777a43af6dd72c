//! Account API service (bearer-authenticated endpoints).
//!
//! A 401 on any call (and a 404 on `/me`) means the session is no longer
//! valid; the service notifies the global unauthorized handler so the
//! provider can tear the session down, and still returns the response so the
//! calling flow can render its own message.

use super::transport_message;
use crate::auth::error_handler::notify_unauthorized;
use crate::client::create_authenticated_client;
use nimbus_http::client::{ApiResponse, AuthenticatedNimbusClient};
use nimbus_http::types::{
    ChangePasswordRequest, CreateOrderRequest, DeleteAccountRequest, DeviceActionRequest,
    ProfileUpdateRequest, ResendRequest, VerifyRequest,
};

/// Account API service
#[derive(Clone)]
pub struct AccountApiService;

impl AccountApiService {
    /// Create a new account API service
    pub fn new() -> Self {
        Self
    }

    fn client(&self) -> Result<AuthenticatedNimbusClient, String> {
        create_authenticated_client().ok_or_else(|| {
            notify_unauthorized();
            "not authenticated".to_string()
        })
    }

    fn watch_session(response: ApiResponse, invalid_on_404: bool) -> ApiResponse {
        if response.status == 401 || (invalid_on_404 && response.status == 404) {
            notify_unauthorized();
        }
        response
    }
}

impl Default for AccountApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountApiService {
    /// Fetch the account profile
    pub async fn me(&self) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client.me().await.map_err(transport_message)?;
        Ok(Self::watch_session(response, true))
    }

    /// Best-effort server-side token revocation
    pub async fn logout(&self) -> Result<ApiResponse, String> {
        let client = self.client()?;
        client.logout().await.map_err(transport_message)
    }

    /// List registered devices
    pub async fn devices(&self) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client.devices().await.map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Soft-revoke a device's access
    pub async fn revoke_device(&self, device_id: String) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .revoke_device(DeviceActionRequest { device_id })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Hard-remove a device record
    pub async fn delete_device(&self, device_id: String) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .delete_device(DeviceActionRequest { device_id })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Change the account password
    pub async fn change_password(
        &self,
        current_password: String,
        new_password: String,
    ) -> Result<ApiResponse, String> {
        let client = self.client()?;
        client
            .change_password(ChangePasswordRequest {
                current_password,
                new_password,
            })
            .await
            .map_err(transport_message)
    }

    /// Delete the account; requires fresh credentials
    pub async fn delete_account(
        &self,
        login: String,
        password: String,
    ) -> Result<ApiResponse, String> {
        let client = self.client()?;
        client
            .delete_account(DeleteAccountRequest { login, password })
            .await
            .map_err(transport_message)
    }

    /// List purchasable subscription plans
    pub async fn subscription_plans(&self) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .subscription_plans()
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Create a subscription order
    pub async fn create_order(&self, plan_id: String) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .create_order(CreateOrderRequest { plan_id })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Move the premium designation to another registered device
    pub async fn transfer_premium(&self, device_id: String) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .transfer_premium(DeviceActionRequest { device_id })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Update the profile; an e-mail change answers with a challenge
    pub async fn update_profile(&self, email: String) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .update_profile(ProfileUpdateRequest { email })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Complete the e-mail change challenge
    pub async fn verify_profile(
        &self,
        challenge_id: String,
        code: String,
    ) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .verify_profile(VerifyRequest { challenge_id, code })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Re-deliver the e-mail change OTP
    pub async fn resend_profile(&self, challenge_id: String) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client
            .resend_profile(ResendRequest { challenge_id })
            .await
            .map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }

    /// Payment history
    pub async fn payments(&self) -> Result<ApiResponse, String> {
        let client = self.client()?;
        let response = client.payments().await.map_err(transport_message)?;
        Ok(Self::watch_session(response, false))
    }
}
