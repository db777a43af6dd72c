//! Account endpoints for the authenticated client

use super::typed::{ApiResponse, AuthenticatedNimbusClient};
use super::ClientError;
use crate::types::{
    ChangePasswordRequest, CreateOrderRequest, DeleteAccountRequest, DeviceActionRequest,
    ProfileUpdateRequest, ResendRequest, VerifyRequest,
};
use reqwest::Method;

impl AuthenticatedNimbusClient {
    /// Fetch the account profile; 401/404 means the session is no longer valid
    pub async fn me(&self) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::GET, "/auth/web/me");
        self.execute(req).await
    }

    /// Best-effort server-side token revocation
    pub async fn logout(&self) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::POST, "/auth/web/logout");
        self.execute(req).await
    }

    /// List registered devices
    pub async fn devices(&self) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::GET, "/auth/web/devices");
        self.execute(req).await
    }

    /// Soft-revoke a device's access; the record remains listed
    pub async fn revoke_device(
        &self,
        request: DeviceActionRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/devices/revoke")
            .json(&request);
        self.execute(req).await
    }

    /// Hard-remove a device record
    pub async fn delete_device(
        &self,
        request: DeviceActionRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/devices/delete")
            .json(&request);
        self.execute(req).await
    }

    /// Change the account password (204 on success)
    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/password")
            .json(&request);
        self.execute(req).await
    }

    /// Delete the account; requires fresh credentials (204 on success)
    pub async fn delete_account(
        &self,
        request: DeleteAccountRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/account/delete")
            .json(&request);
        self.execute(req).await
    }

    /// List purchasable subscription plans
    pub async fn subscription_plans(&self) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::GET, "/auth/web/subscriptions");
        self.execute(req).await
    }

    /// Create a subscription order; the response carries a payment URL or
    /// gateway parameters for the payment widget
    pub async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/subscriptions/order")
            .json(&request);
        self.execute(req).await
    }

    /// Move the premium designation to another registered device
    pub async fn transfer_premium(
        &self,
        request: DeviceActionRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/premium/transfer")
            .json(&request);
        self.execute(req).await
    }

    /// Update the profile; an e-mail change answers with a challenge
    pub async fn update_profile(
        &self,
        request: ProfileUpdateRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/profile")
            .json(&request);
        self.execute(req).await
    }

    /// Complete the e-mail change challenge
    pub async fn verify_profile(
        &self,
        request: VerifyRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/profile/verify")
            .json(&request);
        self.execute(req).await
    }

    /// Re-deliver the e-mail change OTP (204 on success)
    pub async fn resend_profile(
        &self,
        request: ResendRequest,
    ) -> Result<ApiResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/web/profile/resend")
            .json(&request);
        self.execute(req).await
    }

    /// Payment history
    pub async fn payments(&self) -> Result<ApiResponse, ClientError> {
        let req = self.request(Method::GET, "/auth/web/payments");
        self.execute(req).await
    }
}
