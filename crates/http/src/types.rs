//! Common types used by both the API client and the static server

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Login request (credentials in, OTP challenge out)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account login (username or e-mail)
    pub login: String,
    pub password: String,
}

/// Pending-login challenge issued after a successful login submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeResponse {
    /// Identifier required to complete OTP verification
    pub challenge_id: String,
    /// Masked delivery address, e.g. `a***@x.com`
    pub email: String,
    /// Challenge lifetime in seconds (display only; the server enforces it)
    pub expires_in: u64,
}

/// OTP verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub challenge_id: String,
    pub code: String,
}

/// Token plus account snapshot returned on successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_expires_at: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Resend request for a pending challenge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendRequest {
    pub challenge_id: String,
}

/// Password recovery request (e-mail only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

/// Account profile returned by `/auth/web/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub premium_expires_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Registered device record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub platform: Option<String>,
    /// Whether this device is the current beneficiary of the subscription
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub last_seen_at: Option<String>,
}

/// Request targeting a single device (revoke, delete, premium transfer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceActionRequest {
    pub device_id: String,
}

/// Password change request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Account deletion request; requires fresh credentials, not just a token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccountRequest {
    pub login: String,
    pub password: String,
}

/// Subscription plan offered for purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub months: u32,
    pub price: f64,
    pub currency: String,
}

/// Subscription order creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub plan_id: String,
}

/// Order creation result: a hosted payment page URL or widget parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub gateway_params: Option<JsonValue>,
}

/// Profile update request; changing the e-mail starts a verification
/// sub-flow that mirrors the login challenge shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub email: String,
}

/// Payment history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payments list; the API emits either a bare array or `{payments: [...]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PaymentsResponse {
    List(Vec<Payment>),
    Wrapped { payments: Vec<Payment> },
}

impl PaymentsResponse {
    pub fn into_vec(self) -> Vec<Payment> {
        match self {
            Self::List(payments) | Self::Wrapped { payments } => payments,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Database check response for the debug endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbCheckResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payments_accepts_bare_array() {
        let parsed: PaymentsResponse = serde_json::from_value(json!([
            {"id": "p1", "amount": 9.99, "currency": "USD", "status": "paid"}
        ]))
        .unwrap();
        assert_eq!(parsed.into_vec().len(), 1);
    }

    #[test]
    fn payments_accepts_wrapped_object() {
        let parsed: PaymentsResponse = serde_json::from_value(json!({
            "payments": [
                {"id": "p1", "amount": 9.99, "currency": "USD", "status": "paid"},
                {"id": "p2", "amount": 19.99, "currency": "USD", "status": "refunded"}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.into_vec().len(), 2);
    }

    #[test]
    fn verify_response_defaults_token_type() {
        let parsed: VerifyResponse =
            serde_json::from_value(json!({"access_token": "t1"})).unwrap();
        assert_eq!(parsed.token_type, "bearer");
        assert!(!parsed.is_premium);
    }
}
