//! Session records persisted in the tab's session storage.
//!
//! Lifecycle: `Challenge` → (verify) → `Token` + `AuthState`, challenge
//! deleted. Token and state persist until logout or until `/auth/web/me`
//! reports the session invalid.

use crate::config::AuthConfig;
use crate::storage;
use serde::{Deserialize, Serialize};

/// Pending-login challenge awaiting OTP confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub challenge_id: String,
    /// Masked delivery address shown on the confirmation page
    pub email: String,
    /// Lifetime in seconds at capture time (display only)
    pub expires_in: u64,
    /// Capture timestamp, ms since epoch
    pub ts: f64,
}

/// Bearer token owned exclusively by this browser session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub received_at: f64,
}

/// Cached account snapshot written alongside the token; advisory only,
/// `/auth/web/me` is authoritative at read time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_premium: bool,
    pub premium_expires_at: Option<String>,
    pub ts: f64,
}

/// Current time, ms since epoch
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn store_challenge(challenge: &Challenge) {
    storage::save(AuthConfig::CHALLENGE_KEY, challenge);
}

pub fn load_challenge() -> Option<Challenge> {
    storage::load(AuthConfig::CHALLENGE_KEY, None)
}

pub fn clear_challenge() {
    storage::remove(AuthConfig::CHALLENGE_KEY);
}

pub fn store_token(token: &Token) {
    storage::save(AuthConfig::TOKEN_KEY, token);
}

pub fn load_token() -> Option<Token> {
    storage::load(AuthConfig::TOKEN_KEY, None)
}

pub fn store_auth_state(state: &AuthState) {
    storage::save(AuthConfig::STATE_KEY, state);
}

pub fn load_auth_state() -> Option<AuthState> {
    storage::load(AuthConfig::STATE_KEY, None)
}

/// Drop token and snapshot (logout or invalid session)
pub fn clear_session() {
    storage::remove(AuthConfig::TOKEN_KEY);
    storage::remove(AuthConfig::STATE_KEY);
}
