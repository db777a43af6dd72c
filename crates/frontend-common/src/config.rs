//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Fixed API origin the web clients talk to
    pub const API_BASE_URL: &'static str = "https://api.nimbus.app";

    /// Per-request timeout in milliseconds
    pub const REQUEST_TIMEOUT_MS: u64 = 15_000;

    /// Session storage key for the pending login challenge
    pub const CHALLENGE_KEY: &'static str = "nimbus.challenge";
    /// Session storage key for the bearer token
    pub const TOKEN_KEY: &'static str = "nimbus.token";
    /// Session storage key for the cached account snapshot
    pub const STATE_KEY: &'static str = "nimbus.state";
    /// Session storage key for the resend cooldown deadline
    pub const RESEND_UNTIL_KEY: &'static str = "nimbus.resend_until";

    /// Minimum spacing between resend requests, in seconds
    pub const RESEND_COOLDOWN_SECS: u32 = 45;

    /// OTP length on the login confirmation page
    pub const LOGIN_OTP_LEN: usize = 4;
    /// OTP length on the profile e-mail change flow
    pub const PROFILE_OTP_LEN: usize = 6;

    /// Default post-login landing page
    pub const DEFAULT_NEXT: &'static str = "/cabinet";
}
