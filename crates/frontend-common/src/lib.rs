pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod cooldown;
pub mod hooks;
pub mod otp;
pub mod services;
pub mod session;
pub mod storage;

pub use auth::context::{use_auth, use_is_authenticated, AuthContext, AuthProvider};
pub use client::{create_authenticated_client, create_public_client, set_auth_token};
pub use components::{Modal, OtpInput, Spinner};
pub use config::AuthConfig;
