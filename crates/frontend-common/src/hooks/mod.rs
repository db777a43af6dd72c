//! Custom hooks for the auth and confirmation flows

pub mod use_cooldown;
pub mod use_login;
pub mod use_otp;
pub mod use_recover;

pub use use_cooldown::{use_cooldown, UseCooldownHandle};
pub use use_login::{use_login, LoginState, UseLoginHandle};
pub use use_otp::{use_otp, OtpFlowState, OtpPurpose, UseOtpHandle};
pub use use_recover::{use_recover, RecoverState, UseRecoverHandle};
