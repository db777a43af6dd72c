//! Session context and unauthorized handling

pub mod context;
pub mod error_handler;

pub use context::{use_auth, use_is_authenticated, AuthAction, AuthContext, AuthProvider};
pub use error_handler::{clear_unauthorized_callback, notify_unauthorized, set_unauthorized_callback};
