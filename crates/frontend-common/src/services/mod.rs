//! API service facades over the typed clients

pub mod account;
pub mod auth;
pub mod payment;

pub use account::AccountApiService;
pub use auth::AuthApiService;
pub use payment::{PaymentWidgetError, PaymentWidgetService};

use nimbus_http::client::ClientError;

/// Transport failures (timeout, abort, connectivity) all render as the same
/// retry-prompting message; the cause is only logged.
pub(crate) fn transport_message(error: ClientError) -> String {
    gloo::console::error!(format!("request failed: {error}"));
    "network error, please try again".to_string()
}
