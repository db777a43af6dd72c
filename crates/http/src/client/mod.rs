//! Nimbus API client

pub mod account_typed;
pub mod auth_typed;
pub mod error;
pub mod messages;
pub mod typed;

pub use error::ClientError;
pub use messages::{generic_message, user_message, EndpointKind};
pub use typed::{
    ApiResponse, AuthenticatedNimbusClient, PublicNimbusClient, TypedClientBuilder,
    DEFAULT_TIMEOUT,
};
