//! Shared HTTP layer for the Nimbus web stack.
//!
//! Wire types are always available; the typed API client lives behind the
//! `client` feature and the static-site server router behind `server`, so the
//! WASM frontend never pulls the server stack and the server binary never
//! pulls the browser client.

pub mod types;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;
