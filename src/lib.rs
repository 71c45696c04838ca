//! # catalyst-client
//!
//! Rust client for the flask-catalyst demo backend API.
//!
//! The crate is built around [`client::ApiClient`], which centralizes the three
//! concerns every call to the backend shares:
//! - bearer-token authentication, read from an injected [`session::TokenStore`]
//! - outgoing header normalization (no `Content-Type` on bodyless methods)
//! - session-expiry detection, firing a registered callback when the backend
//!   reports an expired or revoked token
//!
//! On top of the client sit thin typed services for the backend's auth and demo
//! endpoints.
//!
//! # Example
//! ```ignore
//! use catalyst_client::prelude::*;
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryTokenStore::new());
//! let client = Arc::new(ApiClient::new(Config::new(), store)?);
//! client.set_session_expired_handler(|| println!("please log in again"));
//!
//! let auth = Authenticator::new(client.clone());
//! auth.login("admin", "123456").await?;
//!
//! let demo = DemoApi::new(client.clone());
//! let page = demo.utils_demo(1, 10).await?;
//! ```

/// Typed services for the backend endpoints
pub mod application;
/// Authenticated HTTP client, the core of the crate
pub mod client;
/// Client configuration resolved from the environment
pub mod config;
/// Shared constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Token storage and session-expiry handling
pub mod session;
/// Small shared utilities
pub mod utils;

/// Library version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
