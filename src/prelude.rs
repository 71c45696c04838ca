//! # Catalyst Client Prelude
//!
//! Convenient re-exports of the types most integrations need.
//!
//! ## Usage
//!
//! ```rust
//! use catalyst_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:5000/api");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the API client
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Authenticated HTTP client
pub use crate::client::ApiClient;

/// Token storage
pub use crate::session::{InMemoryTokenStore, SessionExpiredHandler, TokenStore};

// ============================================================================
// SERVICES
// ============================================================================

/// Authentication operations
pub use crate::application::interfaces::AuthService;

/// Demo endpoint operations
pub use crate::application::interfaces::DemoService;

/// Authentication service implementation
pub use crate::application::services::Authenticator;

/// Demo service implementation
pub use crate::application::services::DemoApi;

// ============================================================================
// MODELS
// ============================================================================

/// Per-call transport options
pub use crate::model::requests::RequestConfig;

/// Request bodies
pub use crate::model::requests::{EmailTestRequest, LoginRequest, RegisterRequest};

/// Response envelope and payloads
pub use crate::model::responses::{ApiResponse, LoginData, Page, Pagination, UtilsDemoData};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
