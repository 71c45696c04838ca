use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response envelope produced by the flask-catalyst backend.
///
/// Every endpoint wraps its payload as
/// `{"status", "message", "data", "timestamp", "code"}` with `status` set to
/// `"success"` or `"error"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// `"success"` or `"error"`
    pub status: String,
    /// Human-readable message accompanying the payload
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload, absent on some error responses
    #[serde(default)]
    pub data: Option<T>,
    /// Server-side UTC timestamp of the response
    #[serde(default)]
    pub timestamp: Option<String>,
    /// HTTP status code echoed into the body
    #[serde(default)]
    pub code: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// True when the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Unwraps the payload, failing when the envelope carried no data
    pub fn into_data(self) -> Result<T, AppError> {
        self.data.ok_or_else(|| {
            AppError::UnexpectedResponse(format!("response carried no data: {}", self.message))
        })
    }
}

/// Token material returned by `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    /// Bearer token for subsequent requests
    pub access_token: String,
    /// Refresh token, when the backend issues one
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// The authenticated user record
    #[serde(default)]
    pub user: Option<Value>,
}

/// One page of a paginated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Position of this page within the full result set
    pub pagination: Pagination,
}

/// Pagination metadata attached to every paginated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Requested page size (the backend clamps this to 100)
    pub per_page: u32,
    /// Total number of items across all pages
    pub total: u64,
    /// Total number of pages
    pub pages: u32,
    /// Whether a page follows this one
    pub has_next: bool,
    /// Whether a page precedes this one
    pub has_prev: bool,
    /// Number of the next page, if any
    #[serde(default)]
    pub next_page: Option<u32>,
    /// Number of the previous page, if any
    #[serde(default)]
    pub prev_page: Option<u32>,
}

/// Payload of `GET /demo/utils-demo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilsDemoData {
    /// Paginated user listing
    pub paginated_users: Page<Value>,
    /// Identity of the caller, as embedded in the JWT
    #[serde(default)]
    pub current_user: Option<Value>,
    /// Informational note about the endpoint's rate limit
    #[serde(default)]
    pub rate_limit_info: Option<String>,
}
