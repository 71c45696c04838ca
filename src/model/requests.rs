use serde::Serialize;

/// Per-call transport options merged with the client defaults.
///
/// Caller-supplied values for conflicting header names take precedence, with
/// one exception: on bodyless methods the client removes `Content-Type` even
/// when the caller supplied it.
#[derive(Debug, Default, Clone)]
pub struct RequestConfig {
    /// Extra headers for this call
    pub headers: Vec<(String, String)>,
    /// Query string parameters appended to the resolved URL
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    /// Creates an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header to this call
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query string parameter to this call
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Body for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

/// Body for `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// New account username
    pub username: String,
    /// New account email address
    pub email: String,
    /// New account password
    pub password: String,
}

/// Body for the email-test branch of `POST /demo/utils-demo`
#[derive(Debug, Clone, Serialize)]
pub struct EmailTestRequest {
    /// Address the backend should send the demo email to
    pub email: String,
}
