//! Authenticated client for the flask-catalyst API
//!
//! This module provides the request layer every endpoint call goes through:
//! - base URL resolution and path joining
//! - bearer-token auth read from the injected [`TokenStore`] on each call
//! - header normalization (`Content-Type` is never sent on bodyless methods)
//! - session-expiry detection on failure responses
//!
//! # Example
//! ```ignore
//! use catalyst_client::client::ApiClient;
//! use catalyst_client::config::Config;
//! use catalyst_client::session::InMemoryTokenStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryTokenStore::new());
//! let client = ApiClient::new(Config::new(), store)?;
//! let users: serde_json::Value = client.get("/demo/utils-demo", None).await?;
//! ```

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::RequestConfig;
use crate::session::{SessionExpiredHandler, TokenStore};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, RwLock};
use tracing::{debug, error, warn};

/// Client for the flask-catalyst API with centralized authentication and
/// session-expiry signaling.
///
/// The client is cheap to share behind an `Arc`; requests issued concurrently
/// share only the read-only token lookup and the session-expired handler slot.
/// Once issued, a request runs to completion and cannot be aborted through
/// this interface. No retries, no client-side timeout, no token refresh.
pub struct ApiClient {
    http_client: HttpClient,
    config: Config,
    token_store: Arc<dyn TokenStore>,
    session_expired: RwLock<SessionExpiredHandler>,
}

impl ApiClient {
    /// Creates a new client.
    ///
    /// The underlying transport keeps a cookie store so that requests carry
    /// cross-origin credentials in addition to the bearer token, matching a
    /// backend that may rely on either mechanism.
    ///
    /// # Arguments
    /// * `config` - Base URL configuration
    /// * `token_store` - Token lookup used on every request
    pub fn new(config: Config, token_store: Arc<dyn TokenStore>) -> Result<Self, AppError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http_client,
            config,
            token_store,
            session_expired: RwLock::new(Arc::new(|| {})),
        })
    }

    /// Replaces the session-expired handler.
    ///
    /// A single slot, last registration wins; there is no way to unregister.
    /// The handler is invoked synchronously, with no arguments, whenever a
    /// failure response carries one of the backend's session-expiry messages.
    /// A registration racing an in-flight failure path may or may not apply
    /// to that call; no ordering is guaranteed.
    pub fn set_session_expired_handler<F>(&self, handler: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut slot = match self.session_expired.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Arc::new(handler);
    }

    /// Returns the token store this client reads from
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.token_store)
    }

    /// Returns the client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint path (e.g., `"/demo/utils-demo"`)
    /// * `config` - Optional per-call headers and query parameters
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: Option<RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, endpoint, None::<&()>, config)
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        config: Option<RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::POST, endpoint, Some(body), config)
            .await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        config: Option<RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, endpoint, Some(body), config).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: Option<RequestConfig>,
    ) -> Result<T, AppError> {
        self.request(Method::DELETE, endpoint, None::<&()>, config)
            .await
    }

    /// Makes a request with an explicit method.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - API endpoint path, absolute (`/demo`) or relative (`demo`)
    /// * `body` - Optional JSON body (POST/PUT)
    /// * `config` - Optional per-call headers and query parameters
    ///
    /// # Returns
    /// * `Ok(T)` - The response body, deserialized; the transport envelope
    ///   (status, response headers) is discarded at this boundary
    /// * `Err(AppError)` - Transport or application failure
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<T, AppError> {
        let url = join_url(&self.config.base_url, endpoint);
        debug!("{} {}", method, url);

        let config = config.unwrap_or_default();
        let headers = self.build_headers(&method, &config)?;

        let mut request = self.http_client.request(method, &url).headers(headers);
        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        if let Some(b) = body {
            // json() keeps a caller-supplied Content-Type if one is present
            request = request.json(b);
        }

        self.execute(request).await
    }

    /// Makes a POST request with a multipart form body (file uploads).
    ///
    /// The form sets its own boundary Content-Type; everything else behaves
    /// like [`ApiClient::post`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
        config: Option<RequestConfig>,
    ) -> Result<T, AppError> {
        let url = join_url(&self.config.base_url, endpoint);
        debug!("POST {} (multipart)", url);

        let config = config.unwrap_or_default();
        let headers = self.build_headers(&Method::POST, &config)?;

        let mut request = self.http_client.post(&url).headers(headers);
        if !config.query.is_empty() {
            request = request.query(&config.query);
        }
        request = request.multipart(form);

        self.execute(request).await
    }

    /// Sends a prepared request and interprets the outcome.
    ///
    /// Success returns the deserialized body. Failure responses are inspected
    /// for the backend's session-expiry messages before the error is
    /// propagated; the notification is a side effect, never an interception.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| {
            warn!("transport failure: {e}");
            AppError::Network(e)
        })?;

        let status = response.status();
        debug!("response status: {}", status);

        if status.is_success() {
            let text = response.text().await?;
            return Ok(serde_json::from_str(&text)?);
        }

        let body_text = response.text().await.unwrap_or_default();
        let payload: Value = serde_json::from_str(&body_text).unwrap_or(Value::Null);
        error!("request failed with status {status}: {body_text}");

        let failure = AppError::Http {
            status,
            body: payload,
        };
        if failure.is_session_expired() {
            warn!("backend reports the session is no longer valid");
            self.notify_session_expired();
        }
        Err(failure)
    }

    /// Builds the effective header set for a call.
    ///
    /// Order matters: the Authorization default goes in first so that a
    /// caller-supplied value wins, and the Content-Type strip for bodyless
    /// methods runs last so it applies even to caller-supplied headers.
    fn build_headers(
        &self,
        method: &Method,
        config: &RequestConfig,
    ) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = self.token_store.get_token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| AppError::InvalidInput("token is not a valid header value".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| AppError::InvalidInput(format!("invalid header name: {name}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| AppError::InvalidInput(format!("invalid value for header {name}")))?;
            headers.insert(header_name, header_value);
        }

        // Some backends fail when a bodyless request advertises a body type
        let bodyless = [Method::GET, Method::DELETE, Method::HEAD, Method::OPTIONS];
        if bodyless.contains(method) {
            headers.remove(CONTENT_TYPE);
        }

        Ok(headers)
    }

    /// Invokes the registered session-expired handler.
    ///
    /// A panicking handler must never mask the original failure, so panics
    /// are caught and logged here.
    fn notify_session_expired(&self) {
        let handler = match self.session_expired.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        };
        if catch_unwind(AssertUnwindSafe(|| (*handler)())).is_err() {
            error!("session-expired handler panicked; propagating the original failure");
        }
    }
}

/// Joins the configured base URL with an endpoint path.
///
/// Trailing slashes on the base are dropped and exactly one slash is placed
/// at the seam; nothing else in either part is altered.
fn join_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::join_url;

    #[test]
    fn join_url_places_exactly_one_slash_at_the_seam() {
        let cases = [
            ("http://x/api/", "/demo", "http://x/api/demo"),
            ("http://x/api", "demo", "http://x/api/demo"),
            ("http://x/api", "/demo", "http://x/api/demo"),
            ("http://x/api/", "demo", "http://x/api/demo"),
        ];
        for (base, endpoint, expected) in cases {
            assert_eq!(join_url(base, endpoint), expected, "{base} + {endpoint}");
        }
    }

    #[test]
    fn join_url_leaves_interior_slashes_alone() {
        assert_eq!(
            join_url("http://x/api", "/demo/utils-demo"),
            "http://x/api/demo/utils-demo"
        );
    }
}
