use crate::error::AppError;
use crate::model::requests::RegisterRequest;
use crate::model::responses::{ApiResponse, LoginData};
use async_trait::async_trait;
use serde_json::Value;

/// Authentication operations against the backend
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in and stores the returned access token for subsequent requests
    async fn login(&self, username: &str, password: &str) -> Result<LoginData, AppError>;

    /// Registers a new account
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<Value>, AppError>;

    /// Forgets the stored access token.
    ///
    /// Purely local: the backend keeps no session state to tear down.
    fn logout(&self);
}
