use crate::application::interfaces::AuthService;
use crate::client::ApiClient;
use crate::error::AppError;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::{ApiResponse, LoginData};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Authentication service for the flask-catalyst backend.
///
/// Login writes the returned access token into the client's token store, so
/// every later request through the same client goes out authenticated.
pub struct Authenticator {
    client: Arc<ApiClient>,
}

impl Authenticator {
    /// Creates a service over an existing client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: &str, password: &str) -> Result<LoginData, AppError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse<LoginData> =
            self.client.post("/auth/login", &body, None).await?;
        let data = response.into_data()?;

        self.client.token_store().set_token(&data.access_token);
        info!("logged in as {}", username);
        Ok(data)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<Value>, AppError> {
        self.client.post("/auth/register", request, None).await
    }

    fn logout(&self) {
        self.client.token_store().clear_token();
        info!("logged out");
    }
}
