use crate::error::AppError;
use crate::model::responses::{ApiResponse, UtilsDemoData};
use async_trait::async_trait;
use serde_json::Value;

/// Operations of the `/demo` endpoints
#[async_trait]
pub trait DemoService: Send + Sync {
    /// Fetches one page of the utils demo listing
    async fn utils_demo(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<UtilsDemoData>, AppError>;

    /// Asks the backend to send its demo email to the given address
    async fn send_test_email(&self, email: &str) -> Result<ApiResponse<Value>, AppError>;

    /// Uploads a file through the demo endpoint
    async fn upload_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ApiResponse<Value>, AppError>;

    /// Seeds the backend with demo users
    async fn seed(&self) -> Result<ApiResponse<Value>, AppError>;
}
