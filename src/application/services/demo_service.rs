use crate::application::interfaces::DemoService;
use crate::client::ApiClient;
use crate::constants::MAX_PAGE_SIZE;
use crate::error::AppError;
use crate::model::requests::{EmailTestRequest, RequestConfig};
use crate::model::responses::{ApiResponse, UtilsDemoData};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const UTILS_DEMO: &str = "/demo/utils-demo";

/// Client for the backend's `/demo` endpoints
pub struct DemoApi {
    client: Arc<ApiClient>,
}

impl DemoApi {
    /// Creates a service over an existing client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DemoService for DemoApi {
    async fn utils_demo(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResponse<UtilsDemoData>, AppError> {
        // The backend clamps per_page to 100; clamp here too so the request
        // reflects what actually comes back
        let per_page = per_page.min(MAX_PAGE_SIZE);
        let config = RequestConfig::new()
            .query("page", page.to_string())
            .query("per_page", per_page.to_string());
        debug!("fetching utils demo page {page} ({per_page} per page)");
        self.client.get(UTILS_DEMO, Some(config)).await
    }

    async fn send_test_email(&self, email: &str) -> Result<ApiResponse<Value>, AppError> {
        let body = EmailTestRequest {
            email: email.to_string(),
        };
        self.client.post(UTILS_DEMO, &body, None).await
    }

    async fn upload_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<ApiResponse<Value>, AppError> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        debug!("uploading {file_name}");
        self.client.post_multipart(UTILS_DEMO, form, None).await
    }

    async fn seed(&self) -> Result<ApiResponse<Value>, AppError> {
        self.client.get("/demo/seed", None).await
    }
}
