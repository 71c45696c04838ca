/// Authentication service backed by the API client
pub mod auth_service;
/// Demo endpoint service backed by the API client
pub mod demo_service;

pub use auth_service::Authenticator;
pub use demo_service::DemoApi;
