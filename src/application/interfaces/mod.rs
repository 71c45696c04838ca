/// Authentication operations
pub mod auth;
/// Demo endpoint operations
pub mod demo;

pub use auth::AuthService;
pub use demo::DemoService;
