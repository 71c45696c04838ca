/// Service traits for the backend endpoints
pub mod interfaces;
/// Service implementations backed by the API client
pub mod services;
