/// Request models and per-call transport options
pub mod requests;
/// Response models from the backend
pub mod responses;
