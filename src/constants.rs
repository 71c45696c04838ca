/// Default base URL for the flask-catalyst API when no environment override is set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
/// Environment variable that overrides the API base URL
pub const BASE_URL_ENV: &str = "CATALYST_BASE_URL";
/// Environment variable controlling the maximum log level
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Backend error message sent when the JWT signature has expired
pub const SIGNATURE_EXPIRED: &str = "Signature has expired";
/// Backend error message sent when the JWT has been revoked
pub const TOKEN_REVOKED: &str = "Token has been revoked";
/// Default page size used by the paginated demo endpoint
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Maximum page size the backend accepts before clamping
pub const MAX_PAGE_SIZE: u32 = 100;
/// User agent string sent with every request
pub const USER_AGENT: &str = "catalyst-client/0.1.0";
