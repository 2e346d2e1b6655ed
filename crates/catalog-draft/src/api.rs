//! Catalog API Contract
//!
//! The async seam between the draft editor and whatever talks to the backend.

use async_trait::async_trait;

use crate::model::ServiceItem;
use crate::wire::SaveCatalogRequest;

pub const LIST_PATH: &str = "/service-items";
pub const SAVE_PATH: &str = "/service-items/save";
pub const RESET_DEFAULTS_PATH: &str = "/service-items/reset-defaults";

/// Common result type for catalog API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a catalog call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never reached the server or the body could not be read
    Network(String),
    /// No stored token, or the server refused it
    Unauthorized(String),
    /// Non-success status or `success: false` payload
    Rejected { status: u16, message: String },
    /// Response body was not the expected envelope
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Could not reach the server: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Not authorized: {}", msg),
            ApiError::Rejected { status, message } => {
                write!(f, "Server rejected the request ({}): {}", status, message)
            }
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Backend operations the catalog editor needs
///
/// Futures are not `Send` so browser-backed clients can implement this.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Fetch the full catalog with nested sub-items
    async fn list_service_items(&self) -> ApiResult<Vec<ServiceItem>>;

    /// Post the whole draft in one batch
    async fn save_service_items(&self, request: &SaveCatalogRequest) -> ApiResult<()>;

    /// Replace the catalog with the server's built-in defaults
    async fn reset_defaults(&self) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::Rejected { status: 422, message: "title is required".to_string() };
        assert_eq!(err.to_string(), "Server rejected the request (422): title is required");
        let err = ApiError::Unauthorized("no token stored".to_string());
        assert_eq!(err.to_string(), "Not authorized: no token stored");
    }
}
