//! Shared error response shape and fallback handlers.
//!
//! Domain crates define their own error enums with `IntoResponse`; this
//! module only carries the generic shape used by infrastructure routes
//! (fallbacks, health) so those responses look uniform across services.

pub mod handlers;

pub use handlers::{method_not_allowed, not_found};

use serde::Serialize;
use utoipa::ToSchema;

/// Generic error response structure for infrastructure routes.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found"
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
