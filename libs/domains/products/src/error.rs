use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::models::{MessageResponse, ServerErrorResponse};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("availability value must be provided")]
    MissingAvailability,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: "Product not found".to_owned(),
                }),
            )
                .into_response(),
            Self::MissingAvailability => (
                StatusCode::BAD_REQUEST,
                Json(MessageResponse {
                    message: "availability value must be provided".to_owned(),
                }),
            )
                .into_response(),
            Self::Database(details) => {
                tracing::error!(%details, "Product persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ServerErrorResponse {
                        error: "Internal Server Error".to_owned(),
                        details,
                    }),
                )
                    .into_response()
            }
        }
    }
}
