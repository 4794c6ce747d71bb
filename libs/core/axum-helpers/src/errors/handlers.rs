use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

fn plain_error(status: StatusCode, error: &str, message: &str) -> Response {
    let body = Json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        details: None,
    });
    (status, body).into_response()
}

/// Router fallback for paths no route matches.
pub async fn not_found() -> Response {
    plain_error(
        StatusCode::NOT_FOUND,
        "NotFound",
        "The requested resource was not found",
    )
}

/// Router fallback for a known path hit with the wrong method.
pub async fn method_not_allowed() -> Response {
    plain_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "MethodNotAllowed",
        "The HTTP method is not allowed for this resource",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        let response = not_found().await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_method_not_allowed_status() {
        let response = method_not_allowed().await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
