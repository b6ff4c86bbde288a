use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.title_empty",
            ),
            ProductError::EmptyBatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.empty_batch",
            ),
            ProductError::BatchTooLarge { .. } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.batch_too_large",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::Repository(RepositoryError::QueryBuild(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.query_build",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

/// Error body for a path id that is not a UUID.
pub fn invalid_id() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}
