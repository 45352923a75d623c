use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so handlers can return `AppResult<T>` and let
/// the error map itself to a status code and JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Movie not found")]
    NotFound,

    #[error("The given data was invalid.")]
    Validation(validator::ValidationErrors),

    /// A mutation failed at the store level. Carries the operation-specific
    /// message the client sees ("Could not save movie", etc.).
    #[error("{message}")]
    Persistence {
        message: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },

    /// A read-path database failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": "Movie not found" })))
                    .into_response()
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "message": "The given data was invalid.",
                    "errors": validation_messages(&errors),
                })),
            )
                .into_response(),
            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message })))
                    .into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Flatten [`validator::ValidationErrors`] into `{field: [messages]}`.
fn validation_messages(errors: &validator::ValidationErrors) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<serde_json::Value> = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => json!(msg),
                    None => json!(format!("{field} is invalid")),
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(messages))
        })
        .collect();
    serde_json::Value::Object(map)
}
