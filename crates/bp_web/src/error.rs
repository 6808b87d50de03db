use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Any failure inside the post pipeline. Always a 500.
    Pipeline(bp_core::Error),
    /// The request body could not be turned into a topic.
    InvalidPayload { status: StatusCode, detail: String },
}

impl From<bp_core::Error> for ApiError {
    fn from(err: bp_core::Error) -> Self {
        ApiError::Pipeline(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Pipeline(err) => {
                let stage = err.stage().map(|s| s.as_str()).unwrap_or("news");
                tracing::error!(stage, error = %err, "Post generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::InvalidPayload { status, detail } => {
                tracing::debug!(%status, detail = %detail, "Rejected request body");
                (status, detail)
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
