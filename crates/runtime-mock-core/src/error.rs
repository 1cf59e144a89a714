use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a handler can surface to the client.
///
/// The mock has no client-facing failure modes; anything that goes wrong
/// while building a response renders as a 500 with the `{kind, message}`
/// JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Self::Internal(ref e) = self;
        tracing::error!(error = %e, kind = self.kind(), "internal error");
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}
