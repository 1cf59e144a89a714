use anyhow::Context;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};

use runtime_mock_core::error::AppError;

use crate::runtime::{
    AWS_REQUEST_ID, AWS_REQUEST_ID_HEADER, InvocationPayload, JSON_CONTENT_TYPE, TRACE_ID,
    TRACE_ID_HEADER,
};

// ── * (any method, any path) ─────────────────────────────────────────────────

/// Answer every request with the canned invocation event.
///
/// Method, path, headers and body of the request are ignored.
pub async fn next_invocation() -> Result<Response<Body>, AppError> {
    let body = serde_json::to_vec(&InvocationPayload::default())
        .context("failed to encode invocation payload")?;
    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_LENGTH, body.len())
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(AWS_REQUEST_ID_HEADER, AWS_REQUEST_ID)
        .header(TRACE_ID_HEADER, TRACE_ID)
        .body(Body::from(body))
        .context("failed to build invocation response")?;
    Ok(response)
}
