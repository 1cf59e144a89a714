//! Fixed pieces of the Lambda Runtime API contract that the mock answers with.
//!
//! The request and trace ids are static placeholders so callers
//! exercising a runtime client locally can assert on them verbatim.

use serde::Serialize;

/// Path a runtime client polls for its next event. Any path is answered the
/// same way, this one is only the conventional entry point.
pub const NEXT_INVOCATION_PATH: &str = "/2018-06-01/runtime/invocation/next";

pub const AWS_REQUEST_ID_HEADER: &str = "lambda-runtime-aws-request-id";
pub const TRACE_ID_HEADER: &str = "lambda-runtime-trace-id";

pub const AWS_REQUEST_ID: &str = "request-id-from-nodejs";
pub const TRACE_ID: &str = "some-xray-trace-id";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Event body handed to every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvocationPayload {
    pub some: &'static str,
}

impl Default for InvocationPayload {
    fn default() -> Self {
        Self { some: "payload" }
    }
}
