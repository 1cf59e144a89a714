use axum::{Router, body::Body, http::Request};
use tower_http::trace::TraceLayer;
use tracing::{Span, info};

use crate::handlers::invocation::next_invocation;

/// Every method on every path lands on the invocation handler.
pub fn build_router() -> Router {
    Router::new()
        .fallback(next_invocation)
        .layer(TraceLayer::new_for_http().on_request(log_request))
}

fn log_request(request: &Request<Body>, _span: &Span) {
    let method = request.method();
    let uri = request.uri();
    info!(%method, %uri, "{method} {uri}");
}
