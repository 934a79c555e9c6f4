//! Per-request trace ID and cancellation.
//!
//! `SetRequestIdLayer` guarantees an `x-trace-id` header on every request
//! (the caller's, or a fresh one from [`MakeTraceId`]); `PropagateRequestIdLayer`
//! copies it onto the response. [`attach_context`] turns that header into the
//! [`RequestContext`] handlers pass to the store.

use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use todo_core::RequestContext;
use todo_core::context::generate_trace_id;
use tower_http::request_id::{MakeRequestId, RequestId};

/// Header carrying the trace ID in both directions.
pub static TRACE_ID_HEADER: HeaderName = HeaderName::from_static("x-trace-id");

/// Generates the same 32-hex-char IDs the CLI uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTraceId;

impl MakeRequestId for MakeTraceId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&generate_trace_id())
            .ok()
            .map(RequestId::new)
    }
}

pub(crate) fn trace_id_of<B>(request: &axum::http::Request<B>) -> &str {
    request
        .headers()
        .get(&TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Build a `RequestContext` for the request and store it as an extension.
///
/// The context's token is cancelled if the request future is dropped before
/// completing (client went away, server shut down past its grace period), so
/// a write still queued in the store is discarded instead of applied.
pub async fn attach_context(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::with_trace_id(trace_id_of(&request));
    let guard = ctx.cancellation().clone().drop_guard();
    request.extensions_mut().insert(ctx);

    let response = next.run(request).await;
    guard.disarm();
    response
}
