use axum::Router;
use axum::extract::Request;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::context::{MakeTraceId, TRACE_ID_HEADER, attach_context, trace_id_of};
use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
                trace_id = %trace_id_of(request),
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/get", get(handlers::get))
        .route("/add", post(handlers::add))
        .route("/update", post(handlers::update).patch(handlers::update))
        .route("/delete", post(handlers::delete).delete(handlers::delete))
        .route("/list", get(handlers::list))
        .layer(middleware::from_fn(attach_context))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(TRACE_ID_HEADER.clone()))
        .layer(SetRequestIdLayer::new(TRACE_ID_HEADER.clone(), MakeTraceId))
        .with_state(state)
}
