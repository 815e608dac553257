//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Per-request span and event levels used by [`layer`].
const SPAN_LEVEL: Level = Level::INFO;
const REQUEST_LEVEL: Level = Level::DEBUG;
const FAILURE_LEVEL: Level = Level::ERROR;

/// Creates the tracing middleware wrapped around the page routes.
///
/// Each request gets an `INFO` span. The request start is logged at `DEBUG`,
/// the response at `INFO`, and 5xx responses additionally at `ERROR`.
/// Latencies are in milliseconds. Rejected writes (400/404) are not failures.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/pages version=HTTP/1.1}: finished processing request latency=0 ms status=201
/// INFO request{method=GET uri=/pages/17 version=HTTP/1.1}: finished processing request latency=0 ms status=404
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(SPAN_LEVEL))
        .on_request(DefaultOnRequest::new().level(REQUEST_LEVEL))
        .on_response(
            DefaultOnResponse::new()
                .level(SPAN_LEVEL)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(FAILURE_LEVEL)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/ok", get(|| async { StatusCode::NO_CONTENT }))
            .route("/boom", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(layer())
    }

    #[tokio::test]
    async fn test_layer_passes_responses_through() {
        let ok = app()
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::NO_CONTENT);

        let boom = app()
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(boom.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
