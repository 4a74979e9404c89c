//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for page requests.
///
/// Each request gets an `INFO` span carrying method, URI and HTTP version.
/// The response is logged with its status and latency in milliseconds.
/// 5xx responses (upstream failures included) are additionally logged as
/// failures at `WARN`.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/weather?location=London version=HTTP/1.1}: finished processing request latency=412 ms status=200
/// WARN request{method=GET uri=/ version=HTTP/1.1}: response failed classification=Status code: 502 Bad Gateway latency=10003 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
