//! Console logging and HTTP request tracing.
//!
//! Only available with the `telemetry` feature.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, MakeSpan, OnResponse, TraceLayer};
use tracing::Span;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive used when neither `RUST_LOG` nor a configured
/// level is present.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `level`; `level` wins over [`DEFAULT_LEVEL`].
/// Calling this more than once is harmless: later calls keep the first
/// subscriber.
pub fn init(level: Option<&str>) {
    let fallback = level.unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// HTTP tracing layer type produced by [`http_tracing`].
pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    HttpMakeSpan,
    DefaultOnRequest,
    HttpOnResponse,
>;

/// Creates an HTTP tracing layer for the scenario router.
#[must_use]
pub fn http_tracing() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(HttpMakeSpan)
        .on_response(HttpOnResponse)
}

/// Opens one span per request, named after method and path.
#[derive(Clone, Copy, Debug)]
pub struct HttpMakeSpan;

impl<A> MakeSpan<A> for HttpMakeSpan {
    fn make_span(&mut self, request: &Request<A>) -> Span {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
            version = ?request.version(),
            status = tracing::field::Empty,
        )
    }
}

/// Records the status on the request span and logs status, body type and
/// latency.
#[derive(Clone, Copy, Debug)]
pub struct HttpOnResponse;

impl<A> OnResponse<A> for HttpOnResponse {
    fn on_response(self, response: &Response<A>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();
        span.record("status", status);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");
        tracing::info!(
            "status={} content_type={} elapsed={}ms",
            status,
            content_type,
            latency.as_millis()
        );
    }
}
