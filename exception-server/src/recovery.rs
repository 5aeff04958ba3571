//! Panic recovery for request handlers.
//!
//! A panicking handler takes down only its own request: the panic is caught
//! by [`CatchPanicLayer`] and answered with `500` and a plain-text body of the
//! form `PANIC: <message>`.

use std::any::Any;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

/// Media type of recovered-panic responses.
pub const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";

/// Type of the panic handler installed by [`layer`].
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates the recovery layer.
#[must_use]
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(recover as PanicHandler)
}

fn recover(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    #[cfg(feature = "telemetry")]
    tracing::error!(panic = message, "recovered from panic in request handler");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF_8))],
        format!("PANIC: {message}"),
    )
        .into_response()
}

/// Extracts the message from a panic payload, if it is a string.
fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else {
        "unknown panic payload"
    }
}
