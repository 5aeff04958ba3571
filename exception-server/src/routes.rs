//! HTTP route handlers for the exception server.
//!
//! Every scenario path is registered for any method and dispatched through
//! the shared [`ScenarioTable`]. Responses follow three separate paths:
//!
//! - **Scenario outcome** → the scenario's status + JSON string or value
//! - **Encoding failure** → HTTP 500 + `text/plain` encoder message
//! - **Fault** → the handler panics; recovery happens in an outer layer

use std::sync::Arc;

use axum::Router;
use axum::extract::{MatchedPath, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use serde::Serialize;
#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::scenario::{Outcome, ScenarioTable};

/// Type alias for the shared scenario table used by Axum route handlers.
pub type ScenarioState = Arc<ScenarioTable>;

/// Media type of every non-fault scenario response.
pub const APPLICATION_JSON: &str = "application/json";

/// Creates the Axum router with one route per scenario path.
pub fn routes(scenarios: &ScenarioTable) -> Router<ScenarioState> {
    scenarios
        .iter()
        .fold(Router::new(), |router, scenario| {
            router.route(scenario.path(), any(dispatch))
        })
}

/// Any method on a scenario path: resolve and encode its outcome.
#[cfg_attr(feature = "telemetry", instrument(skip_all, fields(path = %path.as_str())))]
async fn dispatch(State(scenarios): State<ScenarioState>, path: MatchedPath) -> Response {
    let Some(scenario) = scenarios.get(path.as_str()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match scenario.resolve() {
        Outcome::Success(value) => write_json(&value, scenario.status()),
        Outcome::Failure(rendered) => write_json(&rendered, scenario.status()),
    }
}

/// Encodes `value` as the JSON body of a response with `status`.
///
/// If encoding fails the response is `500 Internal Server Error` with the
/// encoder's message as a plain-text body instead.
pub fn write_json<T: Serialize + ?Sized>(value: &T, status: StatusCode) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
            body,
        )
            .into_response(),
        Err(error) => {
            #[cfg(feature = "telemetry")]
            tracing::error!(?error, "failed to encode response body");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}
