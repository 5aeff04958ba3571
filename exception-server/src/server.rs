//! Router assembly and the serve loop.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::error::Error;
use crate::recovery;
use crate::routes;
use crate::scenario::ScenarioTable;

/// Builds the complete application: scenario routes wrapped in panic
/// recovery and request tracing.
///
/// No layer answers requests on its own, so every method on a scenario path
/// reaches the dispatcher.
pub fn app(scenarios: ScenarioTable) -> Router {
    let router = routes::routes(&scenarios)
        .with_state(Arc::new(scenarios))
        .layer(recovery::layer());
    #[cfg(feature = "telemetry")]
    let router = router.layer(crate::telemetry::http_tracing());
    router
}

/// Serves `app` on `listener` until `shutdown` resolves.
///
/// Connection-level failures, such as a client disconnecting before its
/// response is written, stay inside the connection task and do not stop
/// the server.
///
/// # Errors
///
/// Returns [`Error::Server`] if the accept loop fails.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Error> {
    #[cfg(feature = "telemetry")]
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Starting server at http://{}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
