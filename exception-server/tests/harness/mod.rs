//! Test server wrapper that starts the exception server on a random port

use std::net::SocketAddr;

use exception_server::scenario::ScenarioTable;
use exception_server::server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server serving the standard scenarios
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start() -> Result<Self, Box<dyn std::error::Error>> {
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = server::app(ScenarioTable::standard());
        tokio::spawn(async move {
            server::serve(listener, app, async move {
                shutdown_clone.cancelled().await;
            })
            .await
            .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
