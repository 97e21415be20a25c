// Shared test helpers for running the API server against a temporary database.

use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use domain_verdict::initialization::init_store;
use domain_verdict::server::{serve_on, AppState};
use domain_verdict::{Config, SqliteStore};

/// A running server on an ephemeral port. Shuts down when dropped.
pub struct TestServer {
    pub base_url: String,
    pub store: SqliteStore,
    pub client: reqwest::Client,
    shutdown: CancellationToken,
    handle: Option<JoinHandle<Result<(), anyhow::Error>>>,
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POSTs `body` as JSON and returns the status and decoded JSON body.
    pub async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        (status, response.json().await.expect("body is not JSON"))
    }

    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed");
        let status = response.status().as_u16();
        (status, response.json().await.expect("body is not JSON"))
    }

    /// Cancels the server and waits for it to stop.
    pub async fn stop(mut self) -> Result<(), anyhow::Error> {
        self.shutdown.cancel();
        let handle = self.handle.take().expect("server already stopped");
        tokio::time::timeout(Duration::from_secs(10), handle)
            .await
            .expect("server did not shut down")
            .expect("server task panicked")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Starts the API server with a fresh file-backed database.
pub async fn start_server() -> TestServer {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        db_path: dir.path().join("verdict.db"),
        ..Default::default()
    };
    let store = init_store(&config)
        .await
        .expect("Failed to initialize store");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let base_url = format!("http://{}", listener.local_addr().expect("no local address"));

    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(serve_on(
        listener,
        AppState::new(store.clone(), Duration::from_secs(10)),
        shutdown.clone(),
    ));

    TestServer {
        base_url,
        store,
        client: reqwest::Client::new(),
        shutdown,
        handle: Some(handle),
        _dir: dir,
    }
}
