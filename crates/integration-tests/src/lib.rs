//! Integration tests for Punchcard.
//!
//! Each test starts its own server on an ephemeral port with a fresh
//! in-memory store, then talks to it over real HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p punchcard-integration-tests
//! ```

use std::net::SocketAddr;

use punchcard_server::{AppState, LoyaltyStore};
use reqwest::Client;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Error type for test helpers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A running server plus an HTTP client pointed at it.
///
/// The server task is aborted when the context is dropped.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub state: AppState,
    server: JoinHandle<()>,
}

impl TestContext {
    /// Start a server on `127.0.0.1` with an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound.
    pub async fn start() -> Result<Self, BoxError> {
        let state = AppState::new(LoyaltyStore::new());
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let app = punchcard_server::app(state.clone());
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            client: Client::new(),
            base_url: format!("http://{addr}"),
            state,
            server,
        })
    }

    /// Absolute URL for a path on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET` a path and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn get_json(&self, path: &str) -> Result<(u16, Value), BoxError> {
        let resp = self.client.get(self.url(path)).send().await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }

    /// `POST` a JSON body to `/api/checkin` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn checkin(&self, body: &Value) -> Result<(u16, Value), BoxError> {
        let resp = self
            .client
            .post(self.url("/api/checkin"))
            .json(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        Ok((status, resp.json().await?))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.server.abort();
    }
}
