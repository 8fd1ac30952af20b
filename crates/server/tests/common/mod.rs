//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port. It can be backed either
//! by the scripted `MockAiProvider` from `emojifier-test-utils` or by the real
//! Gemini provider pointed at an `httpmock::MockServer`.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use emojifier::{providers::ai::AiProvider, EmojifyClientBuilder};
use emojifier_server::{router::create_router, state::AppState};
use emojifier_test_utils::MockAiProvider;
use httpmock::MockServer;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the Gemini provider is pointed at on the mock server.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
pub const TEST_API_KEY: &str = "test-api-key";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server with a scripted in-process provider.
    pub async fn spawn_with_mock(provider: &MockAiProvider) -> Result<Self> {
        Self::spawn_with_provider(Box::new(provider.clone())).await
    }

    /// Spawns the server with the Gemini provider aimed at `mock_server`.
    pub async fn spawn_with_gemini(mock_server: &MockServer) -> Result<Self> {
        let client = EmojifyClientBuilder::new()
            .gemini_api_key(TEST_API_KEY.to_string())
            .gemini_api_url(mock_server.url(GEMINI_PATH))
            .build()?;
        Self::spawn_with_state(AppState::new(client)).await
    }

    pub async fn spawn_with_provider(provider: Box<dyn AiProvider>) -> Result<Self> {
        let client = EmojifyClientBuilder::new().ai_provider(provider).build()?;
        Self::spawn_with_state(AppState::new(client)).await
    }

    async fn spawn_with_state(app_state: AppState) -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("server error");
        });

        Ok(Self {
            address,
            client: Client::new(),
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts a JSON body to `/emojify`.
    pub async fn post_emojify(
        &self,
        body: &serde_json::Value,
        debug: bool,
    ) -> Result<reqwest::Response> {
        let url = if debug {
            format!("{}/emojify?debug=true", self.address)
        } else {
            format!("{}/emojify", self.address)
        };
        Ok(self.client.post(url).json(body).send().await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
