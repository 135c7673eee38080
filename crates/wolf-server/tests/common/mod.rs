use std::net::SocketAddr;
use std::time::Duration;

use wolf_server::build_app;
use wolf_server::config::{LimitsConfig, ServerConfig};

pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server with default limits.
    pub async fn new() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    /// Start a test server that keeps at most `max_rounds` rounds.
    pub async fn with_max_rounds(max_rounds: usize) -> Self {
        let config = ServerConfig {
            limits: LimitsConfig {
                max_rounds,
                ..LimitsConfig::default()
            },
            ..ServerConfig::default()
        };
        Self::from_config(config).await
    }

    async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _shutdown: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn api(&self, path: &str) -> String {
        format!("{}/api/v1{path}", self.base_url())
    }
}

/// Create a round and return its id.
pub async fn create_round(server: &TestServer, players: &[&str], holes: usize) -> String {
    let resp = reqwest::Client::new()
        .post(server.api("/rounds"))
        .json(&serde_json::json!({ "players": players, "holes": holes }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

/// Enter one result and return the response body.
pub async fn set_result(
    server: &TestServer,
    id: &str,
    hole: usize,
    player: &str,
    result: &str,
) -> reqwest::Response {
    reqwest::Client::new()
        .put(server.api(&format!("/rounds/{id}/holes/{hole}")))
        .json(&serde_json::json!({ "player": player, "result": result }))
        .send()
        .await
        .unwrap()
}
