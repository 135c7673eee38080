use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::round_store::RoundStoreStats;
use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub rounds: RoundStoreStats,
}

/// Structured health check endpoint. Returns server status and round counts.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let rounds = state.rounds.read().await.stats();
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "healthy",
            version: "0.1.0",
            rounds: RoundStoreStats {
                total_stored: 4,
                in_progress: 1,
            },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"healthy\""));
        assert!(json.contains("\"total_stored\":4"));
        assert!(json.contains("\"in_progress\":1"));
    }

    #[tokio::test]
    async fn empty_store_is_healthy() {
        let state = AppState::new(ServerConfig::default());
        let Json(resp) = health_check(State(state)).await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.rounds.total_stored, 0);
    }
}
