use serde::Deserialize;

use wolf_core::ScoringConfig;

/// Top-level server configuration, loaded from `wolf.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub limits: LimitsConfig,
    pub scoring: ScoringConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            limits: LimitsConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// Request and storage limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Rounds kept in memory before the oldest is evicted.
    pub max_rounds: usize,
    pub max_players: usize,
    pub max_holes: usize,
    pub max_name_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_rounds: 500,
            max_players: 8,
            max_holes: 36,
            max_name_len: 32,
        }
    }
}

impl ServerConfig {
    /// Check configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(format!(
                "listen_addr is not a valid socket address: {}",
                self.listen_addr
            ));
        }
        if self.limits.max_rounds == 0 {
            return Err("limits.max_rounds must be > 0".to_string());
        }
        if self.limits.max_players == 0 {
            return Err("limits.max_players must be > 0".to_string());
        }
        if self.limits.max_holes == 0 {
            return Err("limits.max_holes must be > 0".to_string());
        }
        if self.limits.max_name_len == 0 {
            return Err("limits.max_name_len must be > 0".to_string());
        }
        Ok(())
    }

    /// Load config from `wolf.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("wolf.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from wolf.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse wolf.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No wolf.toml found, using defaults");
                ServerConfig::default()
            },
        };

        if let Ok(addr) = std::env::var("WOLF_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(val) = std::env::var("WOLF_MAX_ROUNDS")
            && let Ok(n) = val.parse::<usize>()
        {
            config.limits.max_rounds = n;
        }
        if let Ok(val) = std::env::var("WOLF_MAX_PLAYERS")
            && let Ok(n) = val.parse::<usize>()
        {
            config.limits.max_players = n;
        }
        if let Ok(val) = std::env::var("WOLF_MAX_HOLES")
            && let Ok(n) = val.parse::<usize>()
        {
            config.limits.max_holes = n;
        }

        // A dedicated scoring file wins over the [scoring] table.
        if std::env::var("WOLF_SCORING_CONFIG").is_ok() {
            config.scoring = ScoringConfig::load();
        }
        config.scoring = config.scoring.validated();

        config
    }
}
