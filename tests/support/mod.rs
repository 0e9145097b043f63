#![allow(dead_code)]

use blogsmith_mcp::state::AppState;
use blogsmith_mcp::{BlogServer, ServerConfig};
use std::sync::Arc;

pub fn seeded_config(seed: u64) -> ServerConfig {
    ServerConfig {
        rng_seed: Some(seed),
        ..ServerConfig::default()
    }
}

pub fn seeded_state(seed: u64) -> Arc<AppState> {
    Arc::new(AppState::new(Arc::new(seeded_config(seed))))
}

pub fn config_with<F>(f: F) -> ServerConfig
where
    F: FnOnce(&mut ServerConfig),
{
    let mut config = ServerConfig::default();
    f(&mut config);
    config
}

pub fn server_with(config: ServerConfig) -> BlogServer {
    BlogServer::new(Arc::new(config))
}
