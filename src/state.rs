use crate::config::ServerConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared application state behind every transport.
///
/// The generators are stateless, so the state is small: the resolved config
/// plus activity counters surfaced through health details.
pub struct AppState {
    config: Arc<ServerConfig>,
    /// Outline generation counter for monitoring
    outlines_generated: AtomicU64,
    /// Complete post generation counter for monitoring
    posts_generated: AtomicU64,
    /// Validation run counter for monitoring
    validations_run: AtomicU64,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            outlines_generated: AtomicU64::new(0),
            posts_generated: AtomicU64::new(0),
            validations_run: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> Arc<ServerConfig> {
        self.config.clone()
    }

    /// Build the RNG used for template selection. With `rng_seed` set the
    /// sequence is reproducible across calls, which is how the test suite
    /// pins generated output.
    pub fn make_rng(&self) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn record_outline(&self) {
        self.outlines_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_post(&self) {
        self.posts_generated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation(&self) {
        self.validations_run.fetch_add(1, Ordering::Relaxed);
    }

    /// Get activity statistics
    pub fn generation_stats(&self) -> GenerationStats {
        GenerationStats {
            outlines_generated: self.outlines_generated.load(Ordering::Relaxed),
            posts_generated: self.posts_generated.load(Ordering::Relaxed),
            validations_run: self.validations_run.load(Ordering::Relaxed),
        }
    }
}

/// Activity statistics for monitoring
#[derive(Debug, Clone)]
pub struct GenerationStats {
    pub outlines_generated: u64,
    pub posts_generated: u64,
    pub validations_run: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero_and_accumulate() {
        let state = AppState::new(Arc::new(ServerConfig::default()));
        let stats = state.generation_stats();
        assert_eq!(stats.outlines_generated, 0);
        assert_eq!(stats.posts_generated, 0);
        assert_eq!(stats.validations_run, 0);

        state.record_outline();
        state.record_outline();
        state.record_post();
        state.record_validation();

        let stats = state.generation_stats();
        assert_eq!(stats.outlines_generated, 2);
        assert_eq!(stats.posts_generated, 1);
        assert_eq!(stats.validations_run, 1);
    }

    #[test]
    fn seeded_rngs_agree_across_calls() {
        let config = ServerConfig {
            rng_seed: Some(7),
            ..ServerConfig::default()
        };
        let state = AppState::new(Arc::new(config));

        use rand::Rng;
        let first: u64 = state.make_rng().r#gen();
        let second: u64 = state.make_rng().r#gen();
        assert_eq!(first, second);
    }
}
