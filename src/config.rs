//! Engine configuration: defaults, environment overrides, driver flags.

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// Environment variable overriding [`EngineConfig::worker_threads`].
pub const THREADS_ENV: &str = "GRAPH_ENGINE_THREADS";

/// Settings for operations that fan out across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Worker threads for parallel queries. 0 = one per available core.
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

fn default_worker_threads() -> usize {
    0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            worker_threads: default_worker_threads(),
        }
    }
}

impl EngineConfig {
    /// Defaults, overridden by `GRAPH_ENGINE_THREADS` when it parses.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(THREADS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.worker_threads = n,
                Err(_) => log::warn!("Ignoring {}={:?}: not a thread count", THREADS_ENV, raw),
            }
        }
        config
    }

    /// Replace the worker thread count.
    pub fn with_worker_threads(mut self, worker_threads: usize) -> Self {
        self.worker_threads = worker_threads;
        self
    }

    /// Build a dedicated rayon pool sized by this config.
    pub(crate) fn thread_pool(&self) -> GraphResult<rayon::ThreadPool> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_threads)
            .build()
            .map_err(|e| GraphError::WorkerPool(e.to_string()))
    }
}
