//! Render settings

use serde::{Deserialize, Serialize};

/// How a document is rendered. No option changes the produced bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render file blocks on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Minimum number of files before rendering goes parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    64
}

impl RenderOptions {
    /// Options that always render on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub(crate) fn use_parallel(&self, file_count: usize) -> bool {
        self.parallel && file_count >= self.parallel_threshold
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}
