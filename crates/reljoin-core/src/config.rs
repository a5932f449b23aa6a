//! Engine configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Sort pre-passes (sort-merge join) may use a data-parallel stable sort.
    /// Parallelism stays confined to the sort; merges remain sequential.
    pub parallel_sort: bool,

    /// Tables smaller than this always sort sequentially, parallel_sort or not.
    pub parallel_sort_min_rows: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_sort: false,
            parallel_sort_min_rows: 4096,
        }
    }
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `RELJOIN_PARALLEL_SORT`: "1"/"true" to enable the parallel pre-sort
    /// - `RELJOIN_PARALLEL_SORT_MIN_ROWS`: sequential-sort threshold
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("RELJOIN_PARALLEL_SORT") {
            cfg.parallel_sort = s == "1" || s.eq_ignore_ascii_case("true");
        }

        if let Ok(s) = std::env::var("RELJOIN_PARALLEL_SORT_MIN_ROWS") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.parallel_sort_min_rows = v;
            }
        }

        cfg
    }
}
