//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the disruption engine, passed explicitly into each
/// component instead of living in module-level state.
///
/// `penalty_km` is the single value that decides rankings whenever a removal
/// disconnects the graph: one unreachable ordered pair costs as much as that
/// many kilometres of added travel distance, so it must sit an order of
/// magnitude above the longest plausible shortest path in the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Cost charged per unreachable ordered node pair, in km-equivalents.
    pub penalty_km: f64,
    /// Maps a disruption ratio into the effective-increase unit so
    /// disconnecting and non-disconnecting removals rank on one axis.
    pub disconnection_scale: f64,
    /// Maximum number of removals the greedy solver commits.
    pub steps: usize,
    /// Size of the top-K sets compared between predicted and observed.
    pub top_k: usize,
    /// Number of shuffles for the Spearman permutation p-value.
    pub permutations: usize,
    /// Seed for the permutation shuffles.
    pub seed: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            penalty_km: 3_000.0,
            disconnection_scale: 10_000.0,
            steps: 20,
            top_k: 15,
            permutations: 10_000,
            seed: 42,
        }
    }
}
