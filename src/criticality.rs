//! Single-node removal impact analysis.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::graph::RoadGraph;
use crate::score::reachable_pair_cost;

/// One row of the node criticality table.
#[derive(Debug, Clone, Serialize)]
pub struct CriticalityRow {
    pub node: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub connected: bool,
    pub n_components: usize,
    pub disruption_ratio: f64,
    pub effective_increase: f64,
    pub delta_pct: Option<f64>,
}

/// Removal impact of every node, ranked most critical first.
///
/// Removals that keep the remainder connected are scored by the signed
/// change in total reachable-pair cost (usually negative, since the removed
/// node's own pairs disappear from the sum). Removals that disconnect the
/// remainder are scored by the share of surviving-pair reachability
/// destroyed, scaled by `disconnection_scale` so both kinds rank on one
/// axis with disconnection always dominating.
pub fn node_criticality(graph: &RoadGraph, config: &AnalysisConfig) -> Vec<CriticalityRow> {
    let n = graph.node_count();
    let baseline = reachable_pair_cost(graph);
    let max_pairs = (n.saturating_sub(1) * n.saturating_sub(2)) as f64;

    let mut rows = Vec::with_capacity(n);
    for rec in graph.nodes() {
        let trial = graph.without([rec.id.as_str()]);
        let sizes = trial.component_sizes();

        let row = if sizes.len() <= 1 {
            let new_total = reachable_pair_cost(&trial);
            let delta = new_total - baseline;
            CriticalityRow {
                node: rec.id.clone(),
                name: rec.name.clone(),
                lat: rec.lat,
                lon: rec.lon,
                connected: true,
                n_components: sizes.len().max(1),
                disruption_ratio: 0.0,
                effective_increase: delta,
                delta_pct: (baseline > 0.0).then(|| 100.0 * delta / baseline),
            }
        } else {
            let reachable: usize = sizes.iter().map(|size| size * (size - 1)).sum();
            let ratio = 1.0 - reachable as f64 / max_pairs;
            log::info!(
                "removing {} splits the network into {} components",
                rec.id,
                sizes.len()
            );
            CriticalityRow {
                node: rec.id.clone(),
                name: rec.name.clone(),
                lat: rec.lat,
                lon: rec.lon,
                connected: false,
                n_components: sizes.len(),
                disruption_ratio: ratio,
                effective_increase: ratio * config.disconnection_scale,
                delta_pct: None,
            }
        };
        rows.push(row);
    }

    rows.sort_by(|a, b| {
        b.effective_increase
            .partial_cmp(&a.effective_increase)
            .unwrap_or(Ordering::Equal)
    });
    rows
}
