//! Event-to-node matching and actual-vs-structural comparison.

use std::collections::{HashMap, HashSet};

use rstar::primitives::GeomWithData;
use rstar::RTree;
use serde::Serialize;

use crate::centrality::NodeBetweennessRow;
use crate::config::AnalysisConfig;
use crate::graph::RoadGraph;
use crate::stats::{jaccard, spearman, spearman_permutation_p};

/// An observed event location.
#[derive(Debug, Clone, Copy)]
pub struct EventPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Nearest-node index over the surviving nodes of a graph.
///
/// Points are planar lat/lon degrees in `[lon, lat]` axis order, matching
/// the metric in `geo`.
pub struct SpatialIndex {
    tree: RTree<GeomWithData<[f64; 2], String>>,
}

impl SpatialIndex {
    /// Bulk-load the index from a graph's surviving nodes.
    pub fn build(graph: &RoadGraph) -> Self {
        let points: Vec<GeomWithData<[f64; 2], String>> = graph
            .nodes()
            .map(|node| GeomWithData::new([node.lon, node.lat], node.id.clone()))
            .collect();
        Self {
            tree: RTree::bulk_load(points),
        }
    }

    /// Nearest node id; `None` only for an empty graph.
    pub fn snap(&self, lat: f64, lon: f64) -> Option<&str> {
        self.tree
            .nearest_neighbor(&[lon, lat])
            .map(|point| point.data.as_str())
    }
}

/// Snap every event to its nearest surviving node and count hits per node.
///
/// Every event is assigned regardless of how far away it is; far-off
/// events attach to the nearest node rather than being rejected.
pub fn match_events(events: &[EventPoint], graph: &RoadGraph) -> HashMap<String, u32> {
    let index = SpatialIndex::build(graph);
    let mut counts: HashMap<String, u32> = HashMap::new();
    for event in events {
        if let Some(id) = index.snap(event.lat, event.lon) {
            *counts.entry(id.to_owned()).or_insert(0) += 1;
        }
    }
    counts
}

/// Betweenness ranking joined with observed event counts.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub node: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub betweenness: f64,
    pub blockade_count: u32,
}

/// Summary statistics of the predicted-vs-observed comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonSummary {
    pub spearman_rho: f64,
    pub spearman_p: f64,
    pub top_k: usize,
    pub jaccard_top_k: f64,
    pub overlap: Vec<String>,
    pub predicted_not_observed: Vec<String>,
    pub observed_not_predicted: Vec<String>,
}

/// Comparison table plus summary; does not mutate any upstream ranking.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    pub summary: ComparisonSummary,
}

/// Compare the structural (betweenness) ranking against observed counts.
///
/// `betweenness` rows arrive sorted descending; the join keeps that order.
/// The top-K-by-count sort is stable over it, so ties among equal counts
/// resolve by betweenness rank and the summary sets are deterministic.
pub fn compare_rankings(
    betweenness: &[NodeBetweennessRow],
    counts: &HashMap<String, u32>,
    config: &AnalysisConfig,
) -> ComparisonReport {
    let rows: Vec<ComparisonRow> = betweenness
        .iter()
        .map(|row| ComparisonRow {
            node: row.node.clone(),
            name: row.name.clone(),
            lat: row.lat,
            lon: row.lon,
            betweenness: row.betweenness,
            blockade_count: counts.get(&row.node).copied().unwrap_or(0),
        })
        .collect();

    let structural: Vec<f64> = rows.iter().map(|r| r.betweenness).collect();
    let observed: Vec<f64> = rows.iter().map(|r| f64::from(r.blockade_count)).collect();
    let rho = spearman(&structural, &observed);
    let p = spearman_permutation_p(&structural, &observed, rho, config.permutations, config.seed);

    let top_predicted: HashSet<&str> = rows
        .iter()
        .take(config.top_k)
        .map(|r| r.node.as_str())
        .collect();

    let mut by_count: Vec<&ComparisonRow> = rows.iter().collect();
    by_count.sort_by(|a, b| b.blockade_count.cmp(&a.blockade_count));
    let top_observed: HashSet<&str> = by_count
        .iter()
        .take(config.top_k)
        .filter(|r| r.blockade_count > 0)
        .map(|r| r.node.as_str())
        .collect();

    let mut overlap: Vec<String> = top_predicted
        .intersection(&top_observed)
        .map(|id| (*id).to_owned())
        .collect();
    overlap.sort();
    let mut predicted_not_observed: Vec<String> = top_predicted
        .difference(&top_observed)
        .map(|id| (*id).to_owned())
        .collect();
    predicted_not_observed.sort();
    let mut observed_not_predicted: Vec<String> = top_observed
        .difference(&top_predicted)
        .map(|id| (*id).to_owned())
        .collect();
    observed_not_predicted.sort();

    let summary = ComparisonSummary {
        spearman_rho: rho,
        spearman_p: p,
        top_k: config.top_k,
        jaccard_top_k: jaccard(&top_predicted, &top_observed),
        overlap,
        predicted_not_observed,
        observed_not_predicted,
    };

    ComparisonReport { rows, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::betweenness;
    use crate::graph::{RoadEdge, RoadNode};

    fn node(id: &str, lat: f64, lon: f64) -> RoadNode {
        RoadNode {
            id: id.to_string(),
            name: id.to_string(),
            lat,
            lon,
        }
    }

    fn edge(from: &str, to: &str, km: f64) -> RoadEdge {
        RoadEdge {
            from_id: from.to_string(),
            to_id: to.to_string(),
            weight_km: km,
        }
    }

    fn line_graph() -> RoadGraph {
        RoadGraph::build(
            vec![
                node("A", 0.0, 0.0),
                node("B", 0.0, 1.0),
                node("C", 0.0, 2.0),
                node("D", 0.0, 3.0),
            ],
            &[
                edge("A", "B", 1.0),
                edge("B", "C", 1.0),
                edge("C", "D", 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn events_on_node_coordinates_match_exactly() {
        let g = line_graph();
        let events = vec![
            EventPoint { lat: 0.0, lon: 1.0 },
            EventPoint { lat: 0.0, lon: 3.0 },
        ];
        let counts = match_events(&events, &g);
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.get("D"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn far_events_still_attach_to_the_nearest_node() {
        let g = line_graph();
        let events = vec![EventPoint {
            lat: 40.0,
            lon: 99.0,
        }];
        let counts = match_events(&events, &g);
        assert_eq!(counts.get("D"), Some(&1));
    }

    #[test]
    fn matching_skips_removed_nodes() {
        let g = line_graph();
        let snapshot = g.without(["B"]);
        let events = vec![EventPoint { lat: 0.0, lon: 1.0 }];
        let counts = match_events(&events, &snapshot);
        // B is gone; its coordinate snaps to a surviving neighbor
        assert_eq!(counts.values().sum::<u32>(), 1);
        assert!(!counts.contains_key("B"));
    }

    #[test]
    fn identical_rankings_give_perfect_overlap() {
        let g = line_graph();
        let tables = betweenness(&g);
        // one observed event per node, weighted like the structural rank
        let mut counts = HashMap::new();
        for (position, row) in tables.nodes.iter().enumerate() {
            counts.insert(row.node.clone(), (tables.nodes.len() - position) as u32);
        }
        let config = AnalysisConfig {
            top_k: 2,
            permutations: 200,
            ..AnalysisConfig::default()
        };
        let report = compare_rankings(&tables.nodes, &counts, &config);
        assert_eq!(report.summary.jaccard_top_k, 1.0);
        // structural ranks tie pairwise on a path graph, capping rho below 1
        assert!(report.summary.spearman_rho > 0.8);
        assert!(report.summary.predicted_not_observed.is_empty());
        assert!(report.summary.observed_not_predicted.is_empty());
    }

    #[test]
    fn disjoint_top_sets_give_zero_overlap() {
        let g = line_graph();
        let tables = betweenness(&g);
        // events only on the two structural bottom nodes A and D
        let mut counts = HashMap::new();
        counts.insert("A".to_string(), 5);
        counts.insert("D".to_string(), 3);
        let config = AnalysisConfig {
            top_k: 2,
            permutations: 200,
            ..AnalysisConfig::default()
        };
        let report = compare_rankings(&tables.nodes, &counts, &config);
        assert_eq!(report.summary.jaccard_top_k, 0.0);
        assert_eq!(report.summary.observed_not_predicted, ["A", "D"]);
        assert_eq!(report.summary.predicted_not_observed.len(), 2);
        // unmatched nodes appear with zero counts in the join
        assert!(report.rows.iter().any(|r| r.blockade_count == 0));
    }
}
