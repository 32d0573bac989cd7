//! Connectivity scoring: total pairwise shortest-path cost with a
//! disconnection penalty.

use petgraph::algo::dijkstra;

use crate::graph::RoadGraph;

/// Sum of shortest-path distances over all ordered pairs of surviving nodes
/// that can reach each other. Pure path cost, no penalty terms.
pub fn reachable_pair_cost(graph: &RoadGraph) -> f64 {
    let g = graph.inner();
    let mut total = 0.0;
    for source in g.node_indices() {
        let dist = dijkstra(g, source, None, |edge| *edge.weight());
        for (target, d) in &dist {
            if *target != source {
                total += d;
            }
        }
    }
    total
}

/// Ordered pairs from the original pair universe that are not mutually
/// reachable in this snapshot, including pairs whose endpoints were removed.
pub fn unreachable_ordered_pairs(graph: &RoadGraph, original_node_count: usize) -> usize {
    let reachable: usize = graph
        .component_sizes()
        .iter()
        .map(|size| size * (size - 1))
        .sum();
    (original_node_count * original_node_count.saturating_sub(1)).saturating_sub(reachable)
}

/// Total pairwise cost of a snapshot under the penalty model.
///
/// Reachable ordered pairs contribute their shortest-path distance; every
/// other ordered pair in the original universe costs `penalty_per_pair`.
/// The pair universe is always the *original* node count, so removing a
/// node is charged for destroying all pairs that used to include it, and
/// removing structure can never lower the score.
pub fn connectivity_score(
    graph: &RoadGraph,
    original_node_count: usize,
    penalty_per_pair: f64,
) -> f64 {
    let unreachable = unreachable_ordered_pairs(graph, original_node_count);
    if unreachable > 0 {
        log::debug!("snapshot has {unreachable} unreachable ordered pairs, applying penalty");
    }
    reachable_pair_cost(graph) + unreachable as f64 * penalty_per_pair
}
