//! Node and edge betweenness centrality.
//!
//! Brandes' algorithm with a Dijkstra inner loop on the weighted graph.
//! Ties in shortest-path length are split evenly across all minimum-length
//! paths via predecessor sets and path counts. Computed once on the full,
//! undisturbed graph; results are deterministic and bit-identical across
//! runs.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::graph::RoadGraph;

/// One row of the node betweenness ranking.
#[derive(Debug, Clone, Serialize)]
pub struct NodeBetweennessRow {
    pub node: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub betweenness: f64,
}

/// One row of the edge betweenness ranking.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeBetweennessRow {
    pub from: String,
    pub to: String,
    pub from_name: String,
    pub to_name: String,
    pub weight_km: f64,
    pub edge_betweenness: f64,
}

/// Node and edge rankings, each sorted descending; ties keep input order.
#[derive(Debug, Clone)]
pub struct BetweennessTables {
    pub nodes: Vec<NodeBetweennessRow>,
    pub edges: Vec<EdgeBetweennessRow>,
}

/// Priority-queue entry; reversed ordering turns the max-heap into a
/// min-heap on distance.
#[derive(Debug, Clone, Copy)]
struct QueueState {
    dist: f64,
    node: NodeIndex,
}

impl PartialEq for QueueState {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for QueueState {}

impl PartialOrd for QueueState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueState {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
    }
}

/// Weighted node and edge betweenness of the full graph.
///
/// Normalization follows the standard undirected conventions:
/// `1/((n-1)(n-2))` for nodes and `1/(n(n-1))` for edges, applied to the
/// both-directions accumulation.
pub fn betweenness(graph: &RoadGraph) -> BetweennessTables {
    let g = graph.inner();
    let n = g.node_count();
    // arena slots are dense on the full graph; index() stays below this
    let bound = g
        .node_indices()
        .map(|ix| ix.index() + 1)
        .max()
        .unwrap_or(0);

    let mut node_raw = vec![0.0f64; bound];
    let mut edge_raw: HashMap<EdgeIndex, f64> =
        g.edge_indices().map(|ix| (ix, 0.0)).collect();

    for source in g.node_indices() {
        // Dijkstra with shortest-path counting
        let mut dist = vec![f64::INFINITY; bound];
        let mut sigma = vec![0.0f64; bound];
        let mut settled = vec![false; bound];
        let mut preds: Vec<Vec<(NodeIndex, EdgeIndex)>> = vec![Vec::new(); bound];
        let mut order: Vec<NodeIndex> = Vec::with_capacity(n);
        let mut heap = BinaryHeap::new();

        dist[source.index()] = 0.0;
        sigma[source.index()] = 1.0;
        heap.push(QueueState {
            dist: 0.0,
            node: source,
        });

        while let Some(QueueState { dist: d, node: u }) = heap.pop() {
            if settled[u.index()] {
                continue;
            }
            settled[u.index()] = true;
            order.push(u);

            for edge in g.edges(u) {
                let v = if edge.source() == u {
                    edge.target()
                } else {
                    edge.source()
                };
                let next = d + *edge.weight();
                if next < dist[v.index()] {
                    dist[v.index()] = next;
                    sigma[v.index()] = sigma[u.index()];
                    preds[v.index()].clear();
                    preds[v.index()].push((u, edge.id()));
                    heap.push(QueueState {
                        dist: next,
                        node: v,
                    });
                } else if next == dist[v.index()] && !settled[v.index()] {
                    sigma[v.index()] += sigma[u.index()];
                    preds[v.index()].push((u, edge.id()));
                }
            }
        }

        // dependency accumulation in reverse settling order
        let mut delta = vec![0.0f64; bound];
        for &w in order.iter().rev() {
            for &(v, eid) in &preds[w.index()] {
                let share = sigma[v.index()] / sigma[w.index()] * (1.0 + delta[w.index()]);
                if let Some(value) = edge_raw.get_mut(&eid) {
                    *value += share;
                }
                delta[v.index()] += share;
            }
            if w != source {
                node_raw[w.index()] += delta[w.index()];
            }
        }
    }

    let node_scale = if n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        0.0
    };
    let edge_scale = if n > 1 {
        1.0 / (n as f64 * (n - 1) as f64)
    } else {
        0.0
    };

    let mut nodes: Vec<NodeBetweennessRow> = g
        .node_indices()
        .map(|ix| {
            let rec = graph.record(ix);
            NodeBetweennessRow {
                node: rec.id.clone(),
                name: rec.name.clone(),
                lat: rec.lat,
                lon: rec.lon,
                betweenness: node_raw[ix.index()] * node_scale,
            }
        })
        .collect();
    nodes.sort_by(|a, b| {
        b.betweenness
            .partial_cmp(&a.betweenness)
            .unwrap_or(Ordering::Equal)
    });

    let mut edges: Vec<EdgeBetweennessRow> = g
        .edge_indices()
        .filter_map(|eid| {
            let (a, b) = g.edge_endpoints(eid)?;
            let from = graph.record(a);
            let to = graph.record(b);
            Some(EdgeBetweennessRow {
                from: from.id.clone(),
                to: to.id.clone(),
                from_name: from.name.clone(),
                to_name: to.name.clone(),
                weight_km: *g.edge_weight(eid)?,
                edge_betweenness: edge_raw.get(&eid).copied().unwrap_or(0.0) * edge_scale,
            })
        })
        .collect();
    edges.sort_by(|a, b| {
        b.edge_betweenness
            .partial_cmp(&a.edge_betweenness)
            .unwrap_or(Ordering::Equal)
    });

    BetweennessTables { nodes, edges }
}
