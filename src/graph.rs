//! Weighted undirected road graph with snapshot semantics.
//!
//! Node records live in a fixed arena (`records`); the petgraph structure
//! stores each record's arena slot as its node weight. `StableGraph` keeps
//! indices valid across removals, so canonical (input) order survives
//! snapshotting and every downstream tie-break stays deterministic.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A geocoded network node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadNode {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A route segment between two nodes, weighted by physical distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadEdge {
    pub from_id: String,
    pub to_id: String,
    pub weight_km: f64,
}

/// Weighted undirected road network.
///
/// Built once from validated node/edge tables; analyses that simulate
/// removals work on [`RoadGraph::without`] snapshots and never mutate the
/// canonical graph.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    graph: StableUnGraph<usize, f64>,
    records: Vec<RoadNode>,
    node_map: HashMap<String, NodeIndex>,
}

impl RoadGraph {
    /// Build a graph from node and edge tables.
    ///
    /// Rejects duplicate node ids, edges referencing unknown nodes,
    /// non-positive or non-finite weights, self-loops, and parallel edges.
    pub fn build(nodes: Vec<RoadNode>, edges: &[RoadEdge]) -> Result<Self> {
        let mut graph = StableUnGraph::<usize, f64>::with_capacity(nodes.len(), edges.len());
        let mut node_map = HashMap::with_capacity(nodes.len());

        for (slot, node) in nodes.iter().enumerate() {
            let ix = graph.add_node(slot);
            if node_map.insert(node.id.clone(), ix).is_some() {
                return Err(Error::DuplicateNode(node.id.clone()));
            }
        }

        for edge in edges {
            let a = *node_map
                .get(&edge.from_id)
                .ok_or_else(|| Error::UnknownNode {
                    from: edge.from_id.clone(),
                    to: edge.to_id.clone(),
                    node: edge.from_id.clone(),
                })?;
            let b = *node_map.get(&edge.to_id).ok_or_else(|| Error::UnknownNode {
                from: edge.from_id.clone(),
                to: edge.to_id.clone(),
                node: edge.to_id.clone(),
            })?;
            if !edge.weight_km.is_finite() || edge.weight_km <= 0.0 {
                return Err(Error::InvalidWeight {
                    from: edge.from_id.clone(),
                    to: edge.to_id.clone(),
                    weight: edge.weight_km,
                });
            }
            if a == b {
                return Err(Error::SelfLoop(edge.from_id.clone()));
            }
            if graph.find_edge(a, b).is_some() {
                return Err(Error::DuplicateEdge {
                    from: edge.from_id.clone(),
                    to: edge.to_id.clone(),
                });
            }
            graph.add_edge(a, b, edge.weight_km);
        }

        Ok(Self {
            graph,
            records: nodes,
            node_map,
        })
    }

    /// Number of surviving nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of surviving edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Surviving nodes in canonical (input) order.
    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> + '_ {
        self.graph
            .node_indices()
            .map(move |ix| &self.records[self.graph[ix]])
    }

    /// Surviving node ids in canonical (input) order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes().map(|node| node.id.as_str())
    }

    /// Surviving edges with endpoint records resolved, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&RoadNode, &RoadNode, f64)> + '_ {
        self.graph.edge_indices().filter_map(move |eid| {
            let (a, b) = self.graph.edge_endpoints(eid)?;
            let weight = *self.graph.edge_weight(eid)?;
            Some((
                &self.records[self.graph[a]],
                &self.records[self.graph[b]],
                weight,
            ))
        })
    }

    /// Whether `id` is still present in this snapshot.
    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Record for a surviving node.
    pub fn node(&self, id: &str) -> Option<&RoadNode> {
        self.node_map
            .get(id)
            .map(|&ix| &self.records[self.graph[ix]])
    }

    /// Number of surviving neighbors of a node.
    pub fn degree(&self, id: &str) -> Option<usize> {
        self.node_map
            .get(id)
            .map(|&ix| self.graph.neighbors(ix).count())
    }

    /// New snapshot with the given nodes and their incident edges removed.
    /// The original graph is untouched; unknown ids are ignored.
    pub fn without<I, S>(&self, ids: I) -> RoadGraph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut snapshot = self.clone();
        for id in ids {
            if let Some(ix) = snapshot.node_map.remove(id.as_ref()) {
                snapshot.graph.remove_node(ix);
            }
        }
        snapshot
    }

    /// Sizes of the connected components among surviving nodes, largest
    /// first.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sets = UnionFind::<usize>::new(self.records.len());
        for eid in self.graph.edge_indices() {
            if let Some((a, b)) = self.graph.edge_endpoints(eid) {
                sets.union(a.index(), b.index());
            }
        }
        let mut sizes: HashMap<usize, usize> = HashMap::new();
        for ix in self.graph.node_indices() {
            *sizes.entry(sets.find(ix.index())).or_insert(0) += 1;
        }
        let mut sizes: Vec<usize> = sizes.into_values().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// True when every surviving node can reach every other surviving node.
    /// Empty and single-node graphs count as connected.
    pub fn is_connected(&self) -> bool {
        self.component_sizes().len() <= 1
    }

    pub(crate) fn inner(&self) -> &StableUnGraph<usize, f64> {
        &self.graph
    }

    pub(crate) fn record(&self, ix: NodeIndex) -> &RoadNode {
        &self.records[self.graph[ix]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> RoadNode {
        RoadNode {
            id: id.to_string(),
            name: format!("{id} City"),
            lat: 0.0,
            lon: 0.0,
        }
    }

    fn edge(from: &str, to: &str, km: f64) -> RoadEdge {
        RoadEdge {
            from_id: from.to_string(),
            to_id: to.to_string(),
            weight_km: km,
        }
    }

    fn path_graph() -> RoadGraph {
        RoadGraph::build(
            vec![node("A"), node("B"), node("C")],
            &[edge("A", "B", 1.0), edge("B", "C", 2.0)],
        )
        .unwrap()
    }

    #[test]
    fn builds_and_enumerates_in_input_order() {
        let g = path_graph();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        let ids: Vec<&str> = g.node_ids().collect();
        assert_eq!(ids, ["A", "B", "C"]);
        assert_eq!(g.degree("B"), Some(2));
        assert_eq!(g.degree("C"), Some(1));
        assert_eq!(g.node("B").unwrap().name, "B City");
    }

    #[test]
    fn rejects_malformed_input() {
        let dup = RoadGraph::build(vec![node("A"), node("A")], &[]);
        assert!(matches!(dup, Err(Error::DuplicateNode(_))));

        let unknown = RoadGraph::build(vec![node("A")], &[edge("A", "Z", 1.0)]);
        assert!(matches!(unknown, Err(Error::UnknownNode { .. })));

        let weight = RoadGraph::build(vec![node("A"), node("B")], &[edge("A", "B", 0.0)]);
        assert!(matches!(weight, Err(Error::InvalidWeight { .. })));

        let nan = RoadGraph::build(vec![node("A"), node("B")], &[edge("A", "B", f64::NAN)]);
        assert!(matches!(nan, Err(Error::InvalidWeight { .. })));

        let loops = RoadGraph::build(vec![node("A")], &[edge("A", "A", 1.0)]);
        assert!(matches!(loops, Err(Error::SelfLoop(_))));

        let twice = RoadGraph::build(
            vec![node("A"), node("B")],
            &[edge("A", "B", 1.0), edge("B", "A", 2.0)],
        );
        assert!(matches!(twice, Err(Error::DuplicateEdge { .. })));
    }

    #[test]
    fn without_leaves_the_original_untouched() {
        let g = path_graph();
        let snapshot = g.without(["B"]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(snapshot.node_count(), 2);
        assert_eq!(snapshot.edge_count(), 0);
        assert!(!snapshot.contains("B"));
        let ids: Vec<&str> = snapshot.node_ids().collect();
        assert_eq!(ids, ["A", "C"]);
    }

    #[test]
    fn connectivity_and_components() {
        let g = path_graph();
        assert!(g.is_connected());
        assert_eq!(g.component_sizes(), [3]);

        let split = g.without(["B"]);
        assert!(!split.is_connected());
        assert_eq!(split.component_sizes(), [1, 1]);

        assert!(g.without(["A", "B", "C"]).is_connected());
        assert!(g.without(["A", "C"]).is_connected());
    }
}
