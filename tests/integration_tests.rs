//! End-to-end scenarios over the public API: hand-verifiable fixtures plus
//! a full run on the built-in federal highway network.

use std::collections::HashMap;

use barricada::config::AnalysisConfig;
use barricada::graph::{RoadEdge, RoadGraph, RoadNode};
use barricada::{
    betweenness, compare_rankings, greedy_blockade, match_events, network, node_criticality,
    score, EventPoint, Termination,
};

fn node(id: &str, lat: f64, lon: f64) -> RoadNode {
    RoadNode {
        id: id.to_string(),
        name: format!("{id} City"),
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

fn test_config() -> AnalysisConfig {
    AnalysisConfig {
        permutations: 200,
        ..AnalysisConfig::default()
    }
}

/// Scenario A: a 4-node cycle, all weights 10. Removing any node leaves a
/// 3-node path with distances 10, 10, 20, so the reachable ordered-pair
/// cost drops from 160 to 80 for every candidate.
#[test]
fn scenario_a_cycle_graph() {
    let graph = RoadGraph::build(
        vec![
            node("A", 0.0, 0.0),
            node("B", 0.0, 1.0),
            node("C", 1.0, 1.0),
            node("D", 1.0, 0.0),
        ],
        &[
            edge("A", "B", 10.0),
            edge("B", "C", 10.0),
            edge("C", "D", 10.0),
            edge("D", "A", 10.0),
        ],
    )
    .unwrap();

    assert_eq!(score::reachable_pair_cost(&graph), 160.0);

    let rows = node_criticality(&graph, &test_config());
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert!(row.connected);
        assert_eq!(row.n_components, 1);
        assert_eq!(row.effective_increase, 80.0 - 160.0);
        assert_eq!(row.delta_pct, Some(-50.0));
    }
}

/// Scenario B: two triangles joined by one bridge edge. Removing a bridge
/// endpoint splits the remainder into components of sizes 2 and 3.
#[test]
fn scenario_b_bridge_graph() {
    let graph = RoadGraph::build(
        vec![
            node("A", 0.0, 0.0),
            node("B", 0.0, 1.0),
            node("C", 0.0, 2.0),
            node("D", 0.0, 4.0),
            node("E", 0.0, 5.0),
            node("F", 0.0, 6.0),
        ],
        &[
            edge("A", "B", 1.0),
            edge("B", "C", 1.0),
            edge("C", "A", 1.0),
            edge("D", "E", 1.0),
            edge("E", "F", 1.0),
            edge("F", "D", 1.0),
            edge("C", "D", 1.0),
        ],
    )
    .unwrap();

    let rows = node_criticality(&graph, &test_config());
    let bridge = rows.iter().find(|r| r.node == "C").unwrap();
    assert!(!bridge.connected);
    assert_eq!(bridge.n_components, 2);
    // components {A,B} and {D,E,F}: 8 of the 5*4 ordered pairs survive
    assert!((bridge.disruption_ratio - 0.6).abs() < 1e-12);

    // the greedy solver goes for a bridge endpoint first; C and D tie and
    // canonical order resolves it
    let sequence = greedy_blockade(&graph, &test_config());
    assert_eq!(sequence.steps[0].node, "C");
}

/// Scenario C: events placed exactly on two node coordinates match those
/// nodes with count 1 each; every other node stays unmatched.
#[test]
fn scenario_c_events_on_node_coordinates() {
    let (nodes, edges) = network::mexico_federal_highways();
    let graph = RoadGraph::build(nodes, &edges).unwrap();

    let cdmx = graph.node("CDMX").unwrap();
    let gdl = graph.node("GDL").unwrap();
    let events = vec![
        EventPoint {
            lat: cdmx.lat,
            lon: cdmx.lon,
        },
        EventPoint {
            lat: gdl.lat,
            lon: gdl.lon,
        },
    ];

    let counts = match_events(&events, &graph);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get("CDMX"), Some(&1));
    assert_eq!(counts.get("GDL"), Some(&1));

    let tables = betweenness(&graph);
    let report = compare_rankings(&tables.nodes, &counts, &test_config());
    let unmatched = report
        .rows
        .iter()
        .filter(|r| r.blockade_count == 0)
        .count();
    assert_eq!(unmatched, graph.node_count() - 2);
}

#[test]
fn federal_highway_network_end_to_end() {
    let (nodes, edges) = network::mexico_federal_highways();
    let graph = RoadGraph::build(nodes, &edges).unwrap();
    assert_eq!(graph.node_count(), 78);
    assert_eq!(graph.edge_count(), 108);
    assert!(graph.is_connected());

    // integer weights make the ordered-pair sum exact in f64
    assert_eq!(score::reachable_pair_cost(&graph), 7_832_976.0);

    let tables = betweenness(&graph);
    assert_eq!(tables.nodes.len(), 78);
    assert_eq!(tables.edges.len(), 108);
    for pair in tables.nodes.windows(2) {
        assert!(pair[0].betweenness >= pair[1].betweenness);
    }
    for row in &tables.nodes {
        assert!((0.0..=1.0).contains(&row.betweenness));
    }

    let config = AnalysisConfig {
        steps: 3,
        permutations: 200,
        ..AnalysisConfig::default()
    };
    let criticality = node_criticality(&graph, &config);
    assert_eq!(criticality.len(), 78);
    for pair in criticality.windows(2) {
        assert!(pair[0].effective_increase >= pair[1].effective_increase);
    }

    let sequence = greedy_blockade(&graph, &config);
    assert_eq!(sequence.steps.len(), 3);
    assert_eq!(sequence.termination, Termination::BudgetExhausted);
    for pair in sequence.steps.windows(2) {
        assert!(pair[1].cumulative_pct >= pair[0].cumulative_pct);
        assert_ne!(pair[0].node, pair[1].node);
    }
    // every committed removal must degrade the network
    for step in &sequence.steps {
        assert!(step.step_impact_pct > 0.0);
    }
}

#[test]
fn analysis_outputs_round_trip_through_disk() {
    let (nodes, edges) = network::mexico_federal_highways();
    let graph = RoadGraph::build(nodes, &edges).unwrap();
    let config = AnalysisConfig {
        steps: 2,
        permutations: 100,
        ..AnalysisConfig::default()
    };

    let tables = betweenness(&graph);
    let criticality = node_criticality(&graph, &config);
    let sequence = greedy_blockade(&graph, &config);
    let mut counts = HashMap::new();
    counts.insert("CDMX".to_string(), 4u32);
    counts.insert("GDL".to_string(), 2u32);
    let report = compare_rankings(&tables.nodes, &counts, &config);

    let dir = tempfile::tempdir().unwrap();
    barricada::io::write_outputs(dir.path(), &tables, &criticality, &sequence, Some(&report))
        .unwrap();

    for name in [
        "betweenness.csv",
        "edge_betweenness.csv",
        "node_criticality.csv",
        "greedy_blockade.csv",
        "network_vs_blockades.csv",
        "comparison_summary.json",
    ] {
        assert!(dir.path().join(name).exists(), "missing output {name}");
    }

    let betweenness_csv = std::fs::read_to_string(dir.path().join("betweenness.csv")).unwrap();
    assert_eq!(betweenness_csv.lines().count(), 78 + 1);
    assert!(betweenness_csv.starts_with("node,name,lat,lon,betweenness"));

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("comparison_summary.json")).unwrap())
            .unwrap();
    assert_eq!(summary["top_k"], 15);
    assert!(summary["spearman_rho"].is_number());
}
