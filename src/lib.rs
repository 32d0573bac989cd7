//! Road network disruption analysis.
//!
//! Models a road system as a weighted undirected graph and quantifies how
//! much each node and edge matters to overall connectivity: betweenness
//! centrality, single-node removal impact, a greedy "optimal blockade"
//! removal sequence, and a statistical comparison of that counterfactual
//! against observed blockade events.

pub mod blockade;
pub mod centrality;
pub mod compare;
pub mod config;
pub mod criticality;
pub mod error;
pub mod geo;
pub mod graph;
pub mod io;
pub mod network;
pub mod score;
pub mod stats;

pub use blockade::{greedy_blockade, BlockadeSequence, BlockadeStep, Termination};
pub use centrality::{betweenness, BetweennessTables};
pub use compare::{compare_rankings, match_events, ComparisonReport, EventPoint};
pub use config::AnalysisConfig;
pub use criticality::{node_criticality, CriticalityRow};
pub use error::{Error, Result};
pub use graph::{RoadEdge, RoadGraph, RoadNode};
pub use score::{connectivity_score, reachable_pair_cost};
