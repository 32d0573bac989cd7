//! CSV table input and output.
//!
//! Input tables are keyed by header name, so extra columns from upstream
//! exports pass through harmlessly. Output filenames follow the reporting
//! pipeline's conventions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::blockade::BlockadeSequence;
use crate::centrality::BetweennessTables;
use crate::compare::{ComparisonReport, EventPoint};
use crate::criticality::CriticalityRow;
use crate::error::Result;
use crate::graph::{RoadEdge, RoadNode};

/// Read the node table: `id,name,lat,lon`.
pub fn read_nodes(path: &Path) -> Result<Vec<RoadNode>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut nodes = Vec::new();
    for row in reader.deserialize() {
        let node: RoadNode = row?;
        nodes.push(node);
    }
    Ok(nodes)
}

/// Read the edge table: `from_id,to_id,weight_km`.
pub fn read_edges(path: &Path) -> Result<Vec<RoadEdge>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut edges = Vec::new();
    for row in reader.deserialize() {
        let edge: RoadEdge = row?;
        edges.push(edge);
    }
    Ok(edges)
}

#[derive(Debug, Deserialize)]
struct EventRow {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Read the event table; rows missing coordinates are skipped.
///
/// Coordinates are excluded upstream by contract; the skip guards against
/// partial exports instead of failing the whole run.
pub fn read_events(path: &Path) -> Result<Vec<EventPoint>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut events = Vec::new();
    let mut skipped = 0usize;
    for row in reader.deserialize() {
        let row: EventRow = row?;
        match (row.lat, row.lon) {
            (Some(lat), Some(lon)) => events.push(EventPoint { lat, lon }),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} events without coordinates");
    }
    Ok(events)
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the full analysis output set into `dir`, creating it if needed.
pub fn write_outputs(
    dir: &Path,
    betweenness: &BetweennessTables,
    criticality: &[CriticalityRow],
    blockade: &BlockadeSequence,
    comparison: Option<&ComparisonReport>,
) -> Result<()> {
    fs::create_dir_all(dir)?;
    write_csv(&dir.join("betweenness.csv"), &betweenness.nodes)?;
    write_csv(&dir.join("edge_betweenness.csv"), &betweenness.edges)?;
    write_csv(&dir.join("node_criticality.csv"), criticality)?;
    write_csv(&dir.join("greedy_blockade.csv"), &blockade.steps)?;
    if let Some(report) = comparison {
        write_csv(&dir.join("network_vs_blockades.csv"), &report.rows)?;
        let summary = serde_json::to_string_pretty(&report.summary)?;
        fs::write(dir.join("comparison_summary.json"), summary)?;
    }
    Ok(())
}
