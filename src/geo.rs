//! Geographic helpers.
//!
//! Distances are planar over raw lat/lon degrees. At regional scale that
//! approximates geodesic distance closely enough for nearest-node
//! assignment, and it is the same metric the matcher's R-tree uses.

use crate::graph::RoadNode;

/// Planar distance between two lat/lon coordinates, in degrees.
pub fn planar_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = lat1 - lat2;
    let dlon = lon1 - lon2;
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Linear scan for the nearest node - O(n).
///
/// The matcher uses the R-tree index in `compare` for bulk snapping; this
/// keeps the metric in one place and suffices for tiny graphs.
pub fn nearest_node<'a, I>(lat: f64, lon: f64, nodes: I) -> Option<&'a RoadNode>
where
    I: IntoIterator<Item = &'a RoadNode>,
{
    nodes.into_iter().min_by(|a, b| {
        let da = planar_distance(lat, lon, a.lat, a.lon);
        let db = planar_distance(lat, lon, b.lat, b.lon);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, lat: f64, lon: f64) -> RoadNode {
        RoadNode {
            id: id.to_string(),
            name: id.to_string(),
            lat,
            lon,
        }
    }

    #[test]
    fn planar_distance_is_euclidean_in_degrees() {
        assert_eq!(planar_distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(planar_distance(19.43, -99.13, 19.43, -99.13), 0.0);
    }

    #[test]
    fn nearest_node_picks_the_closest() {
        let nodes = vec![node("A", 0.0, 0.0), node("B", 10.0, 10.0)];
        let hit = nearest_node(1.0, 1.0, &nodes).unwrap();
        assert_eq!(hit.id, "A");
        assert!(nearest_node(0.0, 0.0, std::iter::empty()).is_none());
    }
}
