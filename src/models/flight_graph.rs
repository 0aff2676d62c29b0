use crate::geometry::Point;
use crate::models::{Airport, Flight};
use indexmap::IndexMap;
use petgraph::algo::connected_components;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The flights/airports graph: nodes are airports, edges are flights.
///
/// Parallel edges are allowed (several flights can share a route). Airport
/// codes map to node indices through an insertion-ordered index so graph
/// construction is reproducible for identical inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightGraph {
    graph: UnGraph<Airport, Flight>,
    airport_indices: IndexMap<String, NodeIndex>,
}

impl FlightGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            airport_indices: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn graph(&self) -> &UnGraph<Airport, Flight> {
        &self.graph
    }

    /// Add an airport node if its code is new, return its `NodeIndex`
    pub fn add_airport(&mut self, airport: Airport) -> NodeIndex {
        if let Some(&index) = self.airport_indices.get(&airport.code) {
            index
        } else {
            let code = airport.code.clone();
            let index = self.graph.add_node(airport);
            self.airport_indices.insert(code, index);
            index
        }
    }

    /// Get `NodeIndex` by airport code
    #[must_use]
    pub fn airport_index(&self, code: &str) -> Option<NodeIndex> {
        self.airport_indices.get(code).copied()
    }

    /// Get an airport by code
    #[must_use]
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airport_index(code)
            .and_then(|index| self.graph.node_weight(index))
    }

    /// Add a flight edge between its departure and arrival airports.
    ///
    /// # Errors
    ///
    /// Returns an error if either airport code is unknown.
    pub fn add_flight(&mut self, flight: Flight) -> Result<EdgeIndex, String> {
        let dep = self
            .airport_index(&flight.departure)
            .ok_or_else(|| format!("flight {}: unknown departure airport {}", flight.id, flight.departure))?;
        let arr = self
            .airport_index(&flight.arrival)
            .ok_or_else(|| format!("flight {}: unknown arrival airport {}", flight.id, flight.arrival))?;
        Ok(self.graph.add_edge(dep, arr, flight))
    }

    /// Get a flight by edge index
    #[must_use]
    pub fn flight(&self, edge: EdgeIndex) -> Option<&Flight> {
        self.graph.edge_weight(edge)
    }

    /// Projected planar coordinates of a flight's departure and arrival
    /// airports, in that order.
    #[must_use]
    pub fn flight_endpoints(&self, edge: EdgeIndex) -> Option<(Point, Point)> {
        let (dep, arr) = self.graph.edge_endpoints(edge)?;
        let dep_airport = self.graph.node_weight(dep)?;
        let arr_airport = self.graph.node_weight(arr)?;
        Some((dep_airport.position(), arr_airport.position()))
    }

    /// Flights in edge insertion order
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.graph.edge_weights()
    }

    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn flight_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Average node degree (`2E / N`), rounded to two decimals
    #[must_use]
    pub fn average_degree(&self) -> f64 {
        if self.graph.node_count() == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg = 2.0 * self.graph.edge_count() as f64 / self.graph.node_count() as f64;
        (avg * 100.0).round() / 100.0
    }

    /// Number of connected components
    #[must_use]
    pub fn connected_components(&self) -> usize {
        connected_components(&self.graph)
    }

    /// Diameter of the graph: the longest shortest path (in hops) between
    /// any two mutually reachable airports. Zero for graphs with fewer than
    /// two airports.
    #[must_use]
    pub fn diameter(&self) -> usize {
        let mut diameter = 0;
        for start in self.graph.node_indices() {
            diameter = diameter.max(self.eccentricity(start));
        }
        diameter
    }

    /// Longest shortest path from `start` to any reachable node, via BFS
    fn eccentricity(&self, start: NodeIndex) -> usize {
        let mut distances: Vec<Option<usize>> = vec![None; self.graph.node_count()];
        distances[start.index()] = Some(0);

        let mut queue = VecDeque::new();
        queue.push_back(start);

        let mut eccentricity = 0;
        while let Some(node) = queue.pop_front() {
            let dist = distances[node.index()].unwrap_or(0);
            eccentricity = eccentricity.max(dist);
            for neighbor in self.graph.neighbors(node) {
                if distances[neighbor.index()].is_none() {
                    distances[neighbor.index()] = Some(dist + 1);
                    queue.push_back(neighbor);
                }
            }
        }
        eccentricity
    }
}

impl Default for FlightGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_airport(code: &str, latitude: f64, longitude: f64) -> Airport {
        Airport::new(code, code.to_lowercase(), latitude, longitude)
    }

    #[test]
    fn test_add_airport_deduplicates_by_code() {
        let mut graph = FlightGraph::new();
        let first = graph.add_airport(test_airport("MRS", 43.0, 5.0));
        let second = graph.add_airport(test_airport("MRS", 43.0, 5.0));
        assert_eq!(first, second);
        assert_eq!(graph.airport_count(), 1);
    }

    #[test]
    fn test_add_flight_resolves_codes() {
        let mut graph = FlightGraph::new();
        graph.add_airport(test_airport("MRS", 43.0, 5.0));
        graph.add_airport(test_airport("LYS", 45.0, 5.0));
        let edge = graph
            .add_flight(Flight::new("F1", "MRS", "LYS", 480.0, 60))
            .expect("airports exist");
        assert_eq!(graph.flight_count(), 1);
        assert_eq!(graph.flight(edge).map(|f| f.id.as_str()), Some("F1"));
    }

    #[test]
    fn test_add_flight_unknown_airport_fails() {
        let mut graph = FlightGraph::new();
        graph.add_airport(test_airport("MRS", 43.0, 5.0));
        let result = graph.add_flight(Flight::new("F1", "MRS", "ZZZ", 480.0, 60));
        assert!(result.is_err());
    }

    #[test]
    fn test_parallel_flights_allowed() {
        let mut graph = FlightGraph::new();
        graph.add_airport(test_airport("MRS", 43.0, 5.0));
        graph.add_airport(test_airport("LYS", 45.0, 5.0));
        graph.add_flight(Flight::new("F1", "MRS", "LYS", 480.0, 60)).expect("valid");
        graph.add_flight(Flight::new("F2", "MRS", "LYS", 600.0, 60)).expect("valid");
        assert_eq!(graph.flight_count(), 2);
        assert_eq!(graph.airport_count(), 2);
    }

    #[test]
    fn test_flight_endpoints_order_is_departure_arrival() {
        let mut graph = FlightGraph::new();
        graph.add_airport(test_airport("AAA", 0.0, 0.0));
        graph.add_airport(test_airport("BBB", 0.0, 90.0));
        let edge = graph
            .add_flight(Flight::new("F1", "AAA", "BBB", 0.0, 60))
            .expect("valid");

        let (dep, arr) = graph.flight_endpoints(edge).expect("endpoints");
        assert_eq!(dep, graph.airport("AAA").expect("exists").position());
        assert_eq!(arr, graph.airport("BBB").expect("exists").position());
    }

    #[test]
    fn test_average_degree() {
        let mut graph = FlightGraph::new();
        assert_eq!(graph.average_degree(), 0.0);

        graph.add_airport(test_airport("AAA", 0.0, 0.0));
        graph.add_airport(test_airport("BBB", 0.0, 10.0));
        graph.add_airport(test_airport("CCC", 10.0, 0.0));
        graph.add_flight(Flight::new("F1", "AAA", "BBB", 0.0, 60)).expect("valid");
        graph.add_flight(Flight::new("F2", "BBB", "CCC", 0.0, 60)).expect("valid");
        assert_eq!(graph.average_degree(), 1.33);
    }

    #[test]
    fn test_connected_components_and_diameter() {
        let mut graph = FlightGraph::new();
        graph.add_airport(test_airport("AAA", 0.0, 0.0));
        graph.add_airport(test_airport("BBB", 0.0, 10.0));
        graph.add_airport(test_airport("CCC", 10.0, 0.0));
        graph.add_airport(test_airport("DDD", 10.0, 10.0));
        graph.add_flight(Flight::new("F1", "AAA", "BBB", 0.0, 60)).expect("valid");
        graph.add_flight(Flight::new("F2", "BBB", "CCC", 0.0, 60)).expect("valid");

        assert_eq!(graph.connected_components(), 2);
        assert_eq!(graph.diameter(), 2);
    }
}
