use crate::geometry::Point;
use crate::models::Flight;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// The conflict graph: nodes are flights, edges are detected conflicts
/// carrying the intersection point as edge metadata.
///
/// Node order follows the flight order of the source graph, so node index
/// `i` is the `i`-th flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictGraph {
    graph: UnGraph<Flight, Point>,
}

impl ConflictGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
        }
    }

    #[must_use]
    pub fn graph(&self) -> &UnGraph<Flight, Point> {
        &self.graph
    }

    /// Add a flight node, returning its index
    pub fn add_flight(&mut self, flight: Flight) -> NodeIndex {
        self.graph.add_node(flight)
    }

    /// Record a conflict between two flight nodes with its intersection point
    pub fn add_conflict(
        &mut self,
        flight1: NodeIndex,
        flight2: NodeIndex,
        intersection: Point,
    ) -> EdgeIndex {
        self.graph.add_edge(flight1, flight2, intersection)
    }

    #[must_use]
    pub fn flight_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Flights in node-index order
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.graph.node_weights()
    }

    /// Detected conflicts as `(flight1, flight2, intersection)` triples, in
    /// edge insertion order
    pub fn conflicts(&self) -> impl Iterator<Item = (&Flight, &Flight, &Point)> {
        self.graph.edge_references().map(|edge| {
            let f1 = &self.graph[edge.source()];
            let f2 = &self.graph[edge.target()];
            (f1, f2, edge.weight())
        })
    }

    /// Paint a color assignment back onto the flight nodes as layers.
    ///
    /// Unassigned colors (`-1`) clear the layer.
    pub fn apply_layers(&mut self, colors: &[i32]) {
        for index in self.graph.node_indices() {
            let layer = match colors.get(index.index()) {
                Some(&color) if color >= 0 => {
                    #[allow(clippy::cast_sign_loss)]
                    let layer = color as usize;
                    Some(layer)
                }
                _ => None,
            };
            if let Some(flight) = self.graph.node_weight_mut(index) {
                flight.layer = layer;
            }
        }
    }
}

impl Default for ConflictGraph {
    fn default() -> Self {
        Self::new()
    }
}
