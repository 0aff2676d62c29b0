use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Read-only adjacency snapshot of an undirected graph.
///
/// Gives the colorers O(1) degree lookup and O(degree) neighbor iteration
/// over stable 0-based node indices. Neighbor lists follow the order edges
/// are encountered when scanning the source graph, which is reproducible
/// but not sorted. Never mutated by the colorers.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Capture the adjacency of any undirected petgraph graph
    #[must_use]
    pub fn from_graph<N, E>(graph: &UnGraph<N, E>) -> Self {
        let mut neighbors = vec![Vec::new(); graph.node_count()];
        for edge in graph.edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
        Self { neighbors }
    }

    /// Build directly from an edge list over `node_count` nodes (synthetic
    /// test graphs)
    #[must_use]
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut neighbors = vec![Vec::new(); node_count];
        for &(a, b) in edges {
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
        Self { neighbors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }
}
