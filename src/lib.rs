#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod coloring;
pub mod conflict;
pub mod constants;
pub mod data;
pub mod geometry;
pub mod logging;
pub mod models;
pub mod time;

use coloring::{color_graph, AdjacencyList, Algorithm, Coloring, OverflowPolicy};
use conflict::{build_conflict_graph, ConflictGraph};
use models::FlightGraph;
use rand::Rng;

/// Assign non-conflicting layers to every flight in the graph.
///
/// Builds the conflict graph from the flight graph, colors it with at most
/// `k_max` colors using the chosen algorithm, and paints the resulting
/// layers back onto the conflict-graph nodes.
///
/// # Errors
///
/// Returns an error if `k_max` is zero or the conflict graph has no nodes.
pub fn assign_layers<R: Rng>(
    flights: &FlightGraph,
    k_max: usize,
    safety_margin: f64,
    algorithm: Algorithm,
    policy: OverflowPolicy,
    rng: &mut R,
) -> Result<(ConflictGraph, Coloring), String> {
    let mut conflict_graph = build_conflict_graph(flights, safety_margin);
    let view = AdjacencyList::from_graph(conflict_graph.graph());
    let coloring = color_graph(&view, k_max, algorithm, policy, rng)?;
    conflict_graph.apply_layers(coloring.colors());
    Ok((conflict_graph, coloring))
}
