//! Conflict detection between straight-line flights.
//!
//! Every unordered flight pair is projected, intersected, classified, and
//! checked against the safety margin; positive pairs become edges of the
//! conflict graph.

mod graph;
mod types;

pub use graph::ConflictGraph;
pub use types::RouteRelation;

#[allow(unused_imports)]
use crate::logging::log;

use crate::geometry::{intersection_point, Point};
use crate::models::{Flight, FlightGraph};

/// Simulated time of passage through `intersection`, in minutes since
/// midnight, assuming constant speed along the straight path `dep`–`arr`.
///
/// A zero-duration flight has infinite average speed, so its passage time
/// is exactly its departure time. A zero-length path makes the speed zero
/// and the passage time `0/0 = NaN`; the NaN is propagated, not trapped.
#[must_use]
pub fn time_at_intersection(flight: &Flight, dep: Point, arr: Point, intersection: &Point) -> f64 {
    let path_length = dep.distance_to(&arr);
    let average_speed = path_length / f64::from(flight.duration_minutes);
    let distance = dep.distance_to(intersection);
    flight.departure_minutes + distance / average_speed
}

/// The temporal gap relevant to the pair's route relation, in minutes.
///
/// For [`RouteRelation::ReverseRoute`] the gap is signed: the time from the
/// earlier flight's arrival to the later flight's departure, negative when
/// the two flights overlap in the air.
#[must_use]
pub fn collision_time_delta(
    relation: RouteRelation,
    flight1: &Flight,
    path1: (Point, Point),
    flight2: &Flight,
    path2: (Point, Point),
    intersection: &Point,
) -> f64 {
    let dep1 = flight1.departure_minutes;
    let dep2 = flight2.departure_minutes;
    let arr1 = flight1.arrival_minutes();
    let arr2 = flight2.arrival_minutes();

    match relation {
        RouteRelation::SharedDeparture => (dep1 - dep2).abs(),
        RouteRelation::SharedArrival => (arr1 - arr2).abs(),
        RouteRelation::ReverseRoute => {
            if dep1 < dep2 {
                dep2 - arr1
            } else {
                dep1 - arr2
            }
        }
        RouteRelation::DepartureMeetsArrival => (arr2 - dep1).abs(),
        RouteRelation::ArrivalMeetsDeparture => (arr1 - dep2).abs(),
        RouteRelation::Crossing => {
            let time1 = time_at_intersection(flight1, path1.0, path1.1, intersection);
            let time2 = time_at_intersection(flight2, path2.0, path2.1, intersection);
            (time1 - time2).abs()
        }
    }
}

/// Decide whether a classified pair collides: the temporal gap is strictly
/// below the safety margin.
///
/// A NaN gap (degenerate geometry, zero-length paths) compares false and is
/// silently treated as "no conflict".
#[must_use]
pub fn has_collision(
    relation: RouteRelation,
    flight1: &Flight,
    path1: (Point, Point),
    flight2: &Flight,
    path2: (Point, Point),
    intersection: &Point,
    safety_margin: f64,
) -> bool {
    collision_time_delta(relation, flight1, path1, flight2, path2, intersection) < safety_margin
}

/// Build the conflict graph over all flights of the input graph.
///
/// Pairs are visited with the first flight index ascending, then the second,
/// so edge insertion order is reproducible for identical inputs. O(E²) in
/// the number of flights; no spatial indexing at this scale.
#[must_use]
pub fn build_conflict_graph(flights: &FlightGraph, safety_margin: f64) -> ConflictGraph {
    let mut conflict_graph = ConflictGraph::new();

    let edges: Vec<_> = flights.graph().edge_indices().collect();
    let nodes: Vec<_> = edges
        .iter()
        .filter_map(|&edge| {
            let flight = flights.flight(edge)?;
            Some(conflict_graph.add_flight(flight.clone()))
        })
        .collect();

    for (ii, &edge1) in edges.iter().enumerate() {
        for (jj, &edge2) in edges.iter().enumerate().skip(ii + 1) {
            let (Some(flight1), Some(flight2)) = (flights.flight(edge1), flights.flight(edge2))
            else {
                continue;
            };
            let (Some(path1), Some(path2)) = (
                flights.flight_endpoints(edge1),
                flights.flight_endpoints(edge2),
            ) else {
                continue;
            };

            let intersection = intersection_point(path1.0, path1.1, path2.0, path2.1);
            let Some(relation) = RouteRelation::classify(flight1, flight2, &intersection) else {
                continue;
            };

            if has_collision(relation, flight1, path1, flight2, path2, &intersection, safety_margin) {
                conflict_graph.add_conflict(nodes[ii], nodes[jj], intersection);
            }
        }
    }

    log!(
        "Built conflict graph: {} flights, {} conflicts (margin {} min)",
        conflict_graph.flight_count(),
        conflict_graph.conflict_count(),
        safety_margin
    );

    conflict_graph
}
