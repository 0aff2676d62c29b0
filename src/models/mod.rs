mod airport;
mod flight;
mod flight_graph;

pub use airport::Airport;
pub use flight::Flight;
pub use flight_graph::FlightGraph;
