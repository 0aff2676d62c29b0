//! Record-file parsing for airports, flights, and synthetic test graphs.
//!
//! Airports and flights come as `;`-separated records, one per line:
//!
//! ```text
//! code;location;latDeg;latMin;latSec;N|S;lonDeg;lonMin;lonSec;E|W
//! id;depCode;arrCode;depHour;depMinute;durationMinutes
//! ```
//!
//! Test graphs for the colorers are whitespace-separated integers: `k_max`,
//! the node count, then one `a b` edge pair per line (1-based node names).

use crate::coloring::AdjacencyList;
use crate::models::{Airport, Flight, FlightGraph};
use crate::time::hours_minutes_to_minutes;
use std::path::Path;

/// Parse airport records from a `;`-separated string.
///
/// # Errors
///
/// Returns an error naming the offending line when a record is malformed.
pub fn parse_airports(content: &str) -> Result<Vec<Airport>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut airports = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("airport line {}: {e}", line + 1))?;
        airports.push(parse_airport_record(&record).map_err(|e| format!("airport line {}: {e}", line + 1))?);
    }
    Ok(airports)
}

fn parse_airport_record(record: &csv::StringRecord) -> Result<Airport, String> {
    if record.len() != 10 {
        return Err(format!("expected 10 fields, found {}", record.len()));
    }
    let field = |ii: usize| record.get(ii).unwrap_or_default();
    let int = |ii: usize| {
        field(ii)
            .parse::<u32>()
            .map_err(|_| format!("invalid integer '{}'", field(ii)))
    };
    let hemisphere = |ii: usize| {
        let mut chars = field(ii).chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(letter),
            _ => Err(format!("invalid hemisphere '{}'", field(ii))),
        }
    };

    Airport::from_dms(
        field(0),
        field(1),
        int(2)?,
        int(3)?,
        int(4)?,
        hemisphere(5)?,
        int(6)?,
        int(7)?,
        int(8)?,
        hemisphere(9)?,
    )
}

/// Parse flight records from a `;`-separated string.
///
/// # Errors
///
/// Returns an error naming the offending line when a record is malformed.
pub fn parse_flights(content: &str) -> Result<Vec<Flight>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut flights = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| format!("flight line {}: {e}", line + 1))?;
        flights.push(parse_flight_record(&record).map_err(|e| format!("flight line {}: {e}", line + 1))?);
    }
    Ok(flights)
}

fn parse_flight_record(record: &csv::StringRecord) -> Result<Flight, String> {
    if record.len() != 6 {
        return Err(format!("expected 6 fields, found {}", record.len()));
    }
    let field = |ii: usize| record.get(ii).unwrap_or_default();

    let hours: u32 = field(3)
        .parse()
        .map_err(|_| format!("invalid departure hour '{}'", field(3)))?;
    let minutes: f64 = field(4)
        .parse()
        .map_err(|_| format!("invalid departure minute '{}'", field(4)))?;
    let duration: u32 = field(5)
        .parse()
        .map_err(|_| format!("invalid duration '{}'", field(5)))?;

    Ok(Flight::new(
        field(0),
        field(1),
        field(2),
        hours_minutes_to_minutes(hours, minutes),
        duration,
    ))
}

/// Build a flights/airports graph from parsed records.
///
/// # Errors
///
/// Returns an error if a flight references an unknown airport code.
pub fn build_flight_graph(airports: Vec<Airport>, flights: Vec<Flight>) -> Result<FlightGraph, String> {
    let mut graph = FlightGraph::new();
    for airport in airports {
        graph.add_airport(airport);
    }
    for flight in flights {
        graph.add_flight(flight)?;
    }
    Ok(graph)
}

/// Load and parse an airports file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record is malformed.
pub fn load_airports(path: &Path) -> Result<Vec<Airport>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse_airports(&content)
}

/// Load and parse a flights file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a record is malformed.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse_flights(&content)
}

/// Parse a synthetic coloring test graph.
///
/// Returns the file's `k_max` and the adjacency view over its edges.
///
/// # Errors
///
/// Returns an error on malformed integers, a missing header, or an edge
/// endpoint outside `1..=node_count`.
pub fn parse_coloring_graph(content: &str) -> Result<(usize, AdjacencyList), String> {
    let mut tokens = content.split_whitespace().map(|token| {
        token
            .parse::<usize>()
            .map_err(|_| format!("invalid integer '{token}'"))
    });

    let k_max = tokens.next().ok_or("missing k_max")??;
    let node_count = tokens.next().ok_or("missing node count")??;

    let mut edges = Vec::new();
    loop {
        let Some(a) = tokens.next() else { break };
        let a = a?;
        let b = tokens.next().ok_or("dangling edge endpoint")??;
        for endpoint in [a, b] {
            if endpoint == 0 || endpoint > node_count {
                return Err(format!("edge endpoint {endpoint} out of range 1..={node_count}"));
            }
        }
        edges.push((a - 1, b - 1));
    }

    Ok((k_max, AdjacencyList::from_edges(node_count, &edges)))
}

/// Load and parse a coloring test graph file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is malformed.
pub fn load_coloring_graph(path: &Path) -> Result<(usize, AdjacencyList), String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    parse_coloring_graph(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORTS: &str = "\
MRS;Marseille;43;26;8;N;5;12;49;E
LYS;Lyon;45;43;35;N;5;5;27;E
BES;Brest;48;26;52;N;4;25;6;W
";

    const FLIGHTS: &str = "\
AF000090;MRS;LYS;7;33;21
AF000132;BES;LYS;8;0;45
";

    #[test]
    fn test_parse_airports() {
        let airports = parse_airports(AIRPORTS).expect("valid records");
        assert_eq!(airports.len(), 3);
        assert_eq!(airports[0].code, "MRS");
        assert!(airports[0].latitude > 43.0 && airports[0].latitude < 44.0);
        // Brest is west of the prime meridian
        assert!(airports[2].longitude < 0.0);
    }

    #[test]
    fn test_parse_airports_rejects_short_record() {
        assert!(parse_airports("MRS;Marseille;43;26;8;N\n").is_err());
        assert!(parse_airports("MRS;Marseille;43;xx;8;N;5;12;49;E\n").is_err());
    }

    #[test]
    fn test_parse_flights() {
        let flights = parse_flights(FLIGHTS).expect("valid records");
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0].id, "AF000090");
        assert_eq!(flights[0].departure, "MRS");
        assert_eq!(flights[0].departure_minutes, 7.0 * 60.0 + 33.0);
        assert_eq!(flights[0].duration_minutes, 21);
    }

    #[test]
    fn test_parse_flights_rejects_bad_duration() {
        assert!(parse_flights("AF1;MRS;LYS;7;33;soon\n").is_err());
    }

    #[test]
    fn test_build_flight_graph() {
        let airports = parse_airports(AIRPORTS).expect("valid");
        let flights = parse_flights(FLIGHTS).expect("valid");
        let graph = build_flight_graph(airports, flights).expect("codes resolve");
        assert_eq!(graph.airport_count(), 3);
        assert_eq!(graph.flight_count(), 2);
    }

    #[test]
    fn test_build_flight_graph_unknown_code() {
        let airports = parse_airports(AIRPORTS).expect("valid");
        let flights = vec![Flight::new("F1", "MRS", "ZZZ", 480.0, 30)];
        assert!(build_flight_graph(airports, flights).is_err());
    }

    #[test]
    fn test_parse_coloring_graph() {
        let (k_max, view) = parse_coloring_graph("2\n4\n1 2\n2 3\n3 4\n4 1\n").expect("valid");
        assert_eq!(k_max, 2);
        assert_eq!(view.len(), 4);
        assert_eq!(view.degree(0), 2);
        assert_eq!(view.neighbors(0), &[1, 3]);
    }

    #[test]
    fn test_parse_coloring_graph_rejects_out_of_range_edge() {
        assert!(parse_coloring_graph("2\n3\n1 4\n").is_err());
        assert!(parse_coloring_graph("2\n3\n0 1\n").is_err());
    }

    #[test]
    fn test_parse_coloring_graph_rejects_dangling_endpoint() {
        assert!(parse_coloring_graph("2\n3\n1 2\n3\n").is_err());
    }
}
