use crate::time::format_minutes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled flight between two airports.
///
/// The geometry of a flight is fully derived from its airports' projected
/// coordinates; its temporal footprint is
/// `[departure_minutes, departure_minutes + duration_minutes]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    /// Departure airport code
    pub departure: String,
    /// Arrival airport code
    pub arrival: String,
    /// Departure time in minutes since midnight
    pub departure_minutes: f64,
    /// Flight duration in minutes
    pub duration_minutes: u32,
    /// Layer assigned after coloring
    pub layer: Option<usize>,
}

impl Flight {
    pub fn new(
        id: impl Into<String>,
        departure: impl Into<String>,
        arrival: impl Into<String>,
        departure_minutes: f64,
        duration_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            departure: departure.into(),
            arrival: arrival.into(),
            departure_minutes,
            duration_minutes,
            layer: None,
        }
    }

    /// Arrival time in minutes since midnight
    #[must_use]
    pub fn arrival_minutes(&self) -> f64 {
        self.departure_minutes + f64::from(self.duration_minutes)
    }

    /// One-line schedule summary for tabular display
    #[must_use]
    pub fn schedule_summary(&self) -> String {
        format!(
            "{} | {} -> {} | {} - {} | {} min",
            self.id,
            self.departure,
            self.arrival,
            format_minutes(self.departure_minutes),
            format_minutes(self.arrival_minutes()),
            self.duration_minutes
        )
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}->{}", self.id, self.departure, self.arrival)
    }
}
