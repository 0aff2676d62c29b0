//! Topological classification of flight pairs.

use crate::geometry::Point;
use crate::models::Flight;
use serde::{Deserialize, Serialize};

/// How two flight routes relate to each other.
///
/// The classification decides which temporal gap is compared against the
/// safety margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteRelation {
    /// Same route flown in opposite directions
    ReverseRoute,
    /// Both flights leave from the same airport
    SharedDeparture,
    /// Both flights land at the same airport
    SharedArrival,
    /// Flight 1 departs from where flight 2 lands
    DepartureMeetsArrival,
    /// Flight 2 departs from where flight 1 lands
    ArrivalMeetsDeparture,
    /// Unrelated routes whose paths cross mid-air
    Crossing,
}

impl RouteRelation {
    /// Classify a flight pair, checked in priority order (first match wins).
    ///
    /// Returns `None` when the routes share no airport and their paths do
    /// not cross; such a pair can never conflict.
    #[must_use]
    pub fn classify(flight1: &Flight, flight2: &Flight, intersection: &Point) -> Option<Self> {
        if flight1.departure == flight2.arrival && flight2.departure == flight1.arrival {
            Some(Self::ReverseRoute)
        } else if flight1.departure == flight2.departure {
            Some(Self::SharedDeparture)
        } else if flight1.arrival == flight2.arrival {
            Some(Self::SharedArrival)
        } else if flight1.departure == flight2.arrival {
            Some(Self::DepartureMeetsArrival)
        } else if flight2.departure == flight1.arrival {
            Some(Self::ArrivalMeetsDeparture)
        } else if intersection.exists {
            Some(Self::Crossing)
        } else {
            None
        }
    }

    /// Short display name for the relation
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ReverseRoute => "Reverse Route",
            Self::SharedDeparture => "Shared Departure",
            Self::SharedArrival => "Shared Arrival",
            Self::DepartureMeetsArrival => "Departure Meets Arrival",
            Self::ArrivalMeetsDeparture => "Arrival Meets Departure",
            Self::Crossing => "Crossing",
        }
    }
}
