//! Reservation data model
//!
//! Nested the way the suite walks it: reservation -> flights -> legs ->
//! locations, all indexable.

use serde::{Deserialize, Serialize};

/// A booking under a single confirmation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub first_name: String,
    pub last_name: String,
    pub confirmation: String,
    pub email: String,
    #[serde(default)]
    pub flights: Vec<Flight>,
}

impl Reservation {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        confirmation: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            confirmation: confirmation.into(),
            email: email.into(),
            flights: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    /// Scheduled departure, hours from midnight
    pub sched_time: Option<f64>,
    #[serde(default)]
    pub legs: Vec<FlightLeg>,
}

impl Flight {
    pub fn with_sched_time(sched_time: f64) -> Self {
        Self {
            sched_time: Some(sched_time),
            legs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub flight_number: Option<String>,
    pub depart: Option<FlightLegLocation>,
    pub arrive: Option<FlightLegLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLegLocation {
    /// IATA airport code, e.g. "AUS"
    pub airport: String,
}

impl FlightLegLocation {
    pub fn new(airport: impl Into<String>) -> Self {
        Self {
            airport: airport.into(),
        }
    }
}
