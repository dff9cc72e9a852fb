//! Domain types for the suburban rail journey planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod geo;
mod itinerary;
mod line;
mod station;

pub use geo::LatLng;
pub use itinerary::{
    Itinerary, ItineraryError, ItineraryKind, NextDeparture, Step,
};
pub use line::{Direction, LineName};
pub use station::{InvalidStationCode, Station, StationCode};
