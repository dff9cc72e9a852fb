//! Journey planning.
//!
//! The planner runs one search per criterion against the shared graph,
//! prices and assembles each resulting path, and returns the options
//! ordered for presentation. It holds no mutable state; a planner is
//! cheap to construct per request.

pub mod assemble;
pub mod config;
pub mod fare;
pub mod search;

#[cfg(test)]
mod search_tests;

pub use config::PlannerConfig;
pub use fare::FareTable;
pub use search::{Criterion, Path, SearchEngine, SearchError};

use chrono::{Duration, NaiveTime};
use tracing::warn;

use crate::domain::{Itinerary, ItineraryKind, LineName, StationCode};
use crate::network::RailGraph;
use crate::timetable::{TimetableProvider, next_departure_after};

/// Per-request planning facade over the shared graph, fare table and
/// timetable.
pub struct Planner<'a, T: TimetableProvider + ?Sized> {
    graph: &'a RailGraph,
    config: &'a PlannerConfig,
    fares: &'a FareTable,
    timetable: &'a T,
}

impl<'a, T: TimetableProvider + ?Sized> Planner<'a, T> {
    pub fn new(
        graph: &'a RailGraph,
        config: &'a PlannerConfig,
        fares: &'a FareTable,
        timetable: &'a T,
    ) -> Self {
        Self {
            graph,
            config,
            fares,
            timetable,
        }
    }

    /// Plan journey options from `origin` to `destination`.
    ///
    /// Runs every criterion and returns up to one itinerary per
    /// criterion. Results are not deduplicated: two criteria agreeing
    /// on the same route yield two entries, so callers always see
    /// which criteria were satisfied. The fastest option sorts first;
    /// the rest follow in ascending duration.
    ///
    /// An unreachable destination (including one only reachable by
    /// exceeding the transfer budget) yields an empty list, not an
    /// error. `reference` is the clock time departures are annotated
    /// against.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnknownStation`] if either endpoint does not
    /// exist in the network.
    pub fn plan(
        &self,
        origin: StationCode,
        destination: StationCode,
        max_transfers: Option<usize>,
        reference: NaiveTime,
    ) -> Result<Vec<Itinerary>, SearchError> {
        let budget = self.config.clamp_max_transfers(max_transfers);
        let engine = SearchEngine::new(self.graph, self.config);
        let transfer_duration = Duration::minutes(self.graph.config().transfer_minutes);

        let from = self
            .graph
            .station(&origin)
            .ok_or(SearchError::UnknownStation(origin))?;
        let to = self
            .graph
            .station(&destination)
            .ok_or(SearchError::UnknownStation(destination))?;
        let fare = self.fares.fare(from, to);

        let lookup = |line: &LineName, from: StationCode, to: StationCode| {
            let departures = self.timetable.departures(line, from, to);
            next_departure_after(&departures, reference)
        };

        let mut itineraries = Vec::new();
        for criterion in Criterion::ALL {
            let Some(path) = engine.search(origin, destination, budget, criterion)? else {
                continue;
            };
            match assemble::assemble(&path, criterion.kind(), fare, transfer_duration, &lookup) {
                Ok(itinerary) => itineraries.push(itinerary),
                Err(error) => {
                    warn!(
                        %error,
                        criterion = criterion.kind().as_str(),
                        %origin,
                        %destination,
                        "dropping itinerary that failed assembly",
                    );
                }
            }
        }

        itineraries.retain(|it| it.transfers() <= budget);
        itineraries.sort_by_key(|it| (it.kind() != ItineraryKind::Fastest, it.duration()));
        Ok(itineraries)
    }
}
