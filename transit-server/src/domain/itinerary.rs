//! Itinerary types.
//!
//! An `Itinerary` is the user-facing result of one planning criterion:
//! an ordered list of steps (rides, transfers, walks) with aggregate
//! duration, fare and transfer count. Itineraries are built once per
//! request and never mutated afterwards.

use chrono::{Duration, NaiveTime};

use super::{LineName, StationCode};

/// Which optimisation criterion produced an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItineraryKind {
    Fastest,
    FewestTransfers,
    Cheapest,
}

impl ItineraryKind {
    /// Stable string tag used in API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryKind::Fastest => "fastest",
            ItineraryKind::FewestTransfers => "fewest-transfers",
            ItineraryKind::Cheapest => "cheapest",
        }
    }
}

/// The next scheduled departure annotating a ride step.
///
/// Best-effort: absent when no timetable data covers the segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    /// Departure time at the boarding station.
    pub time: NaiveTime,

    /// True when no departure remained today and the time refers to
    /// the next day.
    pub next_day: bool,

    /// Display label of the train (e.g. "Churchgate-Virar Fast").
    pub train: String,
}

/// One step of an itinerary.
///
/// A tagged sum over the three step kinds, each with its own required
/// fields. Replaces the loosely-typed "struct with optional fields"
/// shape of ad-hoc planners.
#[derive(Debug, Clone)]
pub enum Step {
    /// A maximal run of same-line travel.
    Ride {
        line: LineName,
        from: StationCode,
        to: StationCode,
        duration: Duration,
        distance_m: f64,
        /// Next scheduled departure on this line at or after the
        /// request's reference time, when known.
        departure: Option<NextDeparture>,
    },

    /// A line change at one station. `from == to` by construction:
    /// a transfer is a time penalty, never a spatial move.
    Transfer {
        station: StationCode,
        from_line: LineName,
        to_line: LineName,
        duration: Duration,
    },

    /// Walking access at the start or end of a journey.
    Walk {
        from: StationCode,
        to: StationCode,
        duration: Duration,
    },
}

impl Step {
    /// Returns the station this step starts at.
    pub fn from(&self) -> StationCode {
        match self {
            Step::Ride { from, .. } => *from,
            Step::Transfer { station, .. } => *station,
            Step::Walk { from, .. } => *from,
        }
    }

    /// Returns the station this step ends at.
    pub fn to(&self) -> StationCode {
        match self {
            Step::Ride { to, .. } => *to,
            Step::Transfer { station, .. } => *station,
            Step::Walk { to, .. } => *to,
        }
    }

    /// Returns the duration of this step.
    pub fn duration(&self) -> Duration {
        match self {
            Step::Ride { duration, .. }
            | Step::Transfer { duration, .. }
            | Step::Walk { duration, .. } => *duration,
        }
    }

    /// Returns true if this is a transfer step.
    pub fn is_transfer(&self) -> bool {
        matches!(self, Step::Transfer { .. })
    }
}

/// Error from itinerary construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    /// Itinerary has no steps
    #[error("itinerary must have at least one step")]
    Empty,

    /// Consecutive steps don't share a station
    #[error("steps do not chain: {0} then {1}")]
    NotContiguous(StationCode, StationCode),
}

/// A complete journey option for one criterion.
///
/// # Invariants
///
/// - At least one step.
/// - Steps chain: each step starts where the previous one ended
///   (transfer steps are self-loops at their station).
/// - `duration` is the sum of step durations; `transfers` is the
///   number of transfer steps. Both are fixed at construction.
#[derive(Debug, Clone)]
pub struct Itinerary {
    kind: ItineraryKind,
    steps: Vec<Step>,
    /// Raw station sequence of the underlying path, for map display.
    path: Vec<StationCode>,
    duration: Duration,
    fare: u32,
    transfers: usize,
}

impl Itinerary {
    /// Construct an itinerary, validating step contiguity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the step list is empty or consecutive steps
    /// don't share a station.
    pub fn new(
        kind: ItineraryKind,
        steps: Vec<Step>,
        path: Vec<StationCode>,
        fare: u32,
    ) -> Result<Self, ItineraryError> {
        if steps.is_empty() {
            return Err(ItineraryError::Empty);
        }

        for window in steps.windows(2) {
            let prev_to = window[0].to();
            let next_from = window[1].from();
            if prev_to != next_from {
                return Err(ItineraryError::NotContiguous(prev_to, next_from));
            }
        }

        let duration = steps
            .iter()
            .fold(Duration::zero(), |acc, s| acc + s.duration());
        let transfers = steps.iter().filter(|s| s.is_transfer()).count();

        Ok(Itinerary {
            kind,
            steps,
            path,
            duration,
            fare,
            transfers,
        })
    }

    /// Returns the criterion that produced this itinerary.
    pub fn kind(&self) -> ItineraryKind {
        self.kind
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the raw station sequence.
    pub fn path(&self) -> &[StationCode] {
        &self.path
    }

    /// Returns the total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the total fare in rupees.
    pub fn fare(&self) -> u32 {
        self.fare
    }

    /// Returns the number of transfer steps.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Returns the origin station.
    pub fn origin(&self) -> StationCode {
        // Safe: validated non-empty at construction
        self.steps.first().unwrap().from()
    }

    /// Returns the destination station.
    pub fn destination(&self) -> StationCode {
        self.steps.last().unwrap().to()
    }
}
