//! Itinerary assembly from raw search paths.
//!
//! The search yields station-by-station hops; riders think in legs.
//! Assembly folds maximal runs of same-line hops into single ride
//! steps, inserts a transfer step at every line change, and annotates
//! each ride with the next scheduled departure when one is known.

use chrono::Duration;

use crate::domain::{
    Itinerary, ItineraryError, ItineraryKind, LineName, NextDeparture, Step, StationCode,
};

use super::search::{HopKind, Path};

/// A ride segment being accumulated across consecutive same-line hops.
struct OpenRide {
    line: LineName,
    from: StationCode,
    to: StationCode,
    duration: Duration,
    distance_m: f64,
}

impl OpenRide {
    fn into_step<F>(self, next_departure: &F) -> Step
    where
        F: Fn(&LineName, StationCode, StationCode) -> Option<NextDeparture>,
    {
        let departure = next_departure(&self.line, self.from, self.to);
        Step::Ride {
            line: self.line,
            from: self.from,
            to: self.to,
            duration: self.duration,
            distance_m: self.distance_m,
            departure,
        }
    }
}

/// Turn a search path into an itinerary.
///
/// `transfer_duration` is the fixed time charged when two consecutive
/// ride segments change line without an explicit transfer hop between
/// them; explicit transfer hops carry their own duration. The
/// `next_departure` lookup is best-effort and may return `None`, in
/// which case the ride step simply goes unannotated.
///
/// # Errors
///
/// Propagates [`ItineraryError`] from itinerary construction. With a
/// well-formed path this does not happen; a failure here indicates a
/// search bug and is reported rather than panicking.
pub fn assemble<F>(
    path: &Path,
    kind: ItineraryKind,
    fare: u32,
    transfer_duration: Duration,
    next_departure: F,
) -> Result<Itinerary, ItineraryError>
where
    F: Fn(&LineName, StationCode, StationCode) -> Option<NextDeparture>,
{
    let mut steps: Vec<Step> = Vec::new();
    let mut open: Option<OpenRide> = None;
    let mut last_line: Option<LineName> = None;

    for hop in &path.hops {
        match &hop.kind {
            HopKind::Ride { line } => {
                if let Some(seg) = open.as_mut() {
                    if seg.line == *line {
                        seg.to = hop.to;
                        seg.duration = seg.duration + hop.duration;
                        seg.distance_m += hop.distance_m;
                        continue;
                    }
                }
                if let Some(seg) = open.take() {
                    last_line = Some(seg.line.clone());
                    steps.push(seg.into_step(&next_departure));
                }
                if let Some(prev) = &last_line {
                    if prev != line {
                        steps.push(Step::Transfer {
                            station: hop.from,
                            from_line: prev.clone(),
                            to_line: line.clone(),
                            duration: transfer_duration,
                        });
                    }
                }
                open = Some(OpenRide {
                    line: line.clone(),
                    from: hop.from,
                    to: hop.to,
                    duration: hop.duration,
                    distance_m: hop.distance_m,
                });
            }
            HopKind::Transfer { from_line, to_line } => {
                if let Some(seg) = open.take() {
                    steps.push(seg.into_step(&next_departure));
                }
                steps.push(Step::Transfer {
                    station: hop.from,
                    from_line: from_line.clone(),
                    to_line: to_line.clone(),
                    duration: hop.duration,
                });
                last_line = Some(to_line.clone());
            }
        }
    }

    if let Some(seg) = open.take() {
        steps.push(seg.into_step(&next_departure));
    }

    Itinerary::new(kind, steps, path.stations(), fare)
}
