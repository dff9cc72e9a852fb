//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, NextDeparture, Station, Step};

/// Request to search for stations.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Free-text query (name or station code)
    pub q: String,

    /// Maximum number of results (defaults to 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationSearchResult {
    pub code: String,
    pub name: String,
    pub lines: Vec<String>,
    pub zone: u8,
}

impl StationSearchResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            code: station.code.to_string(),
            name: station.name.clone(),
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            zone: station.zone_or_default(),
        }
    }
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    pub stations: Vec<StationSearchResult>,
}

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanJourneyRequest {
    /// Origin station code or name
    pub origin: String,

    /// Destination station code or name
    pub destination: String,

    /// Transfer budget (defaults to the server's configured budget)
    pub max_transfers: Option<usize>,

    /// Reference time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// A scheduled departure annotating a ride.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Departure time, HH:MM
    pub time: String,

    /// True when the departure is on the following day
    pub next_day: bool,

    /// Train display label
    pub train: String,
}

impl DepartureResult {
    fn from_departure(dep: &NextDeparture) -> Self {
        Self {
            time: dep.time.format("%H:%M").to_string(),
            next_day: dep.next_day,
            train: dep.train.clone(),
        }
    }
}

/// One step of an itinerary.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum StepResult {
    Train {
        line: String,
        from: String,
        to: String,
        duration_mins: i64,
        distance_km: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        departure: Option<DepartureResult>,
    },
    Transfer {
        station: String,
        from_line: String,
        to_line: String,
        duration_mins: i64,
    },
    Walk {
        from: String,
        to: String,
        duration_mins: i64,
    },
}

impl StepResult {
    fn from_step(step: &Step) -> Self {
        match step {
            Step::Ride {
                line,
                from,
                to,
                duration,
                distance_m,
                departure,
            } => StepResult::Train {
                line: line.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                duration_mins: duration.num_minutes(),
                distance_km: (distance_m / 100.0).round() / 10.0,
                departure: departure.as_ref().map(DepartureResult::from_departure),
            },
            Step::Transfer {
                station,
                from_line,
                to_line,
                duration,
            } => StepResult::Transfer {
                station: station.to_string(),
                from_line: from_line.to_string(),
                to_line: to_line.to_string(),
                duration_mins: duration.num_minutes(),
            },
            Step::Walk { from, to, duration } => StepResult::Walk {
                from: from.to_string(),
                to: to.to_string(),
                duration_mins: duration.num_minutes(),
            },
        }
    }
}

/// A journey option.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// Which criterion produced this option
    #[serde(rename = "type")]
    pub kind: String,

    /// Total duration in minutes
    pub duration_mins: i64,

    /// Number of transfers
    pub transfers: usize,

    /// Fare in rupees
    pub fare: u32,

    /// Ordered steps
    pub steps: Vec<StepResult>,

    /// Raw station code sequence, for map display
    pub path: Vec<String>,
}

impl ItineraryResult {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            kind: itinerary.kind().as_str().to_string(),
            duration_mins: itinerary.duration().num_minutes(),
            transfers: itinerary.transfers(),
            fare: itinerary.fare(),
            steps: itinerary.steps().iter().map(StepResult::from_step).collect(),
            path: itinerary.path().iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Response for journey planning.
///
/// `success` is true whenever the request was well-formed, even when
/// no route exists; an empty `routes` list is the "no route" answer.
#[derive(Debug, Serialize)]
pub struct PlanJourneyResponse {
    pub success: bool,
    pub routes: Vec<ItineraryResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItineraryKind, LineName, StationCode};
    use chrono::{Duration, NaiveTime};

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn steps_are_tagged_by_mode() {
        let ride = Step::Ride {
            line: LineName::new("Western"),
            from: code("CCG"),
            to: code("DR"),
            duration: Duration::minutes(20),
            distance_m: 8640.0,
            departure: Some(NextDeparture {
                time: NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
                next_day: false,
                train: "Churchgate-Virar Fast".to_string(),
            }),
        };
        let json = serde_json::to_value(StepResult::from_step(&ride)).unwrap();
        assert_eq!(json["mode"], "train");
        assert_eq!(json["line"], "Western");
        assert_eq!(json["duration_mins"], 20);
        assert_eq!(json["distance_km"], 8.6);
        assert_eq!(json["departure"]["time"], "09:05");

        let transfer = Step::Transfer {
            station: code("DR"),
            from_line: LineName::new("Western"),
            to_line: LineName::new("Central"),
            duration: Duration::minutes(10),
        };
        let json = serde_json::to_value(StepResult::from_step(&transfer)).unwrap();
        assert_eq!(json["mode"], "transfer");
        assert_eq!(json["station"], "DR");
    }

    #[test]
    fn missing_departure_is_omitted() {
        let ride = Step::Ride {
            line: LineName::new("Western"),
            from: code("CCG"),
            to: code("DR"),
            duration: Duration::minutes(20),
            distance_m: 8640.0,
            departure: None,
        };
        let json = serde_json::to_value(StepResult::from_step(&ride)).unwrap();
        assert!(json.get("departure").is_none());
    }

    #[test]
    fn itinerary_result_carries_kind_tag() {
        let itinerary = Itinerary::new(
            ItineraryKind::Fastest,
            vec![Step::Ride {
                line: LineName::new("Western"),
                from: code("CCG"),
                to: code("DR"),
                duration: Duration::minutes(20),
                distance_m: 8640.0,
                departure: None,
            }],
            vec![code("CCG"), code("DR")],
            5,
        )
        .unwrap();

        let json = serde_json::to_value(ItineraryResult::from_itinerary(&itinerary)).unwrap();
        assert_eq!(json["type"], "fastest");
        assert_eq!(json["fare"], 5);
        assert_eq!(json["path"], serde_json::json!(["CCG", "DR"]));
    }
}
