//! Scheduled departures.
//!
//! Timetable data annotates itineraries; it never influences routing.
//! The provider trait keeps the planner testable against canned
//! schedules, with [`StaticTimetable`] as the production source.

use chrono::{Duration, NaiveTime};

use crate::domain::{Direction, LineName, NextDeparture, StationCode};
use crate::network::NetworkModel;

/// A scheduled departure of one train at one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub time: NaiveTime,
    /// Display label of the train.
    pub train: String,
}

/// Source of scheduled departures for ride segments.
pub trait TimetableProvider: Send + Sync {
    /// All departures on `line` that call at `from` and later at `to`,
    /// keyed by their departure time at `from`. Order is unspecified.
    ///
    /// An empty result means no schedule covers the segment; the
    /// caller treats that as "no annotation", never as an error.
    fn departures(&self, line: &LineName, from: StationCode, to: StationCode) -> Vec<Departure>;
}

/// Pick the next departure at or after `reference`.
///
/// When every departure today has already left, wraps to the earliest
/// departure and marks it as next-day.
pub fn next_departure_after(
    departures: &[Departure],
    reference: NaiveTime,
) -> Option<NextDeparture> {
    if let Some(dep) = departures
        .iter()
        .filter(|d| d.time >= reference)
        .min_by_key(|d| d.time)
    {
        return Some(NextDeparture {
            time: dep.time,
            next_day: false,
            train: dep.train.clone(),
        });
    }

    departures
        .iter()
        .min_by_key(|d| d.time)
        .map(|dep| NextDeparture {
            time: dep.time,
            next_day: true,
            train: dep.train.clone(),
        })
}

/// Service category of a generated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainCategory {
    Fast,
    Slow,
}

impl TrainCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainCategory::Fast => "Fast",
            TrainCategory::Slow => "Slow",
        }
    }
}

/// One scheduled end-to-end run of a line.
#[derive(Debug, Clone)]
pub struct TrainRun {
    pub number: String,
    pub name: String,
    pub category: TrainCategory,
    pub line: LineName,
    pub direction: Direction,
    /// Calling points in running order with their departure times.
    pub calls: Vec<(StationCode, NaiveTime)>,
}

/// Synthetic timetable generated from the network model.
///
/// One run per line per direction per hour from 05:00 to 23:00, with a
/// nominal three minutes between consecutive calling points. Not real
/// schedule data, but shaped like it: enough for departure lookups to
/// behave the way they would against a feed.
#[derive(Debug, Clone)]
pub struct StaticTimetable {
    runs: Vec<TrainRun>,
}

const FIRST_HOUR: u32 = 5;
const LAST_HOUR: u32 = 23;
const CALL_SPACING_MINS: i64 = 3;

impl StaticTimetable {
    /// Generate runs for every line of the model, both directions.
    ///
    /// Down runs follow declaration order (away from the city
    /// terminal); up runs are the reverse. Generation is deterministic.
    pub fn from_model(model: &NetworkModel) -> Self {
        let names = model.station_map();
        let display = |code: &StationCode| {
            names
                .get(code)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| code.to_string())
        };

        let mut runs = Vec::new();
        for route in &model.routes {
            for direction in Direction::BOTH {
                let ordered: Vec<StationCode> = match direction {
                    Direction::Down => route.stations.clone(),
                    Direction::Up => route.stations.iter().rev().copied().collect(),
                };
                let (Some(first), Some(last)) = (ordered.first(), ordered.last()) else {
                    continue;
                };
                let title = format!("{}-{}", display(first), display(last));

                for hour in FIRST_HOUR..=LAST_HOUR {
                    let category = if hour % 2 == 0 {
                        TrainCategory::Fast
                    } else {
                        TrainCategory::Slow
                    };
                    let Some(start) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                        continue;
                    };
                    let calls = ordered
                        .iter()
                        .enumerate()
                        .map(|(i, code)| {
                            (*code, start + Duration::minutes(i as i64 * CALL_SPACING_MINS))
                        })
                        .collect();

                    runs.push(TrainRun {
                        number: format!("{}{:02}", direction_digit(direction), hour),
                        name: format!("{title} {}", category.as_str()),
                        category,
                        line: route.name.clone(),
                        direction,
                        calls,
                    });
                }
            }
        }

        Self { runs }
    }

    /// All generated runs.
    pub fn runs(&self) -> &[TrainRun] {
        &self.runs
    }
}

fn direction_digit(direction: Direction) -> char {
    match direction {
        Direction::Up => '9',
        Direction::Down => '8',
    }
}

impl TimetableProvider for StaticTimetable {
    fn departures(&self, line: &LineName, from: StationCode, to: StationCode) -> Vec<Departure> {
        self.runs
            .iter()
            .filter(|run| run.line == *line)
            .filter_map(|run| {
                let from_idx = run.calls.iter().position(|(c, _)| *c == from)?;
                let to_idx = run.calls.iter().position(|(c, _)| *c == to)?;
                (from_idx < to_idx).then(|| Departure {
                    time: run.calls[from_idx].1,
                    train: run.name.clone(),
                })
            })
            .collect()
    }
}
