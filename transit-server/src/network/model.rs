//! Network model and build-time validation.

use std::collections::{HashMap, HashSet};

use crate::domain::{LineName, Station, StationCode};

/// Fatal configuration error in the network model.
///
/// Raised at startup; the process must not serve requests against an
/// invalid network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Two stations share a code
    #[error("duplicate station code: {0}")]
    DuplicateStation(StationCode),

    /// A line sequence references a station that does not exist
    #[error("line {line} references unknown station {code}")]
    UnknownStation { line: LineName, code: StationCode },

    /// A line sequence has fewer than two stations
    #[error("line {0} has fewer than two stations")]
    RouteTooShort(LineName),

    /// A line sequence lists the same station twice in a row
    #[error("line {line} repeats station {code} consecutively")]
    RepeatedStation { line: LineName, code: StationCode },

    /// An interchange references a station that does not exist
    #[error("interchange at unknown station {0}")]
    UnknownInterchangeStation(StationCode),

    /// An interchange declares fewer than two lines
    #[error("interchange at {0} must declare at least two lines")]
    TooFewInterchangeLines(StationCode),

    /// An interchange declares a line whose sequence does not include
    /// the station
    #[error("interchange at {station} declares line {line}, but the line does not call there")]
    LineNotAtStation {
        station: StationCode,
        line: LineName,
    },
}

/// An ordered sequence of stations making up one line.
#[derive(Debug, Clone)]
pub struct LineRoute {
    pub name: LineName,
    pub stations: Vec<StationCode>,
}

impl LineRoute {
    /// Create a line route.
    pub fn new(name: impl Into<LineName>, stations: Vec<StationCode>) -> Self {
        Self {
            name: name.into(),
            stations,
        }
    }
}

/// A declared interchange: a station where transfer edges are injected
/// between two or more of its serving lines.
///
/// Serving multiple lines alone does not create transfers; only an
/// explicit declaration here does.
#[derive(Debug, Clone)]
pub struct Interchange {
    pub station: StationCode,
    pub lines: Vec<LineName>,
}

/// The static network model: stations, line sequences, interchanges.
///
/// Pure data; validation and graph derivation live in
/// [`NetworkModel::validate`] and [`super::RailGraph::build`].
#[derive(Debug, Clone)]
pub struct NetworkModel {
    pub stations: Vec<Station>,
    pub routes: Vec<LineRoute>,
    pub interchanges: Vec<Interchange>,
}

impl NetworkModel {
    /// Validate the model, failing fast on the first inconsistency.
    ///
    /// # Errors
    ///
    /// Any [`NetworkError`]; see the variants for the rules enforced.
    pub fn validate(&self) -> Result<(), NetworkError> {
        let mut codes = HashSet::new();
        for station in &self.stations {
            if !codes.insert(station.code) {
                return Err(NetworkError::DuplicateStation(station.code));
            }
        }

        for route in &self.routes {
            if route.stations.len() < 2 {
                return Err(NetworkError::RouteTooShort(route.name.clone()));
            }
            for code in &route.stations {
                if !codes.contains(code) {
                    return Err(NetworkError::UnknownStation {
                        line: route.name.clone(),
                        code: *code,
                    });
                }
            }
            for window in route.stations.windows(2) {
                if window[0] == window[1] {
                    return Err(NetworkError::RepeatedStation {
                        line: route.name.clone(),
                        code: window[0],
                    });
                }
            }
        }

        for interchange in &self.interchanges {
            if !codes.contains(&interchange.station) {
                return Err(NetworkError::UnknownInterchangeStation(interchange.station));
            }
            if interchange.lines.len() < 2 {
                return Err(NetworkError::TooFewInterchangeLines(interchange.station));
            }
            for line in &interchange.lines {
                let calls_there = self
                    .routes
                    .iter()
                    .any(|r| r.name == *line && r.stations.contains(&interchange.station));
                if !calls_there {
                    return Err(NetworkError::LineNotAtStation {
                        station: interchange.station,
                        line: line.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns a code → station lookup over the model's stations.
    pub fn station_map(&self) -> HashMap<StationCode, &Station> {
        self.stations.iter().map(|s| (s.code, s)).collect()
    }
}
