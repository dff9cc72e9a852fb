//! Weighted graph derived from the network model.
//!
//! One ride edge per adjacent station pair per line, inserted in both
//! directions; one self-loop transfer edge per unordered line pair at
//! each declared interchange. Built once, immutable, shared by all
//! concurrent searches.

use std::collections::HashMap;

use chrono::Duration;

use crate::domain::{LineName, Station, StationCode};

use super::model::{NetworkError, NetworkModel};

/// Constants governing edge weight derivation.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Assumed average train speed, km/h.
    pub train_speed_kmh: f64,

    /// Distance assumed for an adjacent pair when either station has
    /// no coordinates, in metres.
    pub fallback_edge_meters: f64,

    /// Fixed time cost of a transfer, in minutes.
    pub transfer_minutes: i64,

    /// Nominal platform walking distance for a transfer, in metres.
    pub transfer_walk_meters: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            train_speed_kmh: 40.0,
            fallback_edge_meters: 2000.0,
            transfer_minutes: 10,
            transfer_walk_meters: 200.0,
        }
    }
}

/// What kind of movement an edge represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeKind {
    /// Travel between adjacent stations on one line.
    Ride { line: LineName },

    /// A line change at one station (self-loop; no spatial move).
    /// The pair is unordered: it can be traversed from either line
    /// to the other.
    Transfer { lines: (LineName, LineName) },
}

/// A directed edge of the rail graph.
#[derive(Debug, Clone)]
pub struct RailEdge {
    pub to: StationCode,
    pub kind: EdgeKind,
    pub duration: Duration,
    pub distance_m: f64,
}

impl RailEdge {
    /// Returns true if this is a transfer self-loop.
    pub fn is_transfer(&self) -> bool {
        matches!(self.kind, EdgeKind::Transfer { .. })
    }

    /// For a transfer edge, the line you end up on when arriving from
    /// `current`. Falls back to the first of the pair when the current
    /// line is not part of it.
    pub fn line_after(&self, current: Option<&LineName>) -> Option<LineName> {
        match &self.kind {
            EdgeKind::Ride { line } => Some(line.clone()),
            EdgeKind::Transfer { lines: (a, b) } => {
                if current == Some(b) {
                    Some(a.clone())
                } else {
                    Some(b.clone())
                }
            }
        }
    }
}

/// The compiled rail network graph.
///
/// Adjacency is a vector of edges per station rather than a map keyed
/// by destination: transfer edges are self-loops, and an interchange
/// with three lines needs several edges with the same endpoints.
/// Vector order is declaration order, which keeps builds deterministic.
#[derive(Debug, Clone)]
pub struct RailGraph {
    stations: HashMap<StationCode, Station>,
    adjacency: HashMap<StationCode, Vec<RailEdge>>,
    config: GraphConfig,
}

impl RailGraph {
    /// Build the graph from a network model.
    ///
    /// Validates the model first; a model inconsistency is fatal.
    /// Building is deterministic and idempotent.
    pub fn build(model: &NetworkModel, config: GraphConfig) -> Result<Self, NetworkError> {
        model.validate()?;

        let stations: HashMap<StationCode, Station> = model
            .stations
            .iter()
            .map(|s| (s.code, s.clone()))
            .collect();

        let mut adjacency: HashMap<StationCode, Vec<RailEdge>> = HashMap::new();

        for route in &model.routes {
            for window in route.stations.windows(2) {
                let (from, to) = (window[0], window[1]);
                let distance_m = ride_distance(&stations, &from, &to, &config);
                let duration = ride_duration(distance_m, &config);

                for (a, b) in [(from, to), (to, from)] {
                    adjacency.entry(a).or_default().push(RailEdge {
                        to: b,
                        kind: EdgeKind::Ride {
                            line: route.name.clone(),
                        },
                        duration,
                        distance_m,
                    });
                }
            }
        }

        for interchange in &model.interchanges {
            for (i, a) in interchange.lines.iter().enumerate() {
                for b in &interchange.lines[i + 1..] {
                    adjacency
                        .entry(interchange.station)
                        .or_default()
                        .push(RailEdge {
                            to: interchange.station,
                            kind: EdgeKind::Transfer {
                                lines: (a.clone(), b.clone()),
                            },
                            duration: Duration::minutes(config.transfer_minutes),
                            distance_m: config.transfer_walk_meters,
                        });
                }
            }
        }

        Ok(Self {
            stations,
            adjacency,
            config,
        })
    }

    /// Look up a station by code.
    pub fn station(&self, code: &StationCode) -> Option<&Station> {
        self.stations.get(code)
    }

    /// Returns true if the station exists in the graph.
    pub fn contains(&self, code: &StationCode) -> bool {
        self.stations.contains_key(code)
    }

    /// Outgoing edges of a station, in declaration order.
    pub fn edges_from(&self, code: &StationCode) -> &[RailEdge] {
        self.adjacency.get(code).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All stations in the graph (unordered).
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// The configuration the graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }
}

/// Great-circle distance between adjacent stations, with a fixed
/// fallback when coordinates are missing.
fn ride_distance(
    stations: &HashMap<StationCode, Station>,
    from: &StationCode,
    to: &StationCode,
    config: &GraphConfig,
) -> f64 {
    let coords = |code: &StationCode| stations.get(code).and_then(|s| s.coordinates);
    match (coords(from), coords(to)) {
        (Some(a), Some(b)) => a.haversine_meters(&b),
        _ => config.fallback_edge_meters,
    }
}

/// Ride time at the assumed average train speed, rounded to seconds.
fn ride_duration(distance_m: f64, config: &GraphConfig) -> Duration {
    let hours = (distance_m / 1000.0) / config.train_speed_kmh;
    Duration::seconds((hours * 3600.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LatLng;
    use crate::network::model::{Interchange, LineRoute};

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn station(c: &str, coords: Option<(f64, f64)>) -> Station {
        Station {
            code: code(c),
            name: c.to_string(),
            lines: vec![],
            coordinates: coords.map(|(lat, lng)| LatLng::new(lat, lng)),
            zone: Some(1),
            distance_from_terminal: 0,
        }
    }

    fn model() -> NetworkModel {
        NetworkModel {
            stations: vec![
                station("AA", Some((19.000, 72.800))),
                station("BB", Some((19.018, 72.810))),
                station("CC", None),
                station("DD", Some((19.040, 72.830))),
            ],
            routes: vec![
                LineRoute::new("Red", vec![code("AA"), code("BB"), code("CC")]),
                LineRoute::new("Blue", vec![code("BB"), code("DD")]),
            ],
            interchanges: vec![Interchange {
                station: code("BB"),
                lines: vec![LineName::new("Red"), LineName::new("Blue")],
            }],
        }
    }

    fn find_ride<'a>(graph: &'a RailGraph, from: &str, to: &str) -> &'a RailEdge {
        graph
            .edges_from(&code(from))
            .iter()
            .find(|e| e.to == code(to) && !e.is_transfer())
            .expect("ride edge should exist")
    }

    #[test]
    fn ride_edges_are_symmetric() {
        let graph = RailGraph::build(&model(), GraphConfig::default()).unwrap();
        let forward = find_ride(&graph, "AA", "BB");
        let backward = find_ride(&graph, "BB", "AA");
        assert_eq!(forward.duration, backward.duration);
        assert_eq!(forward.distance_m, backward.distance_m);
    }

    #[test]
    fn missing_coordinates_use_fallback() {
        let graph = RailGraph::build(&model(), GraphConfig::default()).unwrap();
        let edge = find_ride(&graph, "BB", "CC");
        assert_eq!(edge.distance_m, 2000.0);
        // 2 km at 40 km/h = 3 minutes
        assert_eq!(edge.duration, Duration::minutes(3));
    }

    #[test]
    fn transfer_is_a_self_loop() {
        let graph = RailGraph::build(&model(), GraphConfig::default()).unwrap();
        let transfers: Vec<_> = graph
            .edges_from(&code("BB"))
            .iter()
            .filter(|e| e.is_transfer())
            .collect();

        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].to, code("BB"));
        assert_eq!(transfers[0].duration, Duration::minutes(10));
        assert_eq!(transfers[0].distance_m, 200.0);
    }

    #[test]
    fn three_line_interchange_gets_three_transfer_edges() {
        let mut m = model();
        m.routes
            .push(LineRoute::new("Green", vec![code("BB"), code("AA")]));
        m.interchanges[0].lines.push(LineName::new("Green"));

        let graph = RailGraph::build(&m, GraphConfig::default()).unwrap();
        let transfers = graph
            .edges_from(&code("BB"))
            .iter()
            .filter(|e| e.is_transfer())
            .count();
        // Red-Blue, Red-Green, Blue-Green
        assert_eq!(transfers, 3);
    }

    #[test]
    fn line_after_orients_transfer_pair() {
        let red = LineName::new("Red");
        let blue = LineName::new("Blue");
        let edge = RailEdge {
            to: code("BB"),
            kind: EdgeKind::Transfer {
                lines: (red.clone(), blue.clone()),
            },
            duration: Duration::minutes(10),
            distance_m: 200.0,
        };

        assert_eq!(edge.line_after(Some(&red)), Some(blue.clone()));
        assert_eq!(edge.line_after(Some(&blue)), Some(red.clone()));
        // Unrelated current line falls back to the second of the pair
        assert_eq!(edge.line_after(None), Some(blue));
    }

    #[test]
    fn build_is_deterministic() {
        let m = model();
        let g1 = RailGraph::build(&m, GraphConfig::default()).unwrap();
        let g2 = RailGraph::build(&m, GraphConfig::default()).unwrap();

        assert_eq!(g1.station_count(), g2.station_count());
        assert_eq!(g1.edge_count(), g2.edge_count());
        for s in g1.stations() {
            let e1 = g1.edges_from(&s.code);
            let e2 = g2.edges_from(&s.code);
            assert_eq!(e1.len(), e2.len());
            for (a, b) in e1.iter().zip(e2) {
                assert_eq!(a.to, b.to);
                assert_eq!(a.kind, b.kind);
                assert_eq!(a.duration, b.duration);
            }
        }
    }

    #[test]
    fn invalid_model_fails_build() {
        let mut m = model();
        m.routes[0].stations.push(code("ZZ"));
        assert!(RailGraph::build(&m, GraphConfig::default()).is_err());
    }
}
