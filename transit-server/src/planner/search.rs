//! Dijkstra path search over the rail graph.
//!
//! One search call answers one criterion (time, transfers or cost) for
//! one origin/destination pair under a transfer budget. Calls are
//! independent and stateless; all search state is allocated locally, so
//! any number of searches can run concurrently against the shared graph.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use chrono::Duration;

use crate::domain::{ItineraryKind, LineName, StationCode};
use crate::network::{EdgeKind, RailGraph};

use super::config::PlannerConfig;

/// The optimisation objective driving a single search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    /// Minimise total riding + transfer time.
    Time,

    /// Minimise transfers first: a large fixed penalty per transfer
    /// makes the weighted cost approximate transfer count while still
    /// preferring shorter paths among equal-transfer options.
    Transfers,

    /// Approximate cheapness: time plus a small per-transfer penalty.
    Cost,
}

impl Criterion {
    /// All criteria, in the order the planner runs them.
    pub const ALL: [Criterion; 3] = [Criterion::Time, Criterion::Transfers, Criterion::Cost];

    /// The itinerary tag produced by this criterion.
    pub fn kind(&self) -> ItineraryKind {
        match self {
            Criterion::Time => ItineraryKind::Fastest,
            Criterion::Transfers => ItineraryKind::FewestTransfers,
            Criterion::Cost => ItineraryKind::Cheapest,
        }
    }

    /// Extra weighted cost added per transfer event.
    fn penalty(&self, config: &PlannerConfig) -> Duration {
        match self {
            Criterion::Time => Duration::zero(),
            Criterion::Transfers => config.transfer_penalty(),
            Criterion::Cost => config.cost_penalty(),
        }
    }
}

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is not a station in the graph
    #[error("unknown station: {0}")]
    UnknownStation(StationCode),
}

/// One traversed edge of a found path.
#[derive(Debug, Clone)]
pub enum HopKind {
    /// Ride between adjacent stations.
    Ride { line: LineName },

    /// Explicit transfer self-loop, oriented by the direction it was
    /// traversed in.
    Transfer {
        from_line: LineName,
        to_line: LineName,
    },
}

/// A hop of a found path, with the edge data the assembler needs.
///
/// Carrying the traversed edge here means the assembler never has to
/// re-disambiguate parallel edges between the same station pair.
#[derive(Debug, Clone)]
pub struct PathHop {
    pub from: StationCode,
    pub to: StationCode,
    pub kind: HopKind,
    pub duration: Duration,
    pub distance_m: f64,
}

/// A path found by the search. Immutable once returned.
#[derive(Debug, Clone)]
pub struct Path {
    pub origin: StationCode,
    pub destination: StationCode,
    pub hops: Vec<PathHop>,
    /// Criterion-weighted cost (includes penalties; not wall time).
    pub cost: Duration,
    pub transfers: usize,
}

impl Path {
    /// The station sequence of the path. Transfer self-loops repeat
    /// their station.
    pub fn stations(&self) -> Vec<StationCode> {
        let mut out = Vec::with_capacity(self.hops.len() + 1);
        out.push(self.origin);
        out.extend(self.hops.iter().map(|h| h.to));
        out
    }
}

/// Search label key: a station together with the line that was active
/// on arrival. Keying by line (rather than station alone) is what makes
/// transfer self-loops and per-line transfer counting well-defined.
type LabelKey = (StationCode, Option<LineName>);

/// Relaxation state for one label.
struct Label {
    cost: Duration,
    transfers: usize,
    prev: Option<(LabelKey, usize)>,
}

/// Shortest-path engine over an immutable graph.
pub struct SearchEngine<'a> {
    graph: &'a RailGraph,
    config: &'a PlannerConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine borrowing the shared graph and configuration.
    pub fn new(graph: &'a RailGraph, config: &'a PlannerConfig) -> Self {
        Self { graph, config }
    }

    /// Find the best path from `origin` to `destination` under the
    /// given criterion and transfer budget.
    ///
    /// Returns `Ok(None)` when no path satisfies the budget: a tight
    /// budget can make a destination unreachable even though a path
    /// with more transfers exists. A relaxation that would exceed the
    /// budget is rejected outright, not merely penalised.
    ///
    /// Ties on weighted cost resolve deterministically: fewer
    /// transfers first, then lexicographically smallest station code.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnknownStation`] if either endpoint is not in
    /// the graph.
    pub fn search(
        &self,
        origin: StationCode,
        destination: StationCode,
        max_transfers: usize,
        criterion: Criterion,
    ) -> Result<Option<Path>, SearchError> {
        for code in [origin, destination] {
            if !self.graph.contains(&code) {
                return Err(SearchError::UnknownStation(code));
            }
        }
        if origin == destination {
            return Ok(None);
        }

        let transfer_time = Duration::minutes(self.graph.config().transfer_minutes);
        let penalty = criterion.penalty(self.config);

        let mut labels: HashMap<LabelKey, Label> = HashMap::new();
        let mut frontier: BinaryHeap<
            Reverse<(Duration, usize, StationCode, Option<LineName>)>,
        > = BinaryHeap::new();

        labels.insert(
            (origin, None),
            Label {
                cost: Duration::zero(),
                transfers: 0,
                prev: None,
            },
        );
        frontier.push(Reverse((Duration::zero(), 0, origin, None)));

        let mut found: Option<LabelKey> = None;

        while let Some(Reverse((cost, transfers, station, line))) = frontier.pop() {
            let key = (station, line);
            let stale = match labels.get(&key) {
                Some(label) => (cost, transfers) != (label.cost, label.transfers),
                None => true,
            };
            if stale {
                continue;
            }

            if station == destination {
                found = Some(key);
                break;
            }

            let current_line = key.1.clone();
            for (idx, edge) in self.graph.edges_from(&station).iter().enumerate() {
                let changes_line = match &edge.kind {
                    EdgeKind::Transfer { .. } => true,
                    EdgeKind::Ride { line } => {
                        current_line.as_ref().is_some_and(|current| current != line)
                    }
                };

                let next_transfers = transfers + usize::from(changes_line);
                if next_transfers > max_transfers {
                    continue;
                }

                let mut next_cost = cost + edge.duration;
                if changes_line {
                    next_cost = next_cost + penalty;
                    // An implicit line change costs the same fixed
                    // transfer time as an explicit transfer edge, so
                    // path cost matches the assembled step durations.
                    if !edge.is_transfer() {
                        next_cost = next_cost + transfer_time;
                    }
                }

                let next_key = (edge.to, edge.line_after(current_line.as_ref()));
                let improves = match labels.get(&next_key) {
                    None => true,
                    Some(existing) => {
                        (next_cost, next_transfers) < (existing.cost, existing.transfers)
                    }
                };
                if improves {
                    frontier.push(Reverse((
                        next_cost,
                        next_transfers,
                        next_key.0,
                        next_key.1.clone(),
                    )));
                    labels.insert(
                        next_key,
                        Label {
                            cost: next_cost,
                            transfers: next_transfers,
                            prev: Some((key.clone(), idx)),
                        },
                    );
                }
            }
        }

        Ok(found.map(|dest_key| self.reconstruct(origin, destination, dest_key, &labels)))
    }

    /// Walk the predecessor chain back from the destination label.
    fn reconstruct(
        &self,
        origin: StationCode,
        destination: StationCode,
        dest_key: LabelKey,
        labels: &HashMap<LabelKey, Label>,
    ) -> Path {
        let final_label = &labels[&dest_key];
        let (cost, transfers) = (final_label.cost, final_label.transfers);

        let mut hops = Vec::new();
        let mut key = dest_key;
        while let Some((prev_key, edge_idx)) = labels[&key].prev.clone() {
            let edge = &self.graph.edges_from(&prev_key.0)[edge_idx];
            let kind = match &edge.kind {
                EdgeKind::Ride { line } => HopKind::Ride { line: line.clone() },
                EdgeKind::Transfer { lines: (a, b) } => {
                    // The label's line is the line after the transfer
                    let to_line = key.1.clone().unwrap_or_else(|| b.clone());
                    let from_line = if &to_line == b { a.clone() } else { b.clone() };
                    HopKind::Transfer { from_line, to_line }
                }
            };
            hops.push(PathHop {
                from: prev_key.0,
                to: key.0,
                kind,
                duration: edge.duration,
                distance_m: edge.distance_m,
            });
            key = prev_key;
        }
        hops.reverse();

        Path {
            origin,
            destination,
            hops,
            cost,
            transfers,
        }
    }
}
