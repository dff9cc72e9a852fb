//! Search engine behaviour over small synthetic networks.
//!
//! Stations here have no coordinates, so every ride edge gets the
//! fallback distance: 2 km at 40 km/h, i.e. three minutes per hop.
//! That keeps expected costs easy to state exactly.

use chrono::Duration;

use crate::domain::{LineName, Station, StationCode};
use crate::network::{GraphConfig, Interchange, LineRoute, NetworkModel, RailGraph};

use super::config::PlannerConfig;
use super::search::{Criterion, HopKind, SearchEngine, SearchError};

fn code(s: &str) -> StationCode {
    StationCode::parse(s).unwrap()
}

fn station(c: &str) -> Station {
    Station {
        code: code(c),
        name: c.to_string(),
        lines: vec![],
        coordinates: None,
        zone: Some(1),
        distance_from_terminal: 0,
    }
}

fn graph(model: &NetworkModel) -> RailGraph {
    RailGraph::build(model, GraphConfig::default()).unwrap()
}

/// AA - BB - CC - DD on one line.
fn single_line() -> NetworkModel {
    NetworkModel {
        stations: ["AA", "BB", "CC", "DD"].map(station).to_vec(),
        routes: vec![LineRoute::new(
            "Red",
            vec![code("AA"), code("BB"), code("CC"), code("DD")],
        )],
        interchanges: vec![],
    }
}

/// Red: AA - BB - CC, Blue: DD - BB - EE, interchange at BB.
fn crossing_lines() -> NetworkModel {
    NetworkModel {
        stations: ["AA", "BB", "CC", "DD", "EE"].map(station).to_vec(),
        routes: vec![
            LineRoute::new("Red", vec![code("AA"), code("BB"), code("CC")]),
            LineRoute::new("Blue", vec![code("DD"), code("BB"), code("EE")]),
        ],
        interchanges: vec![Interchange {
            station: code("BB"),
            lines: vec![LineName::new("Red"), LineName::new("Blue")],
        }],
    }
}

/// A slow ten-hop direct line and a two-hop shortcut needing one
/// transfer at MM.
fn slow_direct_fast_shortcut() -> NetworkModel {
    let mids = ["CA", "CB", "CC", "CD", "CE", "CF", "CG", "CH", "CI"];
    let mut stations = vec![station("AA"), station("MM"), station("ZZ")];
    stations.extend(mids.map(station));

    let mut red = vec![code("AA")];
    red.extend(mids.map(code));
    red.push(code("ZZ"));

    NetworkModel {
        stations,
        routes: vec![
            LineRoute::new("Red", red),
            LineRoute::new("Blue", vec![code("AA"), code("MM")]),
            LineRoute::new("Green", vec![code("MM"), code("ZZ")]),
        ],
        interchanges: vec![Interchange {
            station: code("MM"),
            lines: vec![LineName::new("Blue"), LineName::new("Green")],
        }],
    }
}

#[test]
fn direct_route_on_one_line() {
    let g = graph(&single_line());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let path = engine
        .search(code("AA"), code("DD"), 2, Criterion::Time)
        .unwrap()
        .unwrap();

    assert_eq!(path.hops.len(), 3);
    assert_eq!(path.transfers, 0);
    assert_eq!(path.cost, Duration::minutes(9));
    assert_eq!(
        path.stations(),
        vec![code("AA"), code("BB"), code("CC"), code("DD")]
    );
    assert!(path
        .hops
        .iter()
        .all(|h| matches!(&h.kind, HopKind::Ride { line } if line.as_str() == "Red")));
}

#[test]
fn crossing_lines_costs_one_transfer() {
    let g = graph(&crossing_lines());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let path = engine
        .search(code("AA"), code("EE"), 2, Criterion::Time)
        .unwrap()
        .unwrap();

    assert_eq!(path.transfers, 1);
    // Ride 3, change line 10, ride 3
    assert_eq!(path.cost, Duration::minutes(16));
    assert_eq!(path.origin, code("AA"));
    assert_eq!(path.destination, code("EE"));
}

#[test]
fn zero_budget_rejects_any_line_change() {
    let g = graph(&crossing_lines());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let result = engine
        .search(code("AA"), code("EE"), 0, Criterion::Time)
        .unwrap();
    assert!(result.is_none());

    // Same-line travel is unaffected by a zero budget
    let direct = engine
        .search(code("AA"), code("CC"), 0, Criterion::Time)
        .unwrap();
    assert!(direct.is_some());
}

#[test]
fn two_changes_need_budget_two() {
    let model = NetworkModel {
        stations: ["AA", "BB", "CC", "DD"].map(station).to_vec(),
        routes: vec![
            LineRoute::new("Red", vec![code("AA"), code("BB")]),
            LineRoute::new("Blue", vec![code("BB"), code("CC")]),
            LineRoute::new("Green", vec![code("CC"), code("DD")]),
        ],
        interchanges: vec![
            Interchange {
                station: code("BB"),
                lines: vec![LineName::new("Red"), LineName::new("Blue")],
            },
            Interchange {
                station: code("CC"),
                lines: vec![LineName::new("Blue"), LineName::new("Green")],
            },
        ],
    };
    let g = graph(&model);
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let blocked = engine
        .search(code("AA"), code("DD"), 1, Criterion::Time)
        .unwrap();
    assert!(blocked.is_none());

    let allowed = engine
        .search(code("AA"), code("DD"), 2, Criterion::Time)
        .unwrap()
        .unwrap();
    assert_eq!(allowed.transfers, 2);
}

#[test]
fn transfer_criterion_trades_time_for_fewer_changes() {
    let g = graph(&slow_direct_fast_shortcut());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    // Shortcut: 3 + 10 + 3 = 16 minutes with one transfer.
    // Direct: ten hops, 30 minutes, no transfer.
    let fastest = engine
        .search(code("AA"), code("ZZ"), 2, Criterion::Time)
        .unwrap()
        .unwrap();
    assert_eq!(fastest.transfers, 1);
    assert_eq!(fastest.cost, Duration::minutes(16));

    // Under the transfer penalty the shortcut weighs 46 minutes, so
    // the direct line wins.
    let fewest = engine
        .search(code("AA"), code("ZZ"), 2, Criterion::Transfers)
        .unwrap()
        .unwrap();
    assert_eq!(fewest.transfers, 0);
    assert!(fewest
        .hops
        .iter()
        .all(|h| matches!(&h.kind, HopKind::Ride { line } if line.as_str() == "Red")));
}

#[test]
fn cost_criterion_penalty_is_mild() {
    let g = graph(&slow_direct_fast_shortcut());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    // 16 + 5 = 21 minutes weighted, still beating the 30-minute
    // direct line.
    let cheapest = engine
        .search(code("AA"), code("ZZ"), 2, Criterion::Cost)
        .unwrap()
        .unwrap();
    assert_eq!(cheapest.transfers, 1);
    assert_eq!(cheapest.cost, Duration::minutes(21));
}

#[test]
fn equal_cost_tie_breaks_deterministically() {
    // Two parallel two-hop routes of identical cost; the line whose
    // name sorts first wins the tie.
    let model = NetworkModel {
        stations: ["AA", "BB", "CC", "ZZ"].map(station).to_vec(),
        routes: vec![
            LineRoute::new("Red", vec![code("AA"), code("BB"), code("ZZ")]),
            LineRoute::new("Blue", vec![code("AA"), code("CC"), code("ZZ")]),
        ],
        interchanges: vec![],
    };
    let g = graph(&model);
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    for _ in 0..5 {
        let path = engine
            .search(code("AA"), code("ZZ"), 2, Criterion::Time)
            .unwrap()
            .unwrap();
        assert_eq!(path.stations(), vec![code("AA"), code("CC"), code("ZZ")]);
    }
}

#[test]
fn unknown_endpoints_are_errors() {
    let g = graph(&single_line());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let err = engine
        .search(code("QQ"), code("DD"), 2, Criterion::Time)
        .unwrap_err();
    assert_eq!(err, SearchError::UnknownStation(code("QQ")));

    let err = engine
        .search(code("AA"), code("QQ"), 2, Criterion::Time)
        .unwrap_err();
    assert_eq!(err, SearchError::UnknownStation(code("QQ")));
}

#[test]
fn origin_equals_destination_finds_nothing() {
    let g = graph(&single_line());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let result = engine
        .search(code("AA"), code("AA"), 2, Criterion::Time)
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn disconnected_stations_find_nothing() {
    let model = NetworkModel {
        stations: ["AA", "BB", "CC", "DD"].map(station).to_vec(),
        routes: vec![
            LineRoute::new("Red", vec![code("AA"), code("BB")]),
            LineRoute::new("Blue", vec![code("CC"), code("DD")]),
        ],
        interchanges: vec![],
    };
    let g = graph(&model);
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let result = engine
        .search(code("AA"), code("CC"), 5, Criterion::Time)
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn path_hops_chain_contiguously() {
    let g = graph(&crossing_lines());
    let config = PlannerConfig::default();
    let engine = SearchEngine::new(&g, &config);

    let path = engine
        .search(code("AA"), code("EE"), 2, Criterion::Time)
        .unwrap()
        .unwrap();

    assert_eq!(path.hops.first().unwrap().from, path.origin);
    assert_eq!(path.hops.last().unwrap().to, path.destination);
    for window in path.hops.windows(2) {
        assert_eq!(window[0].to, window[1].from);
    }
}
