use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_server::cache::{PlanCache, PlanCacheConfig};
use transit_server::network::mumbai::mumbai;
use transit_server::network::{GraphConfig, RailGraph};
use transit_server::planner::{FareTable, PlannerConfig};
use transit_server::stations::StationDirectory;
use transit_server::timetable::StaticTimetable;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // An inconsistent network definition must stop the process here,
    // before it can serve a single request.
    let model = mumbai();
    let graph =
        RailGraph::build(&model, GraphConfig::default()).expect("network definition is invalid");
    info!(
        stations = graph.station_count(),
        edges = graph.edge_count(),
        "network graph built"
    );

    let directory = StationDirectory::from_model(&model);
    let timetable = StaticTimetable::from_model(&model);

    let state = AppState::new(
        graph,
        PlannerConfig::default(),
        FareTable::default(),
        timetable,
        directory,
        PlanCache::new(PlanCacheConfig::default()),
    );
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!(%addr, "journey planner listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listen address");
    axum::serve(listener, app).await.expect("server error");
}
