//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::PlanCache;
use crate::network::RailGraph;
use crate::planner::{FareTable, PlannerConfig};
use crate::stations::StationDirectory;
use crate::timetable::TimetableProvider;

/// Shared application state.
///
/// Everything in here is immutable after startup, so handlers share it
/// freely across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Compiled rail network graph
    pub graph: Arc<RailGraph>,

    /// Journey planner configuration
    pub config: Arc<PlannerConfig>,

    /// Fare table
    pub fares: Arc<FareTable>,

    /// Departure schedule source
    pub timetable: Arc<dyn TimetableProvider>,

    /// Station lookup and free-text resolution
    pub directory: Arc<StationDirectory>,

    /// Cache of planned journeys
    pub cache: Arc<PlanCache>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graph: RailGraph,
        config: PlannerConfig,
        fares: FareTable,
        timetable: impl TimetableProvider + 'static,
        directory: StationDirectory,
        cache: PlanCache,
    ) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
            fares: Arc::new(fares),
            timetable: Arc::new(timetable),
            directory: Arc::new(directory),
            cache: Arc::new(cache),
        }
    }
}
