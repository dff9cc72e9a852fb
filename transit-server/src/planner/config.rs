//! Configuration for the journey planner.

use chrono::Duration;

/// Configuration parameters for journey planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Penalty applied per transfer under the fewest-transfers
    /// criterion, in minutes-equivalent. Large enough that the search
    /// trades almost any detour for one fewer transfer.
    pub transfer_penalty_mins: i64,

    /// Penalty applied per transfer under the cheapest criterion,
    /// in minutes-equivalent.
    pub cost_penalty_mins: i64,

    /// Default transfer budget when a request does not specify one.
    pub default_max_transfers: usize,

    /// Hard upper bound on the transfer budget a request may ask for.
    pub max_transfers_limit: usize,
}

impl PlannerConfig {
    /// Returns the fewest-transfers penalty as a Duration.
    pub fn transfer_penalty(&self) -> Duration {
        Duration::minutes(self.transfer_penalty_mins)
    }

    /// Returns the cheapest-criterion penalty as a Duration.
    pub fn cost_penalty(&self) -> Duration {
        Duration::minutes(self.cost_penalty_mins)
    }

    /// Clamp a requested transfer budget to the allowed range.
    pub fn clamp_max_transfers(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_max_transfers)
            .min(self.max_transfers_limit)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            transfer_penalty_mins: 30,
            cost_penalty_mins: 5,
            default_max_transfers: 2,
            max_transfers_limit: 5,
        }
    }
}
