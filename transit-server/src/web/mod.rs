//! Web layer for the journey planner.
//!
//! Provides HTTP endpoints for station search and journey planning.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
