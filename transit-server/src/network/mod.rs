//! The static rail network: model, validation and the derived graph.
//!
//! The network model is configuration data: stations, per-line station
//! sequences and interchange declarations. It is validated once at
//! startup (a broken model produces silently wrong routes, so any
//! inconsistency is a fatal [`NetworkError`]) and then compiled into an
//! immutable weighted [`RailGraph`] shared by all requests.

mod graph;
mod model;
pub mod mumbai;

pub use graph::{EdgeKind, GraphConfig, RailEdge, RailGraph};
pub use model::{Interchange, LineRoute, NetworkError, NetworkModel};
