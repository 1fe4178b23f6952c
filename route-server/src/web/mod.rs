//! Web layer for the route planner.
//!
//! Provides the JSON HTTP endpoints for listing stops, planning routes
//! and querying shortest distances. The planning engine itself performs
//! no delivery; this module is the collaborator that does.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
