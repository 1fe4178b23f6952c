//! Domain types for the route planner.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod candidate;
mod connection;
mod error;
mod line;
mod stop;

pub use candidate::{RouteCandidate, count_transfers};
pub use connection::{Connection, Edge};
pub use error::DomainError;
pub use line::{InvalidLineId, LineId};
pub use stop::{InvalidStopId, StopId};
