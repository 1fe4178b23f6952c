//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from loader and web-layer errors.

use super::StopId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no stops
    #[error("route must visit at least one stop")]
    EmptyRoute,

    /// Line sequence length doesn't match the stop sequence
    #[error("route of {stops} stops has {lines} line entries, expected one per hop")]
    LinesMismatch {
        /// Number of stops in the route
        stops: usize,
        /// Number of line entries supplied
        lines: usize,
    },

    /// A stop appears more than once in the route
    #[error("stop {0} is visited more than once")]
    RepeatedStop(StopId),
}
