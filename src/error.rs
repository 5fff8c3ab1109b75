//! Error types for the cache simulator
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::Level;

// == Cache Error Enum ==
/// Unified error type for the cache simulator.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Element requested for removal is not in the set
    #[error("Element not found")]
    NotFound,

    /// Removal requested on an empty set
    #[error("Set is empty")]
    Empty,

    /// Cooperative lookup called with a peer of the wrong level
    #[error("Invalid peer level: a {this} cache cannot cooperate with a {peer} cache")]
    InvalidPeerLevel { this: Level, peer: Level },

    /// Rejected cache sizes or arguments
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Trace input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache simulator.
pub type Result<T> = std::result::Result<T, CacheError>;
