//! Trace Cache - A two-level LRU cache simulator
//!
//! Replays word traces through one or two LRU cache levels and reports hit
//! statistics.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod simulator;

pub use cache::{Level, OrderedSet, TieredCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use models::Report;
pub use simulator::{Outcome, Simulator};
