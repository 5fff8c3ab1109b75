//! Report models for the cache simulator
//!
//! Defines the structures used to present a finished run as text or JSON.

pub mod report;

pub use report::{Report, RunMode, SectionReport};
