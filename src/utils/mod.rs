//! Utility modules shared across the crate.
//!
//! - [`datetime`] - Timestamp parsing and local calendar-day helpers

pub mod datetime;
