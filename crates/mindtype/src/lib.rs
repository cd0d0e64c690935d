//! Personality assessment core: four-axis scoring, type catalog lookups, and
//! classification comparison, plus the session service that stores answers and results.

pub mod assessment;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod sessions;
pub mod telemetry;
