//! Pairwise comparison of classifications: relationship category and axis drift.

mod drift;
mod relationship;

pub use drift::{axis_drift, AxisDrift, DriftReport};
pub use relationship::{analyze, relationship, RelationshipAnalysis, RelationshipCategory};
