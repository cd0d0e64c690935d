use super::axis::{Axis, Pole};
use crate::catalog::TypeCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Share assumed for a pole when a stored split lacks it.
pub const NEUTRAL_SHARE: f64 = 50.0;

/// Per-axis percentage split, e.g. `{"E/I": {"E": 62.5, "I": 37.5}}`.
///
/// Splits produced by scoring always cover all four axes and sum to 100; splits
/// rehydrated from storage may be partial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentages(BTreeMap<Axis, BTreeMap<Pole, f64>>);

impl Percentages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `first_share` for the axis's first pole and the remainder for the second.
    pub fn insert_split(&mut self, axis: Axis, first_share: f64) {
        let (first, second) = axis.poles();
        let first_share = round_tenths(first_share);
        let mut split = BTreeMap::new();
        split.insert(first, first_share);
        split.insert(second, round_tenths(100.0 - first_share));
        self.0.insert(axis, split);
    }

    pub fn split(&self, axis: Axis) -> Option<&BTreeMap<Pole, f64>> {
        self.0.get(&axis)
    }

    pub fn share(&self, pole: Pole) -> Option<f64> {
        self.0
            .get(&pole.axis())
            .and_then(|split| split.get(&pole))
            .copied()
    }

    /// Share of the axis's first pole, [`NEUTRAL_SHARE`] when absent.
    pub fn first_pole_share(&self, axis: Axis) -> f64 {
        self.share(axis.first_pole()).unwrap_or(NEUTRAL_SHARE)
    }

    pub fn axes(&self) -> impl Iterator<Item = Axis> + '_ {
        self.0.keys().copied()
    }
}

/// Four-letter type plus the percentage split that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    type_code: TypeCode,
    percentages: Percentages,
}

impl Classification {
    /// Rebuilds a stored classification; scoring is the only producer of fresh ones.
    pub fn from_parts(type_code: TypeCode, percentages: Percentages) -> Self {
        Self {
            type_code,
            percentages,
        }
    }

    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    pub fn percentages(&self) -> &Percentages {
        &self.percentages
    }
}

/// One decimal, exact halves to even (`31.25` becomes `31.2`).
pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
