use crate::assessment::{round_tenths, Axis, Classification, Pole};
use crate::catalog::TypeCode;
use serde::Serialize;
use std::collections::BTreeMap;

/// Movement on one axis between two classifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisDrift {
    pub axis: Axis,
    /// Change in the first pole's share, `after - before`, one decimal.
    pub change: f64,
    pub before: BTreeMap<Pole, f64>,
    pub after: BTreeMap<Pole, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftReport {
    pub type_before: TypeCode,
    pub type_after: TypeCode,
    pub type_changed: bool,
    pub axes: Vec<AxisDrift>,
}

/// Per-axis change from `before` to `after`, in axis order.
///
/// Missing shares count as 50 so partially stored records still compare.
pub fn axis_drift(before: &Classification, after: &Classification) -> DriftReport {
    let axes = Axis::ordered()
        .into_iter()
        .map(|axis| {
            let was = before.percentages().first_pole_share(axis);
            let now = after.percentages().first_pole_share(axis);
            AxisDrift {
                axis,
                change: round_tenths(now - was),
                before: before
                    .percentages()
                    .split(axis)
                    .cloned()
                    .unwrap_or_default(),
                after: after.percentages().split(axis).cloned().unwrap_or_default(),
            }
        })
        .collect();

    DriftReport {
        type_before: before.type_code(),
        type_after: after.type_code(),
        type_changed: before.type_code() != after.type_code(),
        axes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::Percentages;

    fn classification(code: &str, shares: &[(Axis, f64)]) -> Classification {
        let mut percentages = Percentages::new();
        for (axis, share) in shares {
            percentages.insert_split(*axis, *share);
        }
        Classification::from_parts(TypeCode::parse(code).expect("valid"), percentages)
    }

    #[test]
    fn reports_signed_first_pole_change() {
        let before = classification("ESTJ", &[(Axis::Energy, 58.3), (Axis::Judgment, 50.0)]);
        let after = classification("ISTJ", &[(Axis::Energy, 41.7), (Axis::Judgment, 66.7)]);

        let report = axis_drift(&before, &after);

        assert!(report.type_changed);
        assert_eq!(report.axes.len(), 4);
        assert_eq!(report.axes[0].axis, Axis::Energy);
        assert_eq!(report.axes[0].change, -16.6);
        assert_eq!(report.axes[2].change, 16.7);
        assert_eq!(report.axes[0].before.get(&Pole::Extraversion), Some(&58.3));
    }

    #[test]
    fn missing_axes_default_to_even_split() {
        let before = classification("ESTJ", &[]);
        let after = classification("ESTP", &[(Axis::Lifestyle, 25.0)]);

        let report = axis_drift(&before, &after);

        assert_eq!(report.axes[1].change, 0.0);
        assert_eq!(report.axes[3].change, -25.0);
        assert!(report.axes[3].before.is_empty());
    }
}
