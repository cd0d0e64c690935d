use crate::assessment::Axis;
use crate::catalog::{CatalogError, TypeCode};
use serde::{Deserialize, Serialize};

/// Relationship bucket derived from how many axes two types share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipCategory {
    Ideal,
    Complementary,
    Challenging,
}

impl RelationshipCategory {
    pub const fn from_shared_axes(shared: usize) -> Self {
        match shared {
            3.. => Self::Ideal,
            2 => Self::Complementary,
            _ => Self::Challenging,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal",
            Self::Complementary => "Complementary",
            Self::Challenging => "Challenging",
        }
    }

    fn strategy_lines(self) -> [&'static str; 2] {
        match self {
            Self::Ideal => [
                "Use your shared outlook to build deep mutual understanding",
                "Check each other for blind spots you both tend to overlook",
            ],
            Self::Complementary => [
                "Acknowledge each other's strengths and divide roles accordingly",
                "Treat your differences as coverage rather than conflict",
            ],
            Self::Challenging => [
                "Take a breather during conflict and return to the conversation later",
                "Avoid rushing to conclusions and respect how the other person processes",
            ],
        }
    }

    fn long_term_tips(self) -> [&'static str; 3] {
        match self {
            Self::Ideal => [
                "Keep familiarity from turning stale by seeking out new experiences together",
                "Set aside regular time for honest conversations about the relationship",
                "Build shared goals on top of your common values",
            ],
            Self::Complementary => [
                "Make room for each person to contribute in their own way",
                "Divide responsibilities, but stay flexible enough to swap when needed",
                "When differences cause friction, talk from the point of view of the two of you together",
            ],
            Self::Challenging => [
                "Agree in advance how you will communicate around known friction points",
                "Balance time alone and time together in a way that respects both needs",
                "Pause when emotions run high and resume once both of you are calm",
            ],
        }
    }
}

const BASE_STRATEGY: [&str; 2] = [
    "Try to understand the other person's perspective first",
    "Distinguish between moments for sharing facts and moments for sharing feelings",
];

const SIMILARITY_NOTE: &str =
    "Very similar preferences keep conflict low, but you may narrow each other's view";

/// Full compatibility read-out for an ordered pair of types.
///
/// Category and `shared_axes` do not depend on argument order. Conflict wording and the
/// echoed codes do: `type_a`'s pole is always named first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipAnalysis {
    pub type_a: TypeCode,
    pub type_b: TypeCode,
    pub category: RelationshipCategory,
    pub category_label: &'static str,
    pub shared_axes: usize,
    pub conflict_points: Vec<String>,
    pub communication_strategy: Vec<&'static str>,
    pub long_term_tips: Vec<&'static str>,
}

/// Validates both inputs and compares them.
pub fn relationship(type_a: &str, type_b: &str) -> Result<RelationshipAnalysis, CatalogError> {
    let type_a = TypeCode::parse(type_a)?;
    let type_b = TypeCode::parse(type_b)?;
    Ok(analyze(type_a, type_b))
}

pub fn analyze(type_a: TypeCode, type_b: TypeCode) -> RelationshipAnalysis {
    let shared_axes = type_a.shared_axes(type_b);
    let category = RelationshipCategory::from_shared_axes(shared_axes);

    RelationshipAnalysis {
        type_a,
        type_b,
        category,
        category_label: category.label(),
        shared_axes,
        conflict_points: conflict_points(type_a, type_b),
        communication_strategy: BASE_STRATEGY
            .iter()
            .chain(category.strategy_lines().iter())
            .copied()
            .collect(),
        long_term_tips: category.long_term_tips().to_vec(),
    }
}

fn conflict_points(type_a: TypeCode, type_b: TypeCode) -> Vec<String> {
    let conflicts: Vec<String> = Axis::ordered()
        .into_iter()
        .filter_map(|axis| {
            let (pole_a, pole_b) = (type_a.pole(axis), type_b.pole(axis));
            (pole_a != pole_b).then(|| {
                format!(
                    "{} ({}): one side leans {} ({}), the other leans {} ({}); expect disagreements here",
                    axis.name(),
                    axis.label(),
                    pole_a.letter(),
                    pole_a.label(),
                    pole_b.letter(),
                    pole_b.label(),
                )
            })
        })
        .collect();

    if conflicts.is_empty() {
        vec![SIMILARITY_NOTE.to_string()]
    } else {
        conflicts
    }
}
