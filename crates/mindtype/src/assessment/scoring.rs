use super::answers::AnswerSet;
use super::axis::{Axis, Pole};
use super::classification::{Classification, Percentages, NEUTRAL_SHARE};
use super::questionnaire::{QuestionId, Questionnaire};
use crate::catalog::TypeCode;
use std::sync::Arc;

/// Stateless scorer bound to one questionnaire.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    questionnaire: Arc<Questionnaire>,
}

impl ScoringEngine {
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self { questionnaire }
    }

    pub fn standard() -> Self {
        Self::new(Arc::new(Questionnaire::standard()))
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn score(&self, answers: &AnswerSet) -> Result<Classification, ScoringError> {
        score(&self.questionnaire, answers)
    }
}

/// Converts a complete answer set into a type and per-axis split.
///
/// Each rating `v` credits `v` points to the question's positive pole and `6 - v` to the
/// opposite pole. The first pole of an axis wins exact ties, so an all-midpoint answer
/// set scores `ESTJ` at 50/50 on every axis. Ratings are range-checked when built, and
/// any question without a rating fails the whole call.
pub fn score(
    questionnaire: &Questionnaire,
    answers: &AnswerSet,
) -> Result<Classification, ScoringError> {
    let mut poles = [Pole::Extraversion; 4];
    let mut percentages = Percentages::new();

    for axis in Axis::ordered() {
        let mut tally = AxisTally::new(axis);
        for question in questionnaire.for_axis(axis) {
            let rating = answers
                .get(question.id)
                .ok_or(ScoringError::MissingAnswer {
                    question_id: question.id,
                })?;
            let (positive, negative) = rating.pole_points();
            tally.credit(question.positive_pole, positive);
            tally.credit(question.positive_pole.opposite(), negative);
        }

        poles[axis.index()] = tally.leader();
        percentages.insert_split(axis, tally.first_share());
    }

    Ok(Classification::from_parts(
        TypeCode::from_scored_poles(poles),
        percentages,
    ))
}

struct AxisTally {
    axis: Axis,
    first: u32,
    second: u32,
}

impl AxisTally {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            first: 0,
            second: 0,
        }
    }

    fn credit(&mut self, pole: Pole, points: u32) {
        if pole == self.axis.first_pole() {
            self.first += points;
        } else {
            self.second += points;
        }
    }

    fn leader(&self) -> Pole {
        if self.first >= self.second {
            self.axis.first_pole()
        } else {
            self.axis.second_pole()
        }
    }

    fn first_share(&self) -> f64 {
        let total = self.first + self.second;
        if total == 0 {
            return NEUTRAL_SHARE;
        }
        f64::from(self.first) / f64::from(total) * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("question {question_id} has no rating")]
    MissingAnswer { question_id: QuestionId },
}
