use super::questionnaire::{QuestionId, Questionnaire};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Likert rating on the closed range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const MIDPOINT: Rating = Rating(3);

    pub fn new(value: u8) -> Result<Self, InvalidRating> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidRating { value })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Points credited to the question's positive pole and to the opposite pole.
    /// The pair always sums to `MIN + MAX`.
    pub const fn pole_points(self) -> (u32, u32) {
        let value = self.0 as u32;
        (value, (Self::MIN + Self::MAX) as u32 - value)
    }

    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating {value} is outside 1..=5")]
pub struct InvalidRating {
    pub value: u8,
}

/// Ratings keyed by question; may be partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    ratings: BTreeMap<QuestionId, Rating>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every question of `questionnaire` with the same rating.
    pub fn filled(questionnaire: &Questionnaire, rating: Rating) -> Self {
        questionnaire
            .questions()
            .iter()
            .map(|question| (question.id, rating))
            .collect()
    }

    pub fn insert(&mut self, id: QuestionId, rating: Rating) -> Option<Rating> {
        self.ratings.insert(id, rating)
    }

    pub fn get(&self, id: QuestionId) -> Option<Rating> {
        self.ratings.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Rating)> + '_ {
        self.ratings.iter().map(|(id, rating)| (*id, *rating))
    }

    /// Questions of `questionnaire` that have no rating yet, in questionnaire order.
    pub fn missing(&self, questionnaire: &Questionnaire) -> Vec<QuestionId> {
        questionnaire
            .questions()
            .iter()
            .map(|question| question.id)
            .filter(|id| !self.ratings.contains_key(id))
            .collect()
    }

    pub fn is_complete_for(&self, questionnaire: &Questionnaire) -> bool {
        self.missing(questionnaire).is_empty()
    }

    /// Reads `question_id,value` rows; later rows overwrite earlier ones.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, AnswerFileError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = Self::new();
        for row in csv_reader.deserialize::<AnswerRow>() {
            let row = row?;
            let rating = Rating::new(row.value).map_err(|source| AnswerFileError::Rating {
                question_id: row.question_id,
                source,
            })?;
            answers.insert(row.question_id, rating);
        }

        Ok(answers)
    }
}

impl FromIterator<(QuestionId, Rating)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Rating)>>(iter: T) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: QuestionId,
    value: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerFileError {
    #[error("malformed answer row: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {question_id}: {source}")]
    Rating {
        question_id: QuestionId,
        source: InvalidRating,
    },
}
