//! Questionnaire model and the scoring engine that turns ratings into a classification.

mod answers;
mod axis;
mod classification;
mod questionnaire;
mod scoring;

pub use answers::{AnswerFileError, AnswerSet, InvalidRating, Rating};
pub use axis::{Axis, Pole};
pub(crate) use classification::round_tenths;
pub use classification::{Classification, Percentages, NEUTRAL_SHARE};
pub use questionnaire::{Question, QuestionId, Questionnaire, QuestionnaireError};
pub use scoring::{score, ScoringEngine, ScoringError};
