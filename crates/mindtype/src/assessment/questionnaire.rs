use super::axis::{Axis, Pole};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use standard_items::STANDARD_ITEMS;

/// Identifier of a questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u16);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A statement rated on the Likert scale, agreeing with `positive_pole`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "dimension")]
    pub axis: Axis,
    pub positive_pole: Pole,
    pub text: String,
}

/// Validated, immutable set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Checks ids are unique, poles belong to their axis, and no axis is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        let mut seen = BTreeSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(QuestionnaireError::DuplicateQuestion(question.id));
            }
            if question.positive_pole.axis() != question.axis {
                return Err(QuestionnaireError::PoleOutsideAxis {
                    id: question.id,
                    axis: question.axis,
                    pole: question.positive_pole,
                });
            }
        }

        for axis in Axis::ordered() {
            if !questions.iter().any(|question| question.axis == axis) {
                return Err(QuestionnaireError::EmptyAxis(axis));
            }
        }

        Ok(Self { questions })
    }

    /// The built-in 48 item instrument, twelve per axis.
    pub fn standard() -> Self {
        let questions = STANDARD_ITEMS
            .iter()
            .map(|(id, pole, text)| Question {
                id: QuestionId(*id),
                axis: pole.axis(),
                positive_pole: *pole,
                text: (*text).to_string(),
            })
            .collect();

        Self { questions }
    }

    /// Reads `id,axis,positive_pole,text` rows.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionnaireError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions = Vec::new();
        for row in csv_reader.deserialize::<QuestionRow>() {
            let row = row?;
            questions.push(Question {
                id: row.id,
                axis: row.axis,
                positive_pole: row.positive_pole,
                text: row.text,
            });
        }

        Self::new(questions)
    }

    pub fn from_path(path: &Path) -> Result<Self, QuestionnaireError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.iter().any(|question| question.id == id)
    }

    pub fn for_axis(&self, axis: Axis) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |question| question.axis == axis)
    }
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: QuestionId,
    axis: Axis,
    positive_pole: Pole,
    text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("failed to read questionnaire: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed questionnaire row: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {0} is defined more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {id} declares pole {pole} which does not belong to axis {axis}")]
    PoleOutsideAxis { id: QuestionId, axis: Axis, pole: Pole },
    #[error("axis {0} has no questions")]
    EmptyAxis(Axis),
}

mod standard_items {
    use super::Pole;
    use super::Pole::{
        Extraversion as E, Feeling as F, Introversion as I, Intuition as N, Judging as J,
        Perceiving as P, Sensing as S, Thinking as T,
    };

    pub(super) const STANDARD_ITEMS: [(u16, Pole, &str); 48] = [
        (1, E, "I feel energized after spending time with a large group of people."),
        (2, I, "I prefer to recharge by spending time alone."),
        (3, E, "I find it easy to start conversations with strangers."),
        (4, I, "I think carefully before I speak up in a group."),
        (5, E, "I enjoy being the center of attention at social events."),
        (6, I, "I prefer deep one-on-one conversations to group discussions."),
        (7, E, "I tend to think out loud when working through a problem."),
        (8, I, "A quiet evening at home sounds better than a night out."),
        (9, E, "I get to know new colleagues or classmates quickly."),
        (10, I, "I need time to myself after a busy social day."),
        (11, E, "I like working in lively, busy environments."),
        (12, I, "I keep my feelings to myself until I know someone well."),
        (13, S, "I trust facts and direct experience more than hunches."),
        (14, N, "I often think about what the future could look like."),
        (15, S, "I prefer clear, step-by-step instructions."),
        (16, N, "I enjoy exploring abstract ideas and theories."),
        (17, S, "I notice small practical details that others miss."),
        (18, N, "I often read between the lines to find hidden meanings."),
        (19, S, "I prefer proven methods over untested new approaches."),
        (20, N, "Routine work that leaves no room for imagination bores me."),
        (21, S, "I describe things literally and concretely."),
        (22, N, "I like to connect ideas from very different fields."),
        (23, S, "I focus on what is happening now rather than what might happen."),
        (24, N, "I trust my intuition even when I cannot explain it."),
        (25, T, "I make decisions based on logic rather than feelings."),
        (26, F, "I consider how a decision will affect other people's feelings."),
        (27, T, "I value honesty over tact when giving feedback."),
        (28, F, "Keeping harmony in a group matters a lot to me."),
        (29, T, "I enjoy analyzing problems objectively."),
        (30, F, "I am easily moved by other people's stories."),
        (31, T, "Fairness means applying the same rules to everyone."),
        (32, F, "I would rather be kind than be right."),
        (33, T, "I can criticize an idea without worrying about hurt feelings."),
        (34, F, "I make choices that reflect my personal values."),
        (35, T, "Efficiency matters more to me than everyone feeling included."),
        (36, F, "I find it easy to empathize with people who disagree with me."),
        (37, J, "I like to plan my days in advance."),
        (38, P, "I prefer to keep my options open rather than commit early."),
        (39, J, "I finish tasks well before their deadlines."),
        (40, P, "I work best in bursts of energy close to a deadline."),
        (41, J, "I feel uneasy when plans change at the last minute."),
        (42, P, "I enjoy spontaneous trips and unplanned activities."),
        (43, J, "I keep my workspace organized and tidy."),
        (44, P, "I often start new projects before finishing old ones."),
        (45, J, "I like to make decisions quickly and move on."),
        (46, P, "Rules and schedules feel restrictive to me."),
        (47, J, "I make to-do lists and follow them."),
        (48, P, "I adapt easily when things do not go as expected."),
    ];
}
