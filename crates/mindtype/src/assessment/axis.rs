use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four bipolar dimensions, declared in letter order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(rename = "E/I")]
    Energy,
    #[serde(rename = "S/N")]
    Perception,
    #[serde(rename = "T/F")]
    Judgment,
    #[serde(rename = "J/P")]
    Lifestyle,
}

impl Axis {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Energy,
            Self::Perception,
            Self::Judgment,
            Self::Lifestyle,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Energy => 0,
            Self::Perception => 1,
            Self::Judgment => 2,
            Self::Lifestyle => 3,
        }
    }

    /// Both poles; the first one wins score ties.
    pub const fn poles(self) -> (Pole, Pole) {
        match self {
            Self::Energy => (Pole::Extraversion, Pole::Introversion),
            Self::Perception => (Pole::Sensing, Pole::Intuition),
            Self::Judgment => (Pole::Thinking, Pole::Feeling),
            Self::Lifestyle => (Pole::Judging, Pole::Perceiving),
        }
    }

    pub const fn first_pole(self) -> Pole {
        self.poles().0
    }

    pub const fn second_pole(self) -> Pole {
        self.poles().1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Energy => "E/I",
            Self::Perception => "S/N",
            Self::Judgment => "T/F",
            Self::Lifestyle => "J/P",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Perception => "Perception",
            Self::Judgment => "Judgment",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One end of an axis, serialized as its single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pole {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "I")]
    Introversion,
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl Pole {
    pub const fn axis(self) -> Axis {
        match self {
            Self::Extraversion | Self::Introversion => Axis::Energy,
            Self::Sensing | Self::Intuition => Axis::Perception,
            Self::Thinking | Self::Feeling => Axis::Judgment,
            Self::Judging | Self::Perceiving => Axis::Lifestyle,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Extraversion => Self::Introversion,
            Self::Introversion => Self::Extraversion,
            Self::Sensing => Self::Intuition,
            Self::Intuition => Self::Sensing,
            Self::Thinking => Self::Feeling,
            Self::Feeling => Self::Thinking,
            Self::Judging => Self::Perceiving,
            Self::Perceiving => Self::Judging,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Extraversion => 'E',
            Self::Introversion => 'I',
            Self::Sensing => 'S',
            Self::Intuition => 'N',
            Self::Thinking => 'T',
            Self::Feeling => 'F',
            Self::Judging => 'J',
            Self::Perceiving => 'P',
        }
    }

    /// Case-insensitive letter lookup.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'E' => Some(Self::Extraversion),
            'I' => Some(Self::Introversion),
            'S' => Some(Self::Sensing),
            'N' => Some(Self::Intuition),
            'T' => Some(Self::Thinking),
            'F' => Some(Self::Feeling),
            'J' => Some(Self::Judging),
            'P' => Some(Self::Perceiving),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Extraversion => "Extraversion",
            Self::Introversion => "Introversion",
            Self::Sensing => "Sensing",
            Self::Intuition => "Intuition",
            Self::Thinking => "Thinking",
            Self::Feeling => "Feeling",
            Self::Judging => "Judging",
            Self::Perceiving => "Perceiving",
        }
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
