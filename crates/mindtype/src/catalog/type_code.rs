use crate::assessment::{Axis, Pole};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A four-letter type: one pole per axis, in axis order.
///
/// Every string entering the system as a type goes through [`TypeCode::parse`], which
/// trims and upper-cases the input before checking it against the sixteen valid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeCode([Pole; 4]);

impl TypeCode {
    pub fn parse(input: &str) -> Result<Self, InvalidType> {
        let invalid = || InvalidType {
            input: input.to_string(),
        };

        let normalized = input.trim().to_ascii_uppercase();
        let letters: Vec<char> = normalized.chars().collect();
        if letters.len() != 4 {
            return Err(invalid());
        }

        let mut poles = [Pole::Extraversion; 4];
        for (slot, (axis, letter)) in Axis::ordered().into_iter().zip(letters).enumerate() {
            let pole = Pole::from_letter(letter).ok_or_else(invalid)?;
            if pole.axis() != axis {
                return Err(invalid());
            }
            poles[slot] = pole;
        }

        Ok(Self(poles))
    }

    /// Returns `None` unless pole `i` belongs to axis `i`.
    pub fn from_poles(poles: [Pole; 4]) -> Option<Self> {
        Axis::ordered()
            .into_iter()
            .zip(poles)
            .all(|(axis, pole)| pole.axis() == axis)
            .then_some(Self(poles))
    }

    /// Poles picked per axis by the scorer, already in axis order.
    pub(crate) fn from_scored_poles(poles: [Pole; 4]) -> Self {
        debug_assert!(Self::from_poles(poles).is_some());
        Self(poles)
    }

    /// All sixteen codes, first poles before second poles on every axis.
    pub fn all() -> Vec<Self> {
        (0u8..16)
            .map(|bits| {
                let mut poles = [Pole::Extraversion; 4];
                for axis in Axis::ordered() {
                    let second = bits & (0b1000 >> axis.index()) != 0;
                    poles[axis.index()] = if second {
                        axis.second_pole()
                    } else {
                        axis.first_pole()
                    };
                }
                Self(poles)
            })
            .collect()
    }

    pub fn poles(self) -> [Pole; 4] {
        self.0
    }

    pub fn pole(self, axis: Axis) -> Pole {
        self.0[axis.index()]
    }

    /// Number of axes on which both codes pick the same pole.
    pub fn shared_axes(self, other: Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(left, right)| left == right)
            .count()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pole in self.0 {
            write!(f, "{}", pole.letter())?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = InvalidType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Serialize for TypeCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Input that is not one of the sixteen type codes, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid personality type: {input}")]
pub struct InvalidType {
    pub input: String,
}
