//! Gesture names and the label-to-gesture mapping

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The three playable hand shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
}

impl Gesture {
    pub const ALL: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    pub const fn name(self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
        }
    }

    /// Capitalized name for on-screen text
    pub const fn title(self) -> &'static str {
        match self {
            Gesture::Rock => "Rock",
            Gesture::Paper => "Paper",
            Gesture::Scissors => "Scissors",
        }
    }

    /// The gesture this one defeats
    pub const fn beats(self) -> Gesture {
        match self {
            Gesture::Rock => Gesture::Scissors,
            Gesture::Paper => Gesture::Rock,
            Gesture::Scissors => Gesture::Paper,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of mapping a classifier label: a known gesture or nothing recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recognition {
    Known(Gesture),
    Unknown,
}

impl Recognition {
    pub const UNKNOWN_NAME: &'static str = "unknown";

    pub fn name(&self) -> &'static str {
        match self {
            Recognition::Known(gesture) => gesture.name(),
            Recognition::Unknown => Self::UNKNOWN_NAME,
        }
    }

    pub fn gesture(&self) -> Option<Gesture> {
        match self {
            Recognition::Known(gesture) => Some(*gesture),
            Recognition::Unknown => None,
        }
    }
}

impl fmt::Display for Recognition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which training labels count as which gesture.
///
/// Serialized as a JSON object, e.g. `{"0": "rock", "5": "paper", "9": "scissors"}`.
/// Labels not in the map resolve to [`Recognition::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureMap(BTreeMap<i32, Gesture>);

impl Default for GestureMap {
    /// Fist, open palm and victory sign of the reference gesture table
    fn default() -> Self {
        Self(BTreeMap::from([
            (0, Gesture::Rock),
            (5, Gesture::Paper),
            (9, Gesture::Scissors),
        ]))
    }
}

impl GestureMap {
    pub fn new(entries: impl IntoIterator<Item = (i32, Gesture)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub fn resolve(&self, label: i32) -> Recognition {
        self.0
            .get(&label)
            .map_or(Recognition::Unknown, |g| Recognition::Known(*g))
    }

    pub fn labels(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.keys().copied()
    }
}
