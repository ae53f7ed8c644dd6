use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Opaque unique identifier for a card.
///
/// Cards created on this board get a UUID v4; ids loaded from storage are
/// accepted verbatim, so older boards with short numeric ids keep working.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wraps an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the four fixed lanes on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl Lane {
    /// All lanes in board order, left to right
    pub const ALL: [Lane; 4] = [Lane::Backlog, Lane::Todo, Lane::Doing, Lane::Done];

    /// Identifier used in persisted data and drag payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Heading shown above the lane unless the board configures another
    pub fn default_title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Todo => "TODO",
            Self::Doing => "In progress",
            Self::Done => "Complete",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_title())
    }
}

impl FromStr for Lane {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(crate::error::BoardError::InvalidLane(s.to_string())),
        }
    }
}

/// A single task card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column: Lane,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>, column: Lane) -> Self {
        Self {
            id,
            title: title.into(),
            column,
        }
    }

    /// Returns a copy of this card relabelled to `lane`
    pub fn moved_to(&self, lane: Lane) -> Self {
        Self {
            column: lane,
            ..self.clone()
        }
    }
}
