//! Session data model

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deck::{Card, CardId};

/// How the user rated their recall of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Hard,
    Medium,
    Easy,
}

impl Rating {
    /// All ratings, from weakest to strongest recall
    pub const ALL: [Rating; 3] = [Rating::Hard, Rating::Medium, Rating::Easy];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Rating::Hard => "Hard",
            Rating::Medium => "Medium",
            Rating::Easy => "Easy",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session length mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SessionMode {
    /// Ends after `size` cards, no reinsertion
    Fixed { size: usize },
    /// Runs until the user ends it, rated cards are reinserted
    Unlimited,
}

impl SessionMode {
    /// Whether this is an Unlimited session
    pub fn is_unlimited(&self) -> bool {
        matches!(self, SessionMode::Unlimited)
    }
}

/// Configuration chosen on the home screen, fixed for the session's duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sections the user selected
    pub selected_tags: BTreeSet<String>,
    /// Session length mode
    pub mode: SessionMode,
}

impl SessionConfig {
    /// Create a Fixed-size session configuration
    pub fn fixed<I, S>(tags: I, size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_tags: tags.into_iter().map(Into::into).collect(),
            mode: SessionMode::Fixed { size },
        }
    }

    /// Create an Unlimited session configuration
    pub fn unlimited<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_tags: tags.into_iter().map(Into::into).collect(),
            mode: SessionMode::Unlimited,
        }
    }
}

/// One rating event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub card_id: CardId,
    pub rating: Rating,
}

/// Mutable state of a running session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Cards to review, in order
    pub queue: Vec<Card>,
    /// Cursor into `queue` (0-based)
    pub position: usize,
    /// Every rating given this session
    pub history: Vec<HistoryEntry>,
    /// Number of Easy ratings
    pub easy_count: usize,
}

impl SessionState {
    /// The card under the cursor, if any remain
    pub fn current_card(&self) -> Option<&Card> {
        self.queue.get(self.position)
    }
}

/// Completion report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub easy_count: usize,
    pub total_considered: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You marked {} of {} cards as Easy!", self.easy_count, self.total_considered)
    }
}
