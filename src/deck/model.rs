//! Card and deck model
//!
//! Cards are immutable once loaded and are identified by their id. The deck
//! keeps cards in file order, which is also the order sections are offered in.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DeckLoadError;

/// Card identifier, either numeric or textual in the deck file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardId::Number(n) => write!(f, "{}", n),
            CardId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for CardId {
    fn from(value: u64) -> Self {
        CardId::Number(value)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        CardId::Text(value.to_string())
    }
}

/// A single question/answer card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier
    pub id: CardId,
    /// Front of the card
    pub question: String,
    /// Back of the card
    pub answer: String,
    /// Section labels, in file order without duplicates
    pub tags: Vec<String>,
}

impl Card {
    /// Create a new card
    pub fn new(
        id: impl Into<CardId>,
        question: impl Into<String>,
        answer: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Check whether this card carries any of the given tags
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|t| tags.contains(t))
    }
}

/// An ordered, read-only collection of cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck, rejecting duplicate ids and dropping untagged cards
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckLoadError> {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(cards.len());

        for mut card in cards {
            if !seen.insert(card.id.clone()) {
                return Err(DeckLoadError::DuplicateId(card.id));
            }

            let mut tag_seen = HashSet::new();
            card.tags.retain(|t| !t.is_empty() && tag_seen.insert(t.clone()));

            if card.tags.is_empty() {
                tracing::warn!(card_id = %card.id, "Dropping card without tags");
                continue;
            }
            kept.push(card);
        }

        Ok(Self { cards: kept })
    }

    /// All cards in deck order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct section tags in first-seen order
    pub fn sections(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .flat_map(|c| c.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }

    /// Number of cards carrying each section tag, in first-seen order
    pub fn section_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for tag in self.cards.iter().flat_map(|c| c.tags.iter()) {
            *counts.entry(tag.as_str()).or_default() += 1;
        }

        self.sections()
            .into_iter()
            .map(|tag| {
                let count = counts.get(tag.as_str()).copied().unwrap_or(0);
                (tag, count)
            })
            .collect()
    }

    /// Cards whose tags intersect `tags`, in deck order
    pub fn filter_by_tags(&self, tags: &BTreeSet<String>) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.has_any_tag(tags)).collect()
    }
}
