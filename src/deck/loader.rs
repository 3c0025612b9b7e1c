//! Deck loading from JSON files
//!
//! A deck file is a JSON array of `{ id, question, answer, tags }` records.

use std::fs;
use std::path::Path;

use super::error::DeckLoadError;
use super::model::{Card, Deck};

impl Deck {
    /// Load a deck from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DeckLoadError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .map_err(|source| DeckLoadError::Read { path: path.to_path_buf(), source })?;

        let deck = Self::from_json(&contents).map_err(|e| match e {
            DeckLoadError::Json(source) => {
                DeckLoadError::Parse { path: path.to_path_buf(), source }
            }
            other => other,
        })?;

        tracing::info!(path = ?path, cards = deck.len(), "Loaded deck");
        Ok(deck)
    }

    /// Parse a deck from a JSON string
    pub fn from_json(json: &str) -> Result<Self, DeckLoadError> {
        let cards: Vec<Card> = serde_json::from_str(json).map_err(DeckLoadError::Json)?;
        Self::from_cards(cards)
    }
}
