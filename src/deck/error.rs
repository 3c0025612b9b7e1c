//! Error types for deck loading

use std::path::PathBuf;

use thiserror::Error;

use super::model::CardId;

/// Errors that can occur while loading a deck
#[derive(Debug, Error)]
pub enum DeckLoadError {
    /// The deck file could not be read
    #[error("Failed to read deck from {path:?}: {source}")]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The deck file is not a valid JSON card list
    #[error("Failed to parse deck {path:?}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Deck JSON given as a string is not a valid card list
    #[error("Failed to parse deck: {0}")]
    Json(#[source] serde_json::Error),

    /// Two cards share the same id
    #[error("Duplicate card id in deck: {0}")]
    DuplicateId(CardId),
}
