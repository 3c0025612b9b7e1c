//! Flashcard decks
//!
//! A deck is loaded once at startup and is read-only for the session logic.

pub mod error;
pub mod loader;
pub mod model;

pub use error::DeckLoadError;
pub use model::{Card, CardId, Deck};
