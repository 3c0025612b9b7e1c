//! Session transitions
//!
//! A session is started from a deck and a [`SessionConfig`], then advanced one
//! rating at a time. The caller checks [`SessionState::is_complete`] after
//! every rating and asks for a [`Summary`] once it is.

use rand::Rng;
use rand::seq::SliceRandom;

use super::error::SessionError;
use super::model::{HistoryEntry, Rating, SessionConfig, SessionMode, SessionState, Summary};
use super::policy::ReinsertionPolicy;
use crate::deck::Deck;

/// Result of rating the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateOutcome {
    /// Queue index the card was reinserted at (Unlimited only)
    pub reinserted_at: Option<usize>,
    /// Whether the session has run out of cards
    pub complete: bool,
}

impl SessionState {
    /// Build a new session queue from the cards matching the selected sections
    pub fn start<R: Rng + ?Sized>(
        deck: &Deck,
        config: &SessionConfig,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if config.selected_tags.is_empty() {
            return Err(SessionError::NoSectionsSelected);
        }

        let mut queue: Vec<_> =
            deck.filter_by_tags(&config.selected_tags).into_iter().cloned().collect();

        if let SessionMode::Fixed { size } = config.mode {
            if queue.len() < size {
                return Err(SessionError::InsufficientCards {
                    requested: size,
                    available: queue.len(),
                });
            }
        }

        // Fisher-Yates
        queue.shuffle(rng);

        if let SessionMode::Fixed { size } = config.mode {
            queue.truncate(size);
        }

        tracing::debug!(cards = queue.len(), mode = ?config.mode, "Session started");

        Ok(Self { queue, position: 0, history: Vec::new(), easy_count: 0 })
    }

    /// Record a rating for the current card and advance the cursor
    pub fn rate<R: Rng + ?Sized>(
        &mut self,
        config: &SessionConfig,
        rating: Rating,
        policy: &ReinsertionPolicy,
        rng: &mut R,
    ) -> Result<RateOutcome, SessionError> {
        if self.is_complete(config) {
            return Err(SessionError::SessionComplete);
        }
        let card = self.queue[self.position].clone();

        self.history.push(HistoryEntry { card_id: card.id.clone(), rating });
        if rating == Rating::Easy {
            self.easy_count += 1;
        }

        let reinserted_at = if config.mode.is_unlimited() {
            let offset = policy.offset_for(rating, rng);
            let index = self.position + offset;
            if index < self.queue.len() {
                self.queue.insert(index, card);
                Some(index)
            } else {
                self.queue.push(card);
                Some(self.queue.len() - 1)
            }
        } else {
            None
        };

        self.position += 1;

        Ok(RateOutcome { reinserted_at, complete: self.is_complete(config) })
    }

    /// Whether there are no more cards to review
    pub fn is_complete(&self, config: &SessionConfig) -> bool {
        match config.mode {
            SessionMode::Fixed { size } => {
                self.position >= size || self.position >= self.queue.len()
            }
            SessionMode::Unlimited => self.position >= self.queue.len(),
        }
    }

    /// Progress percentage; Unlimited sessions have no bound and always report 100
    pub fn progress(&self, config: &SessionConfig) -> f64 {
        match config.mode {
            SessionMode::Fixed { size: 0 } | SessionMode::Unlimited => 100.0,
            SessionMode::Fixed { size } => {
                (self.position as f64 / size as f64).min(1.0) * 100.0
            }
        }
    }

    /// Completion report
    pub fn complete(&self, config: &SessionConfig) -> Summary {
        let total_considered = match config.mode {
            SessionMode::Fixed { size } => size,
            SessionMode::Unlimited => self.history.len(),
        };
        Summary { easy_count: self.easy_count, total_considered }
    }
}
