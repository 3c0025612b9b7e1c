//! Reinsertion offsets for Unlimited sessions
//!
//! A rated card goes back into the queue a random number of cards ahead of
//! the cursor. Weak recall comes back sooner than strong recall.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::SessionError;
use super::model::Rating;

/// Inclusive range of queue offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetRange {
    pub min: usize,
    pub max: usize,
}

impl OffsetRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Draw an offset uniformly from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }

    /// Whether `offset` lies in the range
    pub fn contains(&self, offset: usize) -> bool {
        (self.min..=self.max).contains(&offset)
    }
}

/// Offset ranges per rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReinsertionPolicy {
    pub hard: OffsetRange,
    pub medium: OffsetRange,
    pub easy: OffsetRange,
}

impl ReinsertionPolicy {
    pub const DEFAULT_HARD: OffsetRange = OffsetRange::new(10, 15);
    pub const DEFAULT_MEDIUM: OffsetRange = OffsetRange::new(25, 30);
    pub const DEFAULT_EASY: OffsetRange = OffsetRange::new(45, 50);

    /// Range used for a rating
    pub fn range_for(&self, rating: Rating) -> OffsetRange {
        match rating {
            Rating::Hard => self.hard,
            Rating::Medium => self.medium,
            Rating::Easy => self.easy,
        }
    }

    /// Draw a reinsertion offset for a rating
    pub fn offset_for<R: Rng + ?Sized>(&self, rating: Rating, rng: &mut R) -> usize {
        self.range_for(rating).sample(rng)
    }

    /// Check every range is non-empty and lands after the cursor
    pub fn validate(&self) -> Result<(), SessionError> {
        for rating in Rating::ALL {
            let range = self.range_for(rating);
            if range.min == 0 || range.min > range.max {
                return Err(SessionError::InvalidOffsetRange {
                    rating,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for ReinsertionPolicy {
    fn default() -> Self {
        Self {
            hard: Self::DEFAULT_HARD,
            medium: Self::DEFAULT_MEDIUM,
            easy: Self::DEFAULT_EASY,
        }
    }
}
