//! Errors raised by session transitions

use thiserror::Error;

use super::model::Rating;

/// Errors that can occur when starting or advancing a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No sections were selected
    #[error("Please select at least one section")]
    NoSectionsSelected,

    /// Fixed session size exceeds the matching card count
    #[error(
        "Not enough cards in selected sections: {requested} requested, {available} available"
    )]
    InsufficientCards {
        /// Requested session size
        requested: usize,
        /// Cards matching the selected sections
        available: usize,
    },

    /// A rating arrived after the session ran out of cards
    #[error("Session is already complete")]
    SessionComplete,

    /// A reinsertion offset range is empty or would land on the cursor
    #[error("Invalid {rating} reinsertion range {min}..={max}: need 1 <= min <= max")]
    InvalidOffsetRange {
        /// Rating the range belongs to
        rating: Rating,
        /// Lower bound
        min: usize,
        /// Upper bound
        max: usize,
    },
}
