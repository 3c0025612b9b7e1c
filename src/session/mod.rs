//! Session management: queue building, rating, and spaced reinsertion
//!
//! # Components
//! - `model.rs`: session configuration, state, ratings and summaries
//! - `manager.rs`: start/rate/progress/complete transitions
//! - `policy.rs`: reinsertion offset ranges for Unlimited sessions
//! - `error.rs`: errors raised by session transitions

pub mod error;
pub mod manager;
pub mod model;
pub mod policy;

pub use error::SessionError;
pub use manager::RateOutcome;
pub use model::{HistoryEntry, Rating, SessionConfig, SessionMode, SessionState, Summary};
pub use policy::{OffsetRange, ReinsertionPolicy};
