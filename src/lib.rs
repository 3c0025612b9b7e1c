//! flashdeck - A terminal flashcard trainer
//!
//! flashdeck loads a deck of tagged question/answer cards, lets you pick the
//! sections to study and a session size, then drives a review loop. Unlimited
//! sessions bring rated cards back after a rating-dependent number of cards.

pub mod app;
pub mod config;
pub mod deck;
pub mod session;
pub mod theme;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use deck::{Card, Deck};
pub use session::{Rating, SessionConfig, SessionState};
pub use theme::Theme;
