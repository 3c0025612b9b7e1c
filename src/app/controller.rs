//! Action dispatch
//!
//! [`reduce`] is the pure transition from one [`AppState`] to the next. The
//! [`Controller`] owns the state, runs the reducer and then performs the
//! returned effects through the snapshot port. Rendering happens elsewhere.

use rand::Rng;

use super::input::Action;
use super::state::{ActiveSession, AppState, HomeState, Screen, StatusLine};
use crate::config::Config;
use crate::config::snapshot::SnapshotStore;
use crate::deck::{Deck, DeckLoadError};
use crate::session::{Rating, ReinsertionPolicy, SessionState, Summary};

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Persist the active session
    SaveSnapshot,
    /// Remove the persisted session
    ClearSnapshot,
    /// Leave the application
    Quit,
}

/// Result of applying one action
#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Read-only inputs and randomness available to the reducer
pub struct Env<'a, R: ?Sized> {
    pub deck: &'a Deck,
    pub policy: &'a ReinsertionPolicy,
    pub rng: &'a mut R,
}

/// Apply an action to the application state
pub fn reduce<R: Rng + ?Sized>(
    mut state: AppState,
    action: Action,
    env: &mut Env<'_, R>,
) -> Transition {
    let mut effects = Vec::new();

    if action == Action::Quit {
        effects.push(Effect::Quit);
        return Transition { state, effects };
    }

    state.screen = match std::mem::take(&mut state.screen) {
        Screen::Home => {
            on_home(&mut state.home, &mut state.status, action, env, &mut effects)
        }
        Screen::Study(session) => on_study(session, &mut state.status, action, env, &mut effects),
        Screen::Completed(summary) => on_completed(summary, &mut state.status, action),
    };

    Transition { state, effects }
}

fn on_home<R: Rng + ?Sized>(
    home: &mut HomeState,
    status: &mut StatusLine,
    action: Action,
    env: &mut Env<'_, R>,
    effects: &mut Vec<Effect>,
) -> Screen {
    match action {
        Action::Up => home.move_up(),
        Action::Down => home.move_down(),
        Action::ToggleSection => home.toggle_current(),
        Action::ToggleAll => home.toggle_all(),
        Action::NextSize => home.next_size(),
        Action::PrevSize => home.prev_size(),
        Action::Resume => {
            let Some(snapshot) = home.resumable.take() else {
                status.set_error("No saved session to resume");
                return Screen::Home;
            };
            tracing::info!(position = snapshot.state.position, "Resuming saved session");
            status.set_message("Resumed saved session");
            return Screen::Study(ActiveSession::from(snapshot));
        }
        Action::Submit => {
            let config = home.session_config();
            return match SessionState::start(env.deck, &config, env.rng) {
                Ok(state) => {
                    home.resumable = None;
                    status.clear();
                    let session = ActiveSession::new(config, state);
                    if session.state.is_complete(&session.config) {
                        finish(session, effects)
                    } else {
                        effects.push(Effect::SaveSnapshot);
                        Screen::Study(session)
                    }
                }
                Err(e) => {
                    tracing::info!(error = %e, "Session not started");
                    status.set_error(e.to_string());
                    Screen::Home
                }
            };
        }
        _ => {}
    }
    Screen::Home
}

fn on_study<R: Rng + ?Sized>(
    mut session: ActiveSession,
    status: &mut StatusLine,
    action: Action,
    env: &mut Env<'_, R>,
    effects: &mut Vec<Effect>,
) -> Screen {
    match action {
        Action::Flip => {
            session.flipped = !session.flipped;
            Screen::Study(session)
        }
        Action::Rate(rating) => rate(session, status, rating, env, effects),
        Action::EndSession if session.config.mode.is_unlimited() => finish(session, effects),
        Action::EndSession => {
            status.set_message("Fixed sessions end after the last card");
            Screen::Study(session)
        }
        _ => Screen::Study(session),
    }
}

fn rate<R: Rng + ?Sized>(
    mut session: ActiveSession,
    status: &mut StatusLine,
    rating: Rating,
    env: &mut Env<'_, R>,
    effects: &mut Vec<Effect>,
) -> Screen {
    match session.state.rate(&session.config, rating, env.policy, env.rng) {
        Ok(outcome) => {
            tracing::debug!(
                %rating,
                position = session.state.position,
                reinserted_at = ?outcome.reinserted_at,
                "Card rated"
            );
            status.clear();
            session.flipped = false;
            if outcome.complete {
                finish(session, effects)
            } else {
                effects.push(Effect::SaveSnapshot);
                Screen::Study(session)
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rating rejected");
            status.set_error(e.to_string());
            finish(session, effects)
        }
    }
}

fn on_completed(summary: Summary, status: &mut StatusLine, action: Action) -> Screen {
    match action {
        Action::Restart | Action::Submit => {
            status.clear();
            Screen::Home
        }
        _ => Screen::Completed(summary),
    }
}

fn finish(session: ActiveSession, effects: &mut Vec<Effect>) -> Screen {
    let summary = session.state.complete(&session.config);
    tracing::info!(
        easy = summary.easy_count,
        total = summary.total_considered,
        "Session complete"
    );
    effects.push(Effect::ClearSnapshot);
    Screen::Completed(summary)
}

/// Owns the application state and runs effects after each transition
pub struct Controller<S, R> {
    deck: Deck,
    policy: ReinsertionPolicy,
    store: S,
    rng: R,
    state: AppState,
}

impl<S: SnapshotStore, R: Rng> Controller<S, R> {
    /// Create a controller for a loaded (or failed) deck
    pub fn new(deck: Result<Deck, DeckLoadError>, config: &Config, store: S, rng: R) -> Self {
        let mut status = StatusLine::default();

        let deck = match deck {
            Ok(deck) => deck,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load deck");
                status.set_error(format!("Could not load deck: {}", e));
                Deck::default()
            }
        };

        let mut home = HomeState::new(deck.sections(), &config.size_presets, config.default_size);

        match store.load() {
            Ok(Some(snapshot)) if snapshot.is_resumable() => {
                if status.message.is_none() {
                    status.set_message("Saved session found. Press r to resume");
                }
                home.resumable = Some(snapshot);
            }
            Ok(Some(_)) => {
                tracing::info!("Discarding completed session snapshot");
                Self::clear_quietly(&store);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable session snapshot");
                Self::clear_quietly(&store);
            }
        }

        let state = AppState { screen: Screen::Home, home, status };
        Self { deck, policy: config.reinsertion, store, rng, state }
    }

    /// Apply an action, returns true if the app should exit
    pub fn dispatch(&mut self, action: Action) -> bool {
        let state = std::mem::take(&mut self.state);
        let mut env = Env { deck: &self.deck, policy: &self.policy, rng: &mut self.rng };
        let Transition { state, effects } = reduce(state, action, &mut env);
        self.state = state;

        let mut quit = false;
        for effect in effects {
            match effect {
                Effect::SaveSnapshot => self.save_snapshot(),
                Effect::ClearSnapshot => self.clear_snapshot(),
                Effect::Quit => quit = true,
            }
        }
        quit
    }

    /// Current application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Snapshot port
    pub fn store(&self) -> &S {
        &self.store
    }

    fn save_snapshot(&mut self) {
        let Screen::Study(session) = &self.state.screen else {
            return;
        };
        if let Err(e) = self.store.save(&session.snapshot()) {
            tracing::warn!(error = %e, "Failed to save session");
            self.state.status.set_error(format!("Could not save session: {}", e));
        }
    }

    fn clear_snapshot(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear session");
            self.state.status.set_error(format!("Could not clear saved session: {}", e));
        }
    }

    fn clear_quietly(store: &S) {
        if let Err(e) = store.clear() {
            tracing::warn!(error = %e, "Failed to clear session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::snapshot::{MemorySnapshotStore, Snapshot};
    use crate::deck::Card;
    use crate::session::{SessionConfig, SessionMode};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    fn deck() -> Deck {
        let mut cards = Vec::new();
        for id in 1..=20u64 {
            cards.push(Card::new(id, format!("math {}", id), "a", &["math"]));
        }
        for id in 21..=25u64 {
            cards.push(Card::new(id, format!("history {}", id), "a", &["history"]));
        }
        Deck::from_cards(cards).unwrap()
    }

    fn config() -> Config {
        Config { size_presets: vec![3, 15], default_size: 3, ..Default::default() }
    }

    fn controller() -> Controller<MemorySnapshotStore, StdRng> {
        controller_with(MemorySnapshotStore::default())
    }

    fn controller_with(store: MemorySnapshotStore) -> Controller<MemorySnapshotStore, StdRng> {
        Controller::new(Ok(deck()), &config(), store, StdRng::seed_from_u64(3))
    }

    fn session(c: &Controller<MemorySnapshotStore, StdRng>) -> &ActiveSession {
        match &c.state().screen {
            Screen::Study(session) => session,
            other => panic!("Expected study screen, got {:?}", other),
        }
    }

    /// Uncheck "history", leaving only "math"
    fn select_math_only(c: &mut Controller<MemorySnapshotStore, StdRng>) {
        c.dispatch(Action::Down);
        c.dispatch(Action::ToggleSection);
    }

    #[test]
    fn home_lists_sections_all_selected() {
        let c = controller();
        let names: Vec<_> = c.state().home.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["math", "history"]);
        assert!(c.state().home.sections.iter().all(|s| s.selected));
    }

    #[test]
    fn submit_starts_fixed_session_and_saves_snapshot() {
        let mut c = controller();
        assert!(!c.dispatch(Action::Submit));

        let session = session(&c);
        assert_eq!(session.config.mode, SessionMode::Fixed { size: 3 });
        assert_eq!(session.state.queue.len(), 3);
        assert_eq!(c.store().get(), Some(session.snapshot()));
    }

    #[test]
    fn no_sections_selected_stays_home_with_error() {
        let mut c = controller();
        c.dispatch(Action::ToggleAll);
        c.dispatch(Action::Submit);

        assert_eq!(c.state().screen, Screen::Home);
        assert!(c.state().status.is_error);
        assert_eq!(
            c.state().status.message.as_deref(),
            Some("Please select at least one section")
        );
        assert!(c.store().get().is_none());
    }

    #[test]
    fn insufficient_cards_reports_counts() {
        let mut c = controller();
        c.dispatch(Action::ToggleSection); // uncheck math
        c.dispatch(Action::NextSize); // 15

        c.dispatch(Action::Submit);

        assert_eq!(c.state().screen, Screen::Home);
        let message = c.state().status.message.clone().unwrap();
        assert!(message.contains("15 requested, 5 available"), "{}", message);
    }

    #[test]
    fn flip_toggles_answer_and_rating_resets_it() {
        let mut c = controller();
        c.dispatch(Action::Submit);

        c.dispatch(Action::Flip);
        assert!(session(&c).flipped);

        c.dispatch(Action::Rate(Rating::Medium));
        assert!(!session(&c).flipped);
        assert_eq!(session(&c).state.position, 1);
    }

    #[test]
    fn each_rating_overwrites_snapshot() {
        let mut c = controller();
        c.dispatch(Action::Submit);
        c.dispatch(Action::Rate(Rating::Hard));

        let stored = c.store().get().unwrap();
        assert_eq!(stored.state.position, 1);
        assert_eq!(stored.state.history.len(), 1);
    }

    #[test]
    fn fixed_session_completes_and_clears_snapshot() {
        let mut c = controller();
        c.dispatch(Action::Submit);
        for _ in 0..3 {
            c.dispatch(Action::Rate(Rating::Easy));
        }

        assert_eq!(
            c.state().screen,
            Screen::Completed(Summary { easy_count: 3, total_considered: 3 })
        );
        assert!(c.store().get().is_none());
    }

    #[test]
    fn end_session_only_in_unlimited_mode() {
        let mut c = controller();
        c.dispatch(Action::Submit);
        c.dispatch(Action::EndSession);
        assert!(matches!(c.state().screen, Screen::Study(_)));

        let mut c = controller();
        select_math_only(&mut c);
        c.dispatch(Action::PrevSize); // wraps to Unlimited
        c.dispatch(Action::Submit);
        assert!(session(&c).config.mode.is_unlimited());
        assert_eq!(session(&c).state.queue.len(), 20);

        c.dispatch(Action::Rate(Rating::Easy));
        c.dispatch(Action::Rate(Rating::Hard));
        c.dispatch(Action::EndSession);

        assert_eq!(
            c.state().screen,
            Screen::Completed(Summary { easy_count: 1, total_considered: 2 })
        );
        assert!(c.store().get().is_none());
    }

    #[test]
    fn unlimited_rating_reinserts_card() {
        let mut c = controller();
        select_math_only(&mut c);
        c.dispatch(Action::PrevSize);
        c.dispatch(Action::Submit);
        let first = session(&c).state.queue[0].id.clone();

        c.dispatch(Action::Rate(Rating::Hard));

        let queue = &session(&c).state.queue;
        assert_eq!(queue.len(), 21);
        let index = queue.iter().skip(1).position(|card| card.id == first).unwrap() + 1;
        assert!((10..=15).contains(&index));
    }

    #[test]
    fn restart_returns_home_keeping_selection() {
        let mut c = controller();
        select_math_only(&mut c);
        c.dispatch(Action::Submit);
        for _ in 0..3 {
            c.dispatch(Action::Rate(Rating::Medium));
        }

        c.dispatch(Action::Restart);

        assert_eq!(c.state().screen, Screen::Home);
        assert_eq!(c.state().home.selected_tags().len(), 1);
    }

    #[test]
    fn quit_keeps_snapshot() {
        let mut c = controller();
        c.dispatch(Action::Submit);
        c.dispatch(Action::Rate(Rating::Hard));

        assert!(c.dispatch(Action::Quit));
        assert!(c.store().get().is_some());
    }

    #[test]
    fn stored_session_can_be_resumed() {
        let mut first = controller();
        first.dispatch(Action::Submit);
        first.dispatch(Action::Rate(Rating::Easy));
        let stored = first.store().get().unwrap();

        let mut c = controller_with(MemorySnapshotStore::with_snapshot(stored.clone()));
        assert!(c.state().home.resumable.is_some());

        c.dispatch(Action::Resume);

        assert_eq!(session(&c).snapshot(), stored);
        assert!(c.state().home.resumable.is_none());
    }

    #[test]
    fn completed_snapshot_is_discarded() {
        let done = Snapshot {
            config: SessionConfig::fixed(["math"], 0),
            state: SessionState::default(),
        };
        let c = controller_with(MemorySnapshotStore::with_snapshot(done));

        assert!(c.state().home.resumable.is_none());
        assert!(c.store().get().is_none());
    }

    #[test]
    fn resume_without_snapshot_is_an_error() {
        let mut c = controller();
        c.dispatch(Action::Resume);
        assert_eq!(c.state().screen, Screen::Home);
        assert!(c.state().status.is_error);
    }

    #[test]
    fn deck_load_failure_is_shown_on_home() {
        let err = DeckLoadError::Read {
            path: PathBuf::from("deck.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let mut c = Controller::new(
            Err(err),
            &config(),
            MemorySnapshotStore::default(),
            StdRng::seed_from_u64(1),
        );

        assert!(c.state().home.sections.is_empty());
        assert!(c.state().status.message.as_deref().unwrap().starts_with("Could not load deck"));

        c.dispatch(Action::Submit);
        assert_eq!(c.state().screen, Screen::Home);
    }

    #[test]
    fn reduce_is_pure_for_navigation() {
        let deck = deck();
        let policy = ReinsertionPolicy::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut env = Env { deck: &deck, policy: &policy, rng: &mut rng };
        let state = AppState {
            home: HomeState::new(deck.sections(), &[3], 3),
            ..Default::default()
        };

        let Transition { state, effects } = reduce(state, Action::Down, &mut env);

        assert_eq!(state.home.cursor, 1);
        assert!(effects.is_empty());
    }
}
