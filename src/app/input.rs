//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::Screen;
use crate::session::Rating;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Home navigation
    Up,
    Down,
    ToggleSection,
    ToggleAll,
    NextSize,
    PrevSize,
    Submit,
    Resume,

    // Study
    Flip,
    Rate(Rating),
    EndSession,

    // Completion
    Restart,

    Quit,
}

/// Map a key press to an action for the current screen
pub fn key_to_action(screen: &Screen, key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Home => home_key_to_action(key),
        Screen::Study(_) => study_key_to_action(key),
        Screen::Completed(_) => completed_key_to_action(key),
    }
}

/// Vim-style keys for the selection screen
fn home_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char(' ') => Some(Action::ToggleSection),
        KeyCode::Char('a') => Some(Action::ToggleAll),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Some(Action::NextSize),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Some(Action::PrevSize),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Char('r') => Some(Action::Resume),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn study_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Enter => Some(Action::Flip),
        KeyCode::Char('1') | KeyCode::Char('h') => Some(Action::Rate(Rating::Hard)),
        KeyCode::Char('2') | KeyCode::Char('m') => Some(Action::Rate(Rating::Medium)),
        KeyCode::Char('3') | KeyCode::Char('e') => Some(Action::Rate(Rating::Easy)),
        KeyCode::Char('x') => Some(Action::EndSession),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn completed_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter | KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
