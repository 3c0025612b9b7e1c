//! UI rendering components

pub mod completion;
pub mod home;
pub mod layout;
pub mod study;

use ratatui::Frame;

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let (body, status_area) = layout::split_status(frame.area());

    match &state.screen {
        Screen::Home => home::draw(frame, body, &state.home, theme),
        Screen::Study(session) => study::draw(frame, body, session, theme),
        Screen::Completed(summary) => completion::draw(frame, body, summary, theme),
    }

    layout::draw_status(frame, status_area, &state.status, theme);
}
