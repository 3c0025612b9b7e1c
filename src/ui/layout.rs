//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::StatusLine;
use crate::theme::Theme;

/// Split the screen into a body and a one-line status bar
pub fn split_status(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the status line at the bottom of the screen
pub fn draw_status(frame: &mut Frame, area: Rect, status: &StatusLine, theme: &Theme) {
    let Some(ref msg) = status.message else {
        return;
    };

    let style = if status.is_error {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.fg_muted)
    };

    frame.render_widget(Paragraph::new(Line::from(Span::styled(msg.clone(), style))), area);
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
