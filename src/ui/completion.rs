//! Completion screen

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::centered_rect;
use crate::session::Summary;
use crate::theme::Theme;

/// Draw the session summary
pub fn draw(frame: &mut Frame, area: Rect, summary: &Summary, theme: &Theme) {
    let overlay_area = centered_rect(60, 50, area);

    let block = Block::default()
        .title(" Session Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            summary.to_string(),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Start another session    [q] Quit",
            Style::default().fg(theme.fg_muted),
        )),
    ];

    let para = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(para, inner);
}
