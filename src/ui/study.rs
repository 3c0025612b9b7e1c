//! Study screen: progress gauge, card, and rating hints

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::app::state::ActiveSession;
use crate::session::SessionMode;
use crate::theme::Theme;

/// Draw the study screen
pub fn draw(frame: &mut Frame, area: Rect, session: &ActiveSession, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    draw_progress(frame, chunks[0], session, theme);
    draw_card(frame, chunks[1], session, theme);
    draw_hints(frame, chunks[2], session, theme);
}

fn draw_progress(frame: &mut Frame, area: Rect, session: &ActiveSession, theme: &Theme) {
    let gauge = Gauge::default()
        .block(
            Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)),
        )
        .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.bg_tertiary))
        .ratio(session.progress() / 100.0)
        .label(progress_label(session));

    frame.render_widget(gauge, area);
}

/// Draw the current card, question side or answer side
fn draw_card(frame: &mut Frame, area: Rect, session: &ActiveSession, theme: &Theme) {
    let Some(card) = session.state.current_card() else {
        return;
    };

    let card_area = centered_rect(70, 80, area);
    let (title, border) = if session.flipped {
        (" Answer ", theme.accent_secondary)
    } else {
        (" Question ", theme.border_focused)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            card.question.as_str(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
    ];

    if session.flipped {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "\u{2500}\u{2500}\u{2500}",
            Style::default().fg(theme.border),
        )));
        lines.push(Line::from(""));
        let answer_style = Style::default().fg(theme.success);
        lines.push(Line::from(Span::styled(card.answer.as_str(), answer_style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        card.tags.join(", "),
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, inner);
}

fn draw_hints(frame: &mut Frame, area: Rect, session: &ActiveSession, theme: &Theme) {
    let mut hint = String::from("[Space] Flip  [1] Hard  [2] Medium  [3] Easy");
    if session.config.mode.is_unlimited() {
        hint.push_str("  [x] End session");
    }
    hint.push_str("  [q] Quit");

    let para = Paragraph::new(Span::styled(hint, Style::default().fg(theme.fg_muted)))
        .alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Text shown on the progress gauge
fn progress_label(session: &ActiveSession) -> String {
    match session.config.mode {
        SessionMode::Fixed { size } => {
            format!("{} / {}", session.state.position.min(size), size)
        }
        SessionMode::Unlimited => format!("{} reviewed", session.state.history.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionConfig, SessionState};

    #[test]
    fn fixed_label_shows_position_of_size() {
        let session = ActiveSession::new(
            SessionConfig::fixed(["math"], 15),
            SessionState { position: 4, ..Default::default() },
        );
        assert_eq!(progress_label(&session), "4 / 15");
    }

    #[test]
    fn unlimited_label_counts_reviews() {
        let session =
            ActiveSession::new(SessionConfig::unlimited(["math"]), SessionState::default());
        assert_eq!(progress_label(&session), "0 reviewed");
    }
}
