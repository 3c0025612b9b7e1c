//! Home screen: section checklist and session size selector

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{HomeState, SectionToggle};
use crate::theme::Theme;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, home: &HomeState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    draw_sections(frame, chunks[0], home, theme);
    draw_sizes(frame, chunks[1], home, theme);
    draw_hints(frame, chunks[2], home, theme);
}

/// Draw the section checklist
fn draw_sections(frame: &mut Frame, area: Rect, home: &HomeState, theme: &Theme) {
    let block = Block::default()
        .title(" Sections ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if home.sections.is_empty() {
        let msg = Paragraph::new("No sections available\n\nCheck the deck path in your config")
            .style(Style::default().fg(theme.fg_muted))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, inner);
        return;
    }

    // Keep the cursor row in view
    let visible = inner.height as usize;
    let skip = (home.cursor + 1).saturating_sub(visible);

    let lines: Vec<Line> = home
        .sections
        .iter()
        .enumerate()
        .skip(skip)
        .take(visible)
        .map(|(i, section)| {
            let style = if i == home.cursor {
                Style::default()
                    .fg(theme.bg_primary)
                    .bg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD)
            } else if section.selected {
                Style::default().fg(theme.fg_primary)
            } else {
                Style::default().fg(theme.fg_muted)
            };
            Line::from(Span::styled(section_label(section), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the session size selector
fn draw_sizes(frame: &mut Frame, area: Rect, home: &HomeState, theme: &Theme) {
    let block = Block::default()
        .title(" Session size ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (i, choice) in home.size_options.iter().enumerate() {
        let label = format!(" {} ", choice.label());
        let style = if i == home.size_index {
            Style::default().fg(theme.bg_primary).bg(theme.accent_secondary)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_hints(frame: &mut Frame, area: Rect, home: &HomeState, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        "[j/k] Move  [Space] Toggle  [a] All  [h/l] Size  [Enter] Start  [q] Quit",
        Style::default().fg(theme.fg_muted),
    ))];

    if let Some(snapshot) = &home.resumable {
        lines.push(Line::from(Span::styled(
            format!(
                "[r] Resume saved session ({} of {} cards reviewed)",
                snapshot.state.position,
                snapshot.state.queue.len()
            ),
            Style::default().fg(theme.info),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Checklist label for a section
fn section_label(section: &SectionToggle) -> String {
    let mark = if section.selected { CHECKED } else { UNCHECKED };
    format!("{} {}", mark, section.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_section_label() {
        let section = SectionToggle { name: "math".into(), selected: true };
        assert_eq!(section_label(&section), "[x] math");
    }

    #[test]
    fn unchecked_section_label() {
        let section = SectionToggle { name: "history".into(), selected: false };
        assert_eq!(section_label(&section), "[ ] history");
    }
}
