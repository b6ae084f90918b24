//! Status bar rendering with keybindings and replay position

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar shows
#[derive(Debug, Clone, Copy)]
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    /// 0-based index of the active path
    pub path_index: usize,
    pub path_count: usize,
    /// 0-based progress within the active path
    pub progress: usize,
    pub path_len: usize,
    pub exited_world: bool,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.bar_bg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    // Left side: position and message
    let left_spans = vec![
        Span::styled(
            format!(" Path {}/{} ", data.path_index + 1, data.path_count),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!(" Point {}/{} ", data.progress + 1, data.path_len),
            bar.fg(DEFAULT_THEME.fg),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!(" {} ", data.message), bar.fg(DEFAULT_THEME.fg)),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds and state badge
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);

    let mut right_spans = vec![
        Span::styled(" ⎵/→ ", key_style),
        Span::styled(" next ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⌫/← ", key_style),
        Span::styled(" prev ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" replay ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let badge = |text: &'static str, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };

    if data.exited_world {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" EXITED ", DEFAULT_THEME.error));
    }
    if data.progress + 1 >= data.path_len {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" END ", DEFAULT_THEME.secondary));
    } else if data.progress == 0 {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(badge(" START ", DEFAULT_THEME.success));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
