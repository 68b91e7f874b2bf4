//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: the latest status message (or the active
    /// widget's hints when there is none) above the global help line.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if state.status_message.is_empty() {
            Self::hints_line(&state.active_component().key_hints(), theme)
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![first_line, Self::help_line(theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Contextual hints, key in bold accent followed by the muted action.
    fn hints_line(hints: &[(&'static str, &'static str)], theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let hints = [
            ("Ctrl+N/P", "Switch"),
            ("Alt+1-5", "Jump"),
            ("F1", "Help"),
            ("Ctrl+Q", "Quit"),
        ];

        let mut spans: Vec<Span<'static>> =
            vec![Span::styled("Help: ", Style::default().fg(theme.primary))];
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }
        Line::from(spans)
    }
}
