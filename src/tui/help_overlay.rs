//! Help overlay listing every key binding, grouped by widget.
//!
//! Opened with F1. The content is generated from each widget's key table so
//! the overlay never drifts from the actual bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::{color_game_view, counter_view, pangram_view, reaction_view, todo_view, Theme};
use crate::branding::APP_DISPLAY_NAME;

/// Shell-level bindings, active in every widget.
pub const GLOBAL_HELP: &[(&str, &str)] = &[
    ("Ctrl+N / Ctrl+P", "Next / previous widget"),
    ("Alt+1 … Alt+5", "Jump to a widget"),
    ("F1", "Toggle this help"),
    ("Ctrl+Q / Ctrl+C", "Quit"),
];

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    ("GLOBAL", GLOBAL_HELP),
    ("COUNTER", counter_view::HELP),
    ("TODO", todo_view::HELP),
    ("REACTION", reaction_view::HELP),
    ("HSB GUESS", color_game_view::HELP),
    ("HANGUL PANGRAM", pangram_view::HELP),
];

const KEY_COLUMN: usize = 20;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::help_content(&Theme::dark()).len(),
        }
    }

    /// Total number of content lines.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    /// Handles a key while the overlay is open. Returns `true` when it should close.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(10),
            KeyCode::PageDown => self.page_down(10),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => {}
        }
        false
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let rule = "═".repeat(56);
        let mut lines = vec![
            Line::from(Span::styled(rule.clone(), Style::default().fg(theme.primary))),
            Line::from(Span::styled(
                format!("{APP_DISPLAY_NAME} - Help"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(rule.clone(), Style::default().fg(theme.primary))),
            Line::from(""),
        ];

        for (title, bindings) in SECTIONS {
            lines.push(Line::from(Span::styled(
                format!("═══ {title} ═══"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            for (keys, action) in *bindings {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled((*action).to_string(), Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(rule.clone(), Style::default().fg(theme.primary))));
        lines.push(
            Line::from(Span::styled(
                "Press F1 or Esc to close • ↑↓ to scroll",
                Style::default().fg(theme.text_muted),
            ))
            .alignment(Alignment::Center),
        );
        lines.push(Line::from(Span::styled(rule, Style::default().fg(theme.primary))));
        lines
    }

    /// Render the help overlay as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // 60% width, 80% height
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::help_content(theme);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_content_has_every_section() {
        let text: String = HelpOverlayState::help_content(&Theme::dark())
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        for (title, _) in SECTIONS {
            assert!(text.contains(&format!("═══ {title} ═══")), "missing {title}");
        }
        assert!(text.contains("Toggle this help"));
    }

    #[test]
    fn test_scrolling_is_bounded() {
        let mut state = HelpOverlayState::new();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to_bottom();
        let bottom = state.scroll_offset;
        state.scroll_down();
        assert_eq!(state.scroll_offset, bottom);
        assert_eq!(bottom, state.total_lines() - 1);

        state.page_up(1000);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_close_keys() {
        let mut state = HelpOverlayState::new();
        assert!(!state.handle_input(key(KeyCode::Down)));
        assert_eq!(state.scroll_offset, 1);
        assert!(state.handle_input(key(KeyCode::Esc)));
        assert!(state.handle_input(key(KeyCode::F(1))));
    }
}
