//! Hangul pangram tracker view.
//!
//! Shows the text being typed, a coverage gauge and the Dubeolsik keyboard
//! with every key used by the text filled in. Pasted text is accepted as-is,
//! which is how most users will enter Hangul through an IME.

// Keyboard geometry is a handful of small constants
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};

use super::component::{is_text_input, Component, ComponentEvent, InputContext};
use super::{centered_rect, Theme};
use crate::models::{hangul::DUBEOLSIK, JamoKind, KeyCap, PangramTracker};

/// Full key reference for the help overlay.
pub const HELP: &[(&str, &str)] = &[
    ("Type / paste", "Enter Hangul text"),
    ("Backspace", "Delete the last character"),
    ("Enter", "New line"),
    ("Ctrl+U", "Clear the text"),
];

/// Banner shown while celebrating a completed pangram.
pub const CELEBRATION_TEXT: &str = "🎉 완성! 모든 키 사용! 🎉";

const KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 4;
const ROW_INDENT: u16 = 3;

/// Pangram tracker widget.
#[derive(Debug, Default)]
pub struct PangramView {
    tracker: PangramTracker,
}

impl PangramView {
    /// Creates an empty view whose banner lasts `celebration`.
    #[must_use]
    pub fn new(celebration: Duration) -> Self {
        Self {
            tracker: PangramTracker::new(celebration),
        }
    }

    /// The underlying tracker.
    #[must_use]
    pub const fn tracker(&self) -> &PangramTracker {
        &self.tracker
    }

    fn completed_event(completed: bool) -> Option<ComponentEvent> {
        completed.then(|| ComponentEvent::status("Every key used!"))
    }

    fn key_style(&self, key: &KeyCap, theme: &Theme) -> Style {
        if self.tracker.is_used(key.base) {
            let fill = match key.kind {
                JamoKind::Consonant => theme.consonant,
                JamoKind::Vowel => theme.vowel,
            };
            Style::default()
                .bg(fill)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(theme.surface).fg(theme.text_muted)
        }
    }

    fn render_key(&self, f: &mut Frame, area: Rect, key: &KeyCap, theme: &Theme) {
        let style = self.key_style(key, theme);
        let shift_line = match key.shift {
            Some(shift) => {
                let shift_style = if self.tracker.is_used(shift) {
                    style.fg(theme.accent)
                } else {
                    style
                };
                Line::from(Span::styled(shift.to_string(), shift_style)).alignment(Alignment::Right)
            }
            None => Line::from(""),
        };
        let base_line = Line::from(Span::styled(key.base.to_string(), style))
            .alignment(Alignment::Center);

        let cap = Paragraph::new(vec![shift_line, base_line])
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted)),
            );
        f.render_widget(cap, area);
    }

    fn render_keyboard(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        for (row_index, row) in DUBEOLSIK.iter().enumerate() {
            let row_index = row_index as u16;
            let y = area.y + row_index * KEY_HEIGHT;
            if y + KEY_HEIGHT > area.y + area.height {
                break;
            }
            for (col, key) in row.iter().enumerate() {
                let x = area.x + row_index * ROW_INDENT + col as u16 * (KEY_WIDTH + 1);
                if x + KEY_WIDTH > area.x + area.width {
                    break;
                }
                self.render_key(f, Rect::new(x, y, KEY_WIDTH, KEY_HEIGHT), key, theme);
            }
        }
    }

    fn render_celebration(f: &mut Frame, area: Rect, theme: &Theme) {
        let banner_area = centered_rect(50, 20, area);
        f.render_widget(Clear, banner_area);
        let banner = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                CELEBRATION_TEXT,
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(banner, banner_area);
    }
}

impl Component for PangramView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        let completed = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.tracker.clear(ctx.now);
                return Some(ComponentEvent::status("Text cleared"));
            }
            KeyCode::Char(c) if is_text_input(&key) => {
                self.tracker.push_str(c.encode_utf8(&mut [0; 4]), ctx.now)
            }
            KeyCode::Enter => self.tracker.push_str("\n", ctx.now),
            KeyCode::Backspace => self.tracker.pop_char(ctx.now),
            _ => return None,
        };
        Self::completed_event(completed)
    }

    fn handle_paste(&mut self, text: &str, ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        let completed = self.tracker.push_str(text, ctx.now);
        Self::completed_event(completed)
    }

    fn tick(&mut self, now: Instant) -> Option<Self::Event> {
        self.tracker.tick(now);
        None
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.tracker.next_deadline()
    }

    fn teardown(&mut self) {
        self.tracker.cancel_pending();
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" 한글 팬그램 도우미 - 두벌식 ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let keyboard_height = KEY_HEIGHT * DUBEOLSIK.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(keyboard_height),
                Constraint::Min(3),
            ])
            .split(inner);

        let (used, total) = self.tracker.progress();
        let ratio = if total == 0 { 0.0 } else { used as f64 / total as f64 };
        let gauge_color = if self.tracker.is_complete() {
            theme.success
        } else {
            theme.primary
        };
        let gauge = Gauge::default()
            .block(Block::default().title(" Keys used ").borders(Borders::ALL))
            .gauge_style(Style::default().fg(gauge_color).bg(theme.surface))
            .ratio(ratio)
            .label(format!("{used} / {total}"));
        f.render_widget(gauge, chunks[0]);

        self.render_keyboard(f, chunks[1], theme);

        let mut text_lines: Vec<Line> = self
            .tracker
            .text()
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(theme.text))))
            .collect();
        if let Some(last) = text_lines.last_mut() {
            last.push_span(Span::styled("█", Style::default().fg(theme.accent)));
        }
        let text = Paragraph::new(text_lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(" 문장 ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent)),
            );
        f.render_widget(text, chunks[2]);

        if self.tracker.is_celebrating() {
            Self::render_celebration(f, area, theme);
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("Type", "Add text"), ("Backspace", "Delete"), ("Ctrl+U", "Clear")]
    }
}
