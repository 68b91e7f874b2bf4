//! Reaction-time tester view.
//!
//! The whole widget area is the click target and takes the signal color of
//! the current state. Space or Enter is the click.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use super::component::{is_text_input, Component, ComponentEvent, InputContext};
use super::theme::signal;
use super::Theme;
use crate::config::GamesConfig;
use crate::models::{ClickOutcome, ReactionGame, ReactionRating, ReactionState};

/// Full key reference for the help overlay.
pub const HELP: &[(&str, &str)] = &[
    ("Space / Enter", "Start, then click when the screen turns green"),
    ("r", "Try again (from the result screen)"),
    ("x", "Reset best time and attempts"),
];

/// Reaction-time tester widget.
#[derive(Debug, Default)]
pub struct ReactionView {
    game: ReactionGame,
}

impl ReactionView {
    /// Creates a view using the configured delay bounds.
    #[must_use]
    pub fn new(games: &GamesConfig) -> Self {
        Self {
            game: ReactionGame::new(games.reaction_min_delay_ms, games.reaction_max_delay_ms),
        }
    }

    /// The underlying game.
    #[must_use]
    pub const fn game(&self) -> &ReactionGame {
        &self.game
    }

    fn click(&mut self, ctx: &mut InputContext<'_>) -> Option<ComponentEvent> {
        match self.game.state() {
            ReactionState::Waiting => {
                self.game.start(ctx.now, &mut *ctx.rng);
                None
            }
            ReactionState::Armed | ReactionState::Go => match self.game.click(ctx.now) {
                ClickOutcome::TooEarly => Some(ComponentEvent::alert(
                    "Too early!",
                    "Wait until the screen turns green.",
                )),
                ClickOutcome::Recorded(ms) => {
                    Some(ComponentEvent::status(format!("Reaction: {ms} ms")))
                }
                ClickOutcome::Ignored => None,
            },
            ReactionState::Result => {
                self.game.reset();
                None
            }
        }
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        match self.game.state() {
            ReactionState::Waiting => {
                let mut lines = vec![
                    Line::from(Span::styled("Reaction Speed Test", bold)),
                    Line::from(""),
                    Line::from("Press Space to start."),
                    Line::from("Press again as soon as the screen turns green."),
                ];
                if let Some(best) = self.game.best_ms() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(format!(
                        "Best: {best} ms   Attempts: {}",
                        self.game.attempts()
                    )));
                }
                lines
            }
            ReactionState::Armed => vec![
                Line::from(Span::styled("Wait for green...", bold)),
                Line::from(""),
                Line::from("Pressing now counts as too early."),
            ],
            ReactionState::Go => vec![Line::from(Span::styled("PRESS NOW!", bold))],
            ReactionState::Result => {
                let ms = self.game.reaction_ms().unwrap_or_default();
                let mut lines = vec![
                    Line::from(Span::styled(format!("{ms} ms"), bold)),
                    Line::from(ReactionRating::from_ms(ms).message()),
                    Line::from(""),
                ];
                if let Some(best) = self.game.best_ms() {
                    lines.push(Line::from(format!("Best: {best} ms")));
                }
                lines.push(Line::from(format!("Attempts: {}", self.game.attempts())));
                lines.push(Line::from(""));
                lines.push(Line::from("Space: try again   x: reset stats"));
                lines
            }
        }
    }
}

impl Component for ReactionView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.click(ctx),
            KeyCode::Char('r') if is_text_input(&key) => {
                if self.game.state() == ReactionState::Result {
                    self.game.reset();
                }
                None
            }
            KeyCode::Char('x') if is_text_input(&key) => {
                if matches!(
                    self.game.state(),
                    ReactionState::Waiting | ReactionState::Result
                ) {
                    self.game.reset_stats();
                    return Some(ComponentEvent::status("Reaction stats cleared"));
                }
                None
            }
            _ => None,
        }
    }

    fn tick(&mut self, now: Instant) -> Option<Self::Event> {
        self.game.tick(now);
        None
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.game.next_deadline()
    }

    fn on_hide(&mut self) {
        self.game.cancel_pending();
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let (bg, fg) = match self.game.state() {
            ReactionState::Waiting => (signal::WAITING, Color::White),
            ReactionState::Armed => (signal::ARMED, Color::White),
            ReactionState::Go => (signal::GO, Color::White),
            ReactionState::Result => (signal::RESULT, Color::Black),
        };

        let block = Block::default()
            .title(" Reaction ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(bg).fg(fg));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines = self.body_lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height),
                Constraint::Min(0),
            ])
            .split(inner);

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg).fg(fg));
        f.render_widget(body, chunks[1]);
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.game.state() {
            ReactionState::Waiting => vec![("Space", "Start"), ("x", "Reset stats")],
            ReactionState::Armed | ReactionState::Go => vec![("Space", "Click")],
            ReactionState::Result => vec![("Space", "Try again"), ("x", "Reset stats")],
        }
    }
}
