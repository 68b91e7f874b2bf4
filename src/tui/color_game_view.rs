//! HSB color-guessing game view.
//!
//! Guessing screen: the target swatch and three numeric fields. Results
//! screen: guess and answer side by side with the round's accuracy.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::{is_text_input, Component, ComponentEvent, InputContext};
use super::Theme;
use crate::config::GamesConfig;
use crate::models::{ColorGame, ColorMode, GamePhase, HsbChannel, HsbColor, RoundOutcome};

/// Full key reference for the help overlay.
pub const HELP: &[(&str, &str)] = &[
    ("0-9 / Backspace", "Edit the focused field"),
    ("Tab / ← / →", "Move between hue, saturation and brightness"),
    ("↑ / ↓", "Nudge the focused field by 1 (PageUp/PageDown: 10)"),
    ("Enter", "Submit guess"),
    ("m", "Cycle hue mode (while guessing)"),
    ("Space / Enter", "Next round (on the results screen)"),
];

/// Color-guessing game widget.
#[derive(Debug)]
pub struct ColorGameView {
    game: ColorGame,
    field: HsbChannel,
}

impl ColorGameView {
    /// Starts a session using the configured round count.
    pub fn new<R: Rng + ?Sized>(games: &GamesConfig, rng: &mut R) -> Self {
        Self {
            game: ColorGame::new(games.total_rounds, rng),
            field: HsbChannel::Hue,
        }
    }

    /// The underlying game.
    #[must_use]
    pub const fn game(&self) -> &ColorGame {
        &self.game
    }

    /// Field that receives digits.
    #[must_use]
    pub const fn field(&self) -> HsbChannel {
        self.field
    }

    fn type_digit(&mut self, digit: char) {
        let mut text = self.game.guess().get(self.field).to_string();
        text.push(digit);
        self.game.set_guess_field(self.field, &text);
    }

    fn erase_digit(&mut self) {
        let mut text = self.game.guess().get(self.field).to_string();
        text.pop();
        self.game.set_guess_field(self.field, &text);
    }

    fn cycle_mode(&mut self) -> Option<ComponentEvent> {
        let mode = self.game.mode().next();
        if self.game.set_mode(mode) {
            Some(ComponentEvent::status(format!(
                "Mode: {} ({})",
                mode.label(),
                mode.range_label()
            )))
        } else {
            None
        }
    }

    fn handle_guessing(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Char(c @ '0'..='9') if is_text_input(&key) => {
                self.type_digit(c);
                None
            }
            KeyCode::Backspace => {
                self.erase_digit();
                None
            }
            KeyCode::Tab | KeyCode::Right => {
                self.field = self.field.next();
                None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.field = self.field.previous();
                None
            }
            KeyCode::Up => {
                let step = if key.modifiers.contains(KeyModifiers::SHIFT) { 10 } else { 1 };
                self.game.adjust_guess_field(self.field, step);
                None
            }
            KeyCode::Down => {
                let step = if key.modifiers.contains(KeyModifiers::SHIFT) { 10 } else { 1 };
                self.game.adjust_guess_field(self.field, -step);
                None
            }
            KeyCode::PageUp => {
                self.game.adjust_guess_field(self.field, 10);
                None
            }
            KeyCode::PageDown => {
                self.game.adjust_guess_field(self.field, -10);
                None
            }
            KeyCode::Char('m') if is_text_input(&key) => self.cycle_mode(),
            KeyCode::Enter => self
                .game
                .submit()
                .map(|accuracy| ComponentEvent::status(format!("Accuracy: {accuracy}%"))),
            _ => None,
        }
    }

    fn handle_results(&mut self, key: KeyEvent, ctx: &mut InputContext<'_>) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.field = HsbChannel::Hue;
                match self.game.next_round(&mut *ctx.rng)? {
                    RoundOutcome::Continue { round } => Some(ComponentEvent::status(format!(
                        "Round {round} of {}",
                        self.game.total_rounds()
                    ))),
                    RoundOutcome::GameOver { average } => Some(ComponentEvent::alert(
                        "Game over!",
                        format!("Your final score is {average}%"),
                    )),
                }
            }
            KeyCode::Char('m') if is_text_input(&key) => Some(ComponentEvent::status(
                "Mode can be changed once the next round starts",
            )),
            _ => None,
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(28)])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "THE HSB GUESSING GAME",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, chunks[0]);

        let stats = Paragraph::new(Line::from(vec![
            Span::styled("SCORE: ", Style::default().fg(theme.text_secondary)),
            Span::styled(self.game.score().to_string(), Style::default().fg(theme.text)),
            Span::styled("  ROUND: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format!("{}/{}", self.game.round(), self.game.total_rounds()),
                Style::default().fg(theme.text),
            ),
        ]))
        .alignment(Alignment::Right);
        f.render_widget(stats, chunks[1]);
    }

    fn render_modes(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        let enabled = self.game.phase() == GamePhase::Guessing;
        for (mode, chunk) in ColorMode::ALL.into_iter().zip(chunks.iter()) {
            let active = mode == self.game.mode();
            let style = match (enabled, active) {
                (_, true) => Style::default()
                    .fg(theme.background)
                    .bg(if enabled { theme.accent } else { theme.text_muted })
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(theme.text),
                (false, false) => Style::default().fg(theme.text_muted),
            };
            let cell = Paragraph::new(Line::from(format!(
                "{} {}",
                mode.label(),
                mode.range_label()
            )))
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted)),
            );
            f.render_widget(cell, *chunk);
        }
    }

    fn render_guessing(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        render_swatch(f, chunks[0], &self.game.target(), "TARGET", false, theme);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[1]);

        let guess = self.game.guess();
        for (channel, chunk) in HsbChannel::ALL.into_iter().zip(fields.iter()) {
            let focused = channel == self.field;
            let mut spans = vec![
                Span::styled(guess.get(channel).to_string(), Style::default().fg(theme.text)),
                Span::styled(channel.unit(), Style::default().fg(theme.text_secondary)),
            ];
            if focused {
                spans.push(Span::styled("█", Style::default().fg(theme.accent)));
            }
            let border = if focused { theme.accent } else { theme.text_muted };
            let input = Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .title(format!(" {} 0-{} ", channel.label(), channel.max()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
            f.render_widget(input, *chunk);
        }
    }

    fn render_results(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(6)])
            .split(area);

        let swatches = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(40),
            ])
            .split(chunks[0]);

        let guess = self.game.guess();
        let target = self.game.target();
        render_swatch(f, swatches[0], &guess, "YOUR GUESS", true, theme);
        render_swatch(f, swatches[2], &target, "ANSWER", true, theme);

        let accuracy = self.game.last_accuracy().unwrap_or_default();
        let middle = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2), Constraint::Min(0)])
            .split(swatches[1]);
        let accuracy_text = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("{accuracy}%"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("accuracy", Style::default().fg(theme.text_muted))),
        ])
        .alignment(Alignment::Center);
        f.render_widget(accuracy_text, middle[1]);

        let mut lines: Vec<Line> = HsbChannel::ALL
            .into_iter()
            .map(|channel| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<11}", channel.label()),
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(
                        format!("{:>4}{}", guess.get(channel), channel.unit()),
                        Style::default().fg(theme.text),
                    ),
                    Span::styled("  vs  ", Style::default().fg(theme.text_muted)),
                    Span::styled(
                        format!("{:>4}{}", target.get(channel), channel.unit()),
                        Style::default().fg(theme.text),
                    ),
                ])
            })
            .collect();
        lines.push(Line::from(Span::styled(
            format!("Current mode: {}", self.game.mode().label()),
            Style::default().fg(theme.text_secondary),
        )));
        lines.push(Line::from(Span::styled(
            "press space to continue",
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

/// Fills `area` with `color`, labelled with `title` in a contrasting color.
/// With `reveal` the hex code is shown along the bottom edge.
fn render_swatch(
    f: &mut Frame,
    area: Rect,
    color: &HsbColor,
    title: &str,
    reveal: bool,
    theme: &Theme,
) {
    let rgb = color.to_rgb();
    let label = if rgb.is_light() { Color::Black } else { Color::White };
    let mut swatch = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(label).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted))
        .style(Style::default().bg(rgb.to_ratatui_color()));
    if reveal {
        swatch = swatch.title_bottom(Line::styled(format!(" {rgb} "), Style::default().fg(label)));
    }
    f.render_widget(swatch, area);
}

impl Component for ColorGameView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        match self.game.phase() {
            GamePhase::Guessing => self.handle_guessing(key),
            GamePhase::Results => self.handle_results(key, ctx),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" HSB Guess ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(6),
            ])
            .split(inner);

        self.render_header(f, chunks[0], theme);
        self.render_modes(f, chunks[1], theme);
        match self.game.phase() {
            GamePhase::Guessing => self.render_guessing(f, chunks[2], theme),
            GamePhase::Results => self.render_results(f, chunks[2], theme),
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.game.phase() {
            GamePhase::Guessing => vec![
                ("0-9", "Edit"),
                ("Tab", "Field"),
                ("↑↓", "Nudge"),
                ("m", "Mode"),
                ("Enter", "Submit"),
            ],
            GamePhase::Results => vec![("Space", "Next round")],
        }
    }
}
