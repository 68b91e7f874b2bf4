//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widget views using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod color_game_view;
pub mod component;
pub mod counter_view;
pub mod handlers;
pub mod help_overlay;
pub mod pangram_view;
pub mod reaction_view;
pub mod status_bar;
pub mod theme;
pub mod todo_view;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::branding::APP_DISPLAY_NAME;
use crate::config::{Config, WidgetKind};
use crate::models::timer::earliest;

pub use color_game_view::ColorGameView;
pub use component::{Component, ComponentEvent, InputContext};
pub use counter_view::CounterView;
pub use help_overlay::HelpOverlayState;
pub use pangram_view::PangramView;
pub use reaction_view::ReactionView;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use todo_view::TodoView;

/// Upper bound on how long the loop sleeps waiting for input.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Blocking notification raised by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Popup title
    pub title: String,
    /// Popup body
    pub message: String,
}

/// Application state for the TUI
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Resolved color theme
    pub theme: Theme,
    /// Widget currently on screen
    pub active: WidgetKind,
    /// Counter widget
    pub counter: CounterView,
    /// Todo widget
    pub todo: TodoView,
    /// Reaction tester widget
    pub reaction: ReactionView,
    /// Color-guessing widget
    pub color: ColorGameView,
    /// Pangram tracker widget
    pub pangram: PangramView,
    /// Latest status line; empty shows the active widget's hints
    pub status_message: String,
    /// Open alert, if any
    pub alert: Option<Alert>,
    /// Open help overlay, if any
    pub help: Option<HelpOverlayState>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    rng: StdRng,
}

impl AppState {
    /// Builds every widget from `config`. All randomness flows from `rng`.
    pub fn new(config: Config, theme: Theme, mut rng: StdRng) -> Self {
        let games = &config.games;
        let color = ColorGameView::new(games, &mut rng);
        let reaction = ReactionView::new(games);
        let pangram = PangramView::new(games.celebration());

        let help = config
            .ui
            .show_help_on_startup
            .then(HelpOverlayState::new);

        Self {
            active: config.ui.start_widget,
            counter: CounterView::new(),
            todo: TodoView::new(),
            reaction,
            color,
            pangram,
            status_message: String::new(),
            alert: None,
            help,
            should_quit: false,
            rng,
            theme,
            config,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// The widget currently on screen.
    #[must_use]
    pub fn active_component(&self) -> &dyn Component<Event = ComponentEvent> {
        match self.active {
            WidgetKind::Counter => &self.counter,
            WidgetKind::Todo => &self.todo,
            WidgetKind::Reaction => &self.reaction,
            WidgetKind::Color => &self.color,
            WidgetKind::Pangram => &self.pangram,
        }
    }

    fn active_component_mut(&mut self) -> &mut dyn Component<Event = ComponentEvent> {
        match self.active {
            WidgetKind::Counter => &mut self.counter,
            WidgetKind::Todo => &mut self.todo,
            WidgetKind::Reaction => &mut self.reaction,
            WidgetKind::Color => &mut self.color,
            WidgetKind::Pangram => &mut self.pangram,
        }
    }

    fn components_mut(&mut self) -> [&mut dyn Component<Event = ComponentEvent>; 5] {
        [
            &mut self.counter,
            &mut self.todo,
            &mut self.reaction,
            &mut self.color,
            &mut self.pangram,
        ]
    }

    /// Shows `kind`, hiding the current widget first.
    pub fn switch_to(&mut self, kind: WidgetKind) {
        if kind == self.active {
            return;
        }
        self.active_component_mut().on_hide();
        debug!(from = self.active.title(), to = kind.title(), "switching widget");
        self.active = kind;
        self.status_message.clear();
    }

    /// Opens the help overlay, hiding the active widget behind it.
    pub fn open_help(&mut self) {
        self.active_component_mut().on_hide();
        self.help = Some(HelpOverlayState::new());
    }

    /// Routes a key to the active widget.
    pub fn dispatch_key(&mut self, key: KeyEvent, now: Instant) {
        self.status_message.clear();
        let mut ctx = InputContext {
            now,
            rng: &mut self.rng,
        };
        let event = match self.active {
            WidgetKind::Counter => self.counter.handle_input(key, &mut ctx),
            WidgetKind::Todo => self.todo.handle_input(key, &mut ctx),
            WidgetKind::Reaction => self.reaction.handle_input(key, &mut ctx),
            WidgetKind::Color => self.color.handle_input(key, &mut ctx),
            WidgetKind::Pangram => self.pangram.handle_input(key, &mut ctx),
        };
        self.apply(event);
    }

    /// Routes pasted text to the active widget. Ignored while a popup is open.
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        if self.alert.is_some() || self.help.is_some() {
            return;
        }
        let mut ctx = InputContext {
            now,
            rng: &mut self.rng,
        };
        let event = match self.active {
            WidgetKind::Counter => self.counter.handle_paste(text, &mut ctx),
            WidgetKind::Todo => self.todo.handle_paste(text, &mut ctx),
            WidgetKind::Reaction => self.reaction.handle_paste(text, &mut ctx),
            WidgetKind::Color => self.color.handle_paste(text, &mut ctx),
            WidgetKind::Pangram => self.pangram.handle_paste(text, &mut ctx),
        };
        self.apply(event);
    }

    /// Advances every widget's timers to `now`.
    pub fn tick(&mut self, now: Instant) {
        let events: Vec<ComponentEvent> = self
            .components_mut()
            .into_iter()
            .filter_map(|component| component.tick(now))
            .collect();
        for event in events {
            self.apply(Some(event));
        }
    }

    /// Earliest timer deadline across all widgets.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.counter.next_deadline(),
            self.todo.next_deadline(),
            self.reaction.next_deadline(),
            self.color.next_deadline(),
            self.pangram.next_deadline(),
        ]
        .into_iter()
        .fold(None, earliest)
    }

    /// Cancels every pending timer. Called once on exit.
    pub fn teardown(&mut self) {
        for component in self.components_mut() {
            component.teardown();
        }
    }

    fn apply(&mut self, event: Option<ComponentEvent>) {
        match event {
            Some(ComponentEvent::Status(message)) => self.set_status(message),
            Some(ComponentEvent::Alert { title, message }) => {
                debug!(%title, "alert raised");
                self.alert = Some(Alert { title, message });
            }
            None => {}
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
///
/// Sleeps until input arrives or the nearest widget timer is due, whichever
/// comes first, capped at 100ms.
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    info!(widget = state.active.title(), "event loop started");
    loop {
        terminal
            .draw(|f| render(f, state))
            .context("Failed to draw frame")?;

        let timeout = state
            .next_deadline()
            .map_or(MAX_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now()).min(MAX_POLL)
            });

        if event::poll(timeout).context("Failed to poll terminal events")? {
            match event::read().context("Failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key, Instant::now())? {
                        break;
                    }
                }
                Event::Paste(text) => state.handle_paste(&text, Instant::now()),
                // Resize and everything else just triggers a redraw
                _ => {}
            }
        }

        state.tick(Instant::now());

        if state.should_quit {
            break;
        }
    }

    state.teardown();
    info!("event loop finished");
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Active widget
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_tabs(f, chunks[0], state);
    state.active_component().render(f, chunks[1], theme);
    StatusBar::render(f, chunks[2], state, theme);

    if let Some(help) = &state.help {
        help.render(f, f.area(), theme);
    }

    // Alerts sit on top of everything
    if let Some(alert) = &state.alert {
        render_alert(f, alert, theme);
    }
}

fn render_tabs(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let titles: Vec<Line> = WidgetKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Line::from(format!("{} {}", i + 1, kind.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.active.index())
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {APP_DISPLAY_NAME} "))
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(tabs, area);
}

/// Render an alert overlay on top of all other UI elements
fn render_alert(f: &mut Frame, alert: &Alert, theme: &Theme) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            alert.message.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(theme.text_muted),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", alert.title))
            .title_style(
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(theme.warning))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(body, area);
}

/// Rect of `percent_x` by `percent_y` centered inside `r`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns `Ok(true)` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<bool> {
    // Quit works everywhere, popups included
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q' | 'c'))
    {
        state.should_quit = true;
        return Ok(true);
    }

    if state.alert.is_some() || state.help.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        AppState::new(Config::new(), Theme::dark(), StdRng::seed_from_u64(5))
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_centered_rect() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 25);
    }

    #[test]
    fn test_ctrl_q_quits_even_with_alert() {
        let mut state = state();
        state.alert = Some(Alert {
            title: "t".into(),
            message: "m".into(),
        });
        let quit = handle_key_event(
            &mut state,
            key(KeyCode::Char('q'), KeyModifiers::CONTROL),
            Instant::now(),
        )
        .unwrap();
        assert!(quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_switch_hides_reaction_trial() {
        let mut state = state();
        state.switch_to(WidgetKind::Reaction);
        state.dispatch_key(key(KeyCode::Char(' '), KeyModifiers::NONE), Instant::now());
        assert!(state.next_deadline().is_some());

        state.switch_to(WidgetKind::Todo);
        assert!(state.next_deadline().is_none());
    }

    #[test]
    fn test_render_every_widget() {
        let mut state = state();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        for kind in WidgetKind::ALL {
            state.switch_to(kind);
            terminal.draw(|f| render(f, &state)).unwrap();
        }

        state.help = Some(HelpOverlayState::new());
        state.alert = Some(Alert {
            title: "Game over!".into(),
            message: "Your final score is 80%".into(),
        });
        terminal.draw(|f| render(f, &state)).unwrap();
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut state = state();
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        for kind in WidgetKind::ALL {
            state.switch_to(kind);
            terminal.draw(|f| render(f, &state)).unwrap();
        }
    }
}
