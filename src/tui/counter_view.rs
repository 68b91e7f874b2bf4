//! Counter widget view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::component::{is_text_input, Component, ComponentEvent, InputContext};
use super::Theme;
use crate::models::Counter;

/// Full key reference for the help overlay.
pub const HELP: &[(&str, &str)] = &[
    ("+ / ↑ / →", "Increment"),
    ("- / ↓ / ←", "Decrement"),
    ("0 / r", "Reset to zero"),
];

/// Counter widget: one integer, three buttons.
#[derive(Debug, Default)]
pub struct CounterView {
    counter: Counter,
}

impl CounterView {
    /// Creates a view starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: Counter::new(),
        }
    }

    /// The underlying counter.
    #[must_use]
    pub const fn counter(&self) -> &Counter {
        &self.counter
    }
}

impl Component for CounterView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, _ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Right => self.counter.increment(),
            KeyCode::Down | KeyCode::Left => self.counter.decrement(),
            KeyCode::Char('+' | '=') if is_text_input(&key) => self.counter.increment(),
            KeyCode::Char('-' | '_') if is_text_input(&key) => self.counter.decrement(),
            KeyCode::Char('0' | 'r') if is_text_input(&key) => {
                self.counter.reset();
                return Some(ComponentEvent::status("Counter reset"));
            }
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let value = self.counter.value();
        let color = match value.signum() {
            1 => theme.success,
            -1 => theme.error,
            _ => theme.text,
        };

        let value_line = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(value_line, chunks[1]);

        let buttons = Paragraph::new(Line::from(vec![
            Span::styled("[ - ]", Style::default().fg(theme.accent)),
            Span::raw("   "),
            Span::styled("[ Reset ]", Style::default().fg(theme.text_secondary)),
            Span::raw("   "),
            Span::styled("[ + ]", Style::default().fg(theme.accent)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(buttons, chunks[3]);
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        vec![("+", "Increment"), ("-", "Decrement"), ("0", "Reset")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rand::{rngs::StdRng, SeedableRng};
    use std::time::Instant;

    fn press(view: &mut CounterView, code: KeyCode) -> Option<ComponentEvent> {
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = InputContext {
            now: Instant::now(),
            rng: &mut rng,
        };
        view.handle_input(KeyEvent::new(code, KeyModifiers::NONE), &mut ctx)
    }

    #[test]
    fn test_counter_keys() {
        let mut view = CounterView::new();
        press(&mut view, KeyCode::Char('+'));
        press(&mut view, KeyCode::Up);
        assert_eq!(view.counter().value(), 2);

        press(&mut view, KeyCode::Char('-'));
        press(&mut view, KeyCode::Down);
        press(&mut view, KeyCode::Left);
        assert_eq!(view.counter().value(), -1);

        let event = press(&mut view, KeyCode::Char('0'));
        assert_eq!(view.counter().value(), 0);
        assert!(matches!(event, Some(ComponentEvent::Status(_))));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut view = CounterView::new();
        assert!(press(&mut view, KeyCode::Char('q')).is_none());
        assert_eq!(view.counter().value(), 0);
    }
}
