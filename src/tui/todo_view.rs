//! Todo list widget view.
//!
//! The view has two focus targets: the text input where new entries are typed
//! and the list where entries are toggled and deleted. Tab moves between them.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::component::{is_text_input, Component, ComponentEvent, InputContext};
use super::Theme;
use crate::models::TodoList;

/// Full key reference for the help overlay.
pub const HELP: &[(&str, &str)] = &[
    ("Enter", "Add the typed task (input focused)"),
    ("Tab", "Switch between input and list"),
    ("↑ / ↓", "Select a task (list focused)"),
    ("Space / Enter", "Toggle completed (list focused)"),
    ("d / Delete", "Delete selected task (list focused)"),
    ("Esc", "Clear input, or return to input from list"),
];

/// Which part of the todo view receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFocus {
    /// Typing a new entry
    #[default]
    Input,
    /// Navigating existing entries
    List,
}

/// Todo list widget.
#[derive(Debug, Default)]
pub struct TodoView {
    list: TodoList,
    input: String,
    focus: TodoFocus,
    selected: usize,
}

impl TodoView {
    /// Creates an empty view with the input focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying list.
    #[must_use]
    pub const fn list(&self) -> &TodoList {
        &self.list
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current focus.
    #[must_use]
    pub const fn focus(&self) -> TodoFocus {
        self.focus
    }

    /// Index of the selected entry, if the list is non-empty.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        (!self.list.is_empty()).then_some(self.selected)
    }

    fn submit_input(&mut self) -> Option<ComponentEvent> {
        self.list.add(&self.input)?;
        self.input.clear();
        self.selected = self.list.total_count() - 1;
        Some(ComponentEvent::status(format!(
            "{} of {} completed",
            self.list.completed_count(),
            self.list.total_count()
        )))
    }

    fn toggle_selected(&mut self) {
        if let Some(todo) = self.list.items().get(self.selected) {
            let id = todo.id;
            self.list.toggle(id);
        }
    }

    fn delete_selected(&mut self) -> Option<ComponentEvent> {
        let todo = self.list.items().get(self.selected)?;
        let (id, text) = (todo.id, todo.text.clone());
        self.list.delete(id);

        if self.list.is_empty() {
            self.selected = 0;
            self.focus = TodoFocus::Input;
        } else {
            self.selected = self.selected.min(self.list.total_count() - 1);
        }
        Some(ComponentEvent::status(format!("Deleted \"{text}\"")))
    }

    fn handle_input_focus(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Esc => {
                self.input.clear();
                None
            }
            KeyCode::Tab | KeyCode::Down if !self.list.is_empty() => {
                self.focus = TodoFocus::List;
                None
            }
            KeyCode::Char(c) if is_text_input(&key) => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_list_focus(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.list.total_count() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle_selected();
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => {
                self.focus = TodoFocus::Input;
                None
            }
            _ => None,
        }
    }
}

impl Component for TodoView {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, _ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        match self.focus {
            TodoFocus::Input => self.handle_input_focus(key),
            TodoFocus::List => self.handle_list_focus(key),
        }
    }

    fn handle_paste(&mut self, text: &str, _ctx: &mut InputContext<'_>) -> Option<Self::Event> {
        if self.focus == TodoFocus::Input {
            // Single-line input; pasted newlines become spaces
            self.input
                .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let header = if self.list.is_empty() {
            Line::from(Span::styled(
                "Add your first task below",
                Style::default().fg(theme.text_muted),
            ))
        } else {
            Line::from(vec![
                Span::styled("Done ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    self.list.summary(),
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        };
        f.render_widget(Paragraph::new(header), chunks[0]);

        let focus_style = |focused: bool| {
            if focused {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_muted)
            }
        };

        // Input line with a block cursor when focused
        let input_focused = self.focus == TodoFocus::Input;
        let mut input_spans = vec![Span::styled(
            self.input.as_str(),
            Style::default().fg(theme.text),
        )];
        if input_focused {
            input_spans.push(Span::styled("█", Style::default().fg(theme.accent)));
        }
        if self.input.is_empty() && !input_focused {
            input_spans = vec![Span::styled(
                "What needs to be done?",
                Style::default().fg(theme.text_muted),
            )];
        }
        let input = Paragraph::new(Line::from(input_spans)).block(
            Block::default()
                .title(" New task ")
                .borders(Borders::ALL)
                .border_style(focus_style(input_focused)),
        );
        f.render_widget(input, chunks[1]);

        let list_focused = self.focus == TodoFocus::List;
        let list_block = Block::default()
            .title(" Tasks ")
            .borders(Borders::ALL)
            .border_style(focus_style(list_focused));

        if self.list.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "Nothing to do yet.",
                Style::default().fg(theme.text_muted),
            )))
            .block(list_block);
            f.render_widget(empty, chunks[2]);
        } else {
            let items: Vec<ListItem> = self
                .list
                .items()
                .iter()
                .map(|todo| {
                    let (mark, text_style) = if todo.completed {
                        (
                            "[x] ",
                            Style::default()
                                .fg(theme.text_muted)
                                .add_modifier(Modifier::CROSSED_OUT),
                        )
                    } else {
                        ("[ ] ", Style::default().fg(theme.text))
                    };
                    let created = todo
                        .created
                        .with_timezone(&chrono::Local)
                        .format("%H:%M")
                        .to_string();
                    ListItem::new(Line::from(vec![
                        Span::styled(mark, Style::default().fg(theme.primary)),
                        Span::styled(todo.text.as_str(), text_style),
                        Span::styled(format!("  {created}"), Style::default().fg(theme.text_muted)),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(list_block)
                .highlight_symbol("> ")
                .highlight_style(if list_focused {
                    Style::default()
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                });

            let mut list_state = ListState::default().with_selected(self.selected());
            f.render_stateful_widget(list, chunks[2], &mut list_state);
        }

        if !self.list.is_empty() {
            let footer = Paragraph::new(Line::from(Span::styled(
                format!(
                    "{} of {} completed",
                    self.list.completed_count(),
                    self.list.total_count()
                ),
                Style::default().fg(theme.text_secondary),
            )));
            f.render_widget(footer, chunks[3]);
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focus {
            TodoFocus::Input => vec![("Enter", "Add"), ("Tab", "List"), ("Esc", "Clear")],
            TodoFocus::List => vec![
                ("Space", "Toggle"),
                ("d", "Delete"),
                ("↑↓", "Select"),
                ("Tab", "Input"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rand::{rngs::StdRng, SeedableRng};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn press(view: &mut TodoView, code: KeyCode) -> Option<ComponentEvent> {
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = InputContext {
            now: Instant::now(),
            rng: &mut rng,
        };
        view.handle_input(KeyEvent::new(code, KeyModifiers::NONE), &mut ctx)
    }

    fn type_text(view: &mut TodoView, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_adds_and_clears_input() {
        let mut view = TodoView::new();
        type_text(&mut view, "buy milk");
        assert_eq!(view.input(), "buy milk");

        press(&mut view, KeyCode::Enter);
        assert_eq!(view.input(), "");
        assert_eq!(view.list().total_count(), 1);
        assert_eq!(view.list().items()[0].text, "buy milk");
    }

    #[test]
    fn test_blank_input_is_kept_and_not_added() {
        let mut view = TodoView::new();
        type_text(&mut view, "   ");
        assert!(press(&mut view, KeyCode::Enter).is_none());
        assert!(view.list().is_empty());
        assert_eq!(view.input(), "   ");
    }

    #[test]
    fn test_tab_needs_entries() {
        let mut view = TodoView::new();
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus(), TodoFocus::Input);

        type_text(&mut view, "a");
        press(&mut view, KeyCode::Enter);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus(), TodoFocus::List);
    }

    #[test]
    fn test_list_toggle_and_delete() {
        let mut view = TodoView::new();
        for text in ["one", "two", "three"] {
            type_text(&mut view, text);
            press(&mut view, KeyCode::Enter);
        }
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.selected(), Some(2));

        press(&mut view, KeyCode::Up);
        press(&mut view, KeyCode::Char(' '));
        assert!(view.list().items()[1].completed);
        assert_eq!(view.list().completed_count(), 1);

        press(&mut view, KeyCode::Char('d'));
        let texts: Vec<_> = view.list().items().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "three"]);
        assert_eq!(view.selected(), Some(1));
    }

    #[test]
    fn test_deleting_last_entry_returns_focus_to_input() {
        let mut view = TodoView::new();
        type_text(&mut view, "solo");
        press(&mut view, KeyCode::Enter);
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Delete);

        assert!(view.list().is_empty());
        assert_eq!(view.focus(), TodoFocus::Input);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_letters_in_list_focus_do_not_type() {
        let mut view = TodoView::new();
        type_text(&mut view, "x");
        press(&mut view, KeyCode::Enter);
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Char('z'));
        assert_eq!(view.input(), "");
    }

    fn rendered_text(view: &TodoView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal
            .draw(|f| view.render(f, f.area(), &Theme::dark()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let area = *buffer.area();
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_header_shows_summary() {
        let mut view = TodoView::new();
        assert!(rendered_text(&view).contains("Add your first task below"));

        type_text(&mut view, "a");
        press(&mut view, KeyCode::Enter);
        type_text(&mut view, "b");
        press(&mut view, KeyCode::Enter);
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Char(' '));

        let text = rendered_text(&view);
        assert!(text.contains("Done 1/2"), "{text}");
        assert!(text.contains("1 of 2 completed"));
    }
}
