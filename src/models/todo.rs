//! Todo list with stable per-item identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique id, never reused within a list
    pub id: Uuid,
    /// Trimmed, non-empty text
    pub text: String,
    /// Whether the entry is checked off
    pub completed: bool,
    /// When the entry was added
    pub created: DateTime<Utc>,
}

/// Ordered todo list. Order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    /// Looks an entry up by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    /// Appends a new entry.
    ///
    /// Returns the new id, or `None` when the text is empty after trimming.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        // Ids stay unique for the list's lifetime
        let mut id = Uuid::new_v4();
        while self.get(id).is_some() {
            id = Uuid::new_v4();
        }

        self.items.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
            created: Utc::now(),
        });
        debug!(%id, "todo added");
        Some(id)
    }

    /// Flips the completed flag. Returns `false` if `id` is unknown.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                debug!(%id, completed = todo.completed, "todo toggled");
                true
            }
            None => false,
        }
    }

    /// Removes an entry. Returns `false` if `id` is unknown.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        let removed = self.items.len() != before;
        if removed {
            debug!(%id, "todo deleted");
        }
        removed
    }

    /// Number of completed entries.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.completed).count()
    }

    /// Number of entries.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Progress as `"completed/total"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}/{}", self.completed_count(), self.total_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims() {
        let mut list = TodoList::new();
        let id = list.add("  buy milk \n").unwrap();
        assert_eq!(list.get(id).unwrap().text, "buy milk");
        assert!(!list.get(id).unwrap().completed);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut list = TodoList::new();
        assert_eq!(list.add(""), None);
        assert_eq!(list.add("  "), None);
        assert_eq!(list.add("\t\n"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_insertion_order_and_unique_ids() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("a").unwrap();
        assert_ne!(a, c);
        let ids: Vec<Uuid> = list.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_toggle_and_counts() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        list.add("b").unwrap();
        assert!(list.toggle(a));
        assert_eq!(list.summary(), "1/2");
        assert!(list.toggle(a));
        assert_eq!(list.completed_count(), 0);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut list = TodoList::new();
        list.add("a").unwrap();
        let before = list.clone();
        assert!(!list.toggle(Uuid::new_v4()));
        assert!(!list.delete(Uuid::new_v4()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        assert!(list.delete(a));
        assert_eq!(list.total_count(), 1);
        assert_eq!(list.items()[0].id, b);
    }
}
