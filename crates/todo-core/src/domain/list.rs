//! ToDo List
//!
//! Ordered, in-memory list of todos for one UI session.
//! Insertion order is display order; duplicates are allowed.

use super::error::{ToDoError, ToDoResult};
use super::todo::ToDo;

/// Items every fresh list starts with, in display order
pub const DEFAULT_TODOS: &[(&str, bool)] = &[("ToDo1", true), ("ToDo2", false)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoList {
    items: Vec<ToDo>,
    /// Set by the first user edit; a late seed must not overwrite edits
    touched: bool,
}

impl ToDoList {
    /// Create a list holding the two default todos
    pub fn new() -> Self {
        let items = DEFAULT_TODOS
            .iter()
            .map(|(text, completed)| ToDo::with_completed(*text, *completed))
            .collect();
        Self { items, touched: false }
    }

    /// Create a list from items loaded elsewhere, keeping their order
    pub fn from_items(items: Vec<ToDo>) -> Self {
        Self { items, touched: false }
    }

    /// Read-only view in display order
    pub fn items(&self) -> &[ToDo] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|todo| todo.is_completed()).count()
    }

    /// Whether add, remove or toggle has changed the list yet
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Append a new, not completed item
    pub fn add(&mut self, text: impl Into<String>) {
        let todo = ToDo::new(text);
        log::debug!("adding todo {:?} at position {}", todo.text(), self.items.len());
        self.items.push(todo);
        self.touched = true;
    }

    /// Remove and return the last item
    ///
    /// An empty list is left as is and reported as [`ToDoError::EmptyList`].
    pub fn remove_last(&mut self) -> ToDoResult<ToDo> {
        let removed = self.items.pop().ok_or(ToDoError::EmptyList)?;
        log::debug!("removed todo {:?}, {} left", removed.text(), self.items.len());
        self.touched = true;
        Ok(removed)
    }

    /// Flip the completion flag of the item at `index`, returning the new value
    pub fn toggle(&mut self, index: usize) -> ToDoResult<bool> {
        let len = self.items.len();
        let todo = self
            .items
            .get_mut(index)
            .ok_or(ToDoError::NoSuchItem { index, len })?;
        todo.toggle_completed();
        let completed = todo.is_completed();
        self.touched = true;
        Ok(completed)
    }

    /// Replace the items with a remote seed unless the user already edited
    ///
    /// Returns whether the seed was applied. An applied seed does not count
    /// as an edit.
    pub fn seed_if_untouched(&mut self, items: Vec<ToDo>) -> bool {
        if self.touched {
            log::info!("list already edited, ignoring {} seeded todos", items.len());
            return false;
        }
        self.items = items;
        true
    }
}

impl Default for ToDoList {
    fn default() -> Self {
        Self::new()
    }
}
