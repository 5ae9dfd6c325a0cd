//! ToDo Entity
//!
//! A single todo: display text plus a completion flag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A todo item
///
/// `text` is set at construction and never changed by the list.
/// The completion flag is read as `completed`, or `status` for older seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToDo {
    /// Item text content
    text: String,
    /// Completion status
    #[serde(default, alias = "status")]
    completed: bool,
}

impl ToDo {
    /// Create a new, not yet completed item
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_completed(text, false)
    }

    /// Create an item with an explicit completion flag
    pub fn with_completed(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flip the completion flag in place
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Set the completion flag to true, whatever it was
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Copy of this item with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            text: self.text.clone(),
            completed: !self.completed,
        }
    }
}

impl fmt::Display for ToDo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.completed { "completed" } else { "not completed" };
        write!(f, "{}: {}", self.text, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_is_incomplete_by_default() {
        let todo = ToDo::new("New ToDo");
        assert_eq!(todo.text(), "New ToDo");
        assert!(!todo.is_completed());
    }

    #[test]
    fn test_empty_text_is_allowed() {
        let todo = ToDo::new("");
        assert_eq!(todo.text(), "");
        assert!(!todo.completed);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut todo = ToDo::with_completed("Wash the car", true);
        todo.toggle_completed();
        assert!(!todo.completed);
        todo.toggle_completed();
        assert!(todo.completed);
        assert_eq!(todo.text, "Wash the car");
    }

    #[test]
    fn test_mark_completed_is_not_a_toggle() {
        let mut todo = ToDo::new("New ToDo");
        todo.mark_completed();
        assert!(todo.completed);
        todo.mark_completed();
        assert!(todo.completed);
    }

    #[test]
    fn test_toggled_leaves_original_untouched() {
        let todo = ToDo::new("ToDo2");
        let flipped = todo.toggled();
        assert!(!todo.completed);
        assert_eq!(flipped, ToDo::with_completed("ToDo2", true));
    }

    #[test]
    fn test_display_matches_row_text() {
        assert_eq!(ToDo::with_completed("ToDo1", true).to_string(), "ToDo1: completed");
        assert_eq!(ToDo::new("ToDo2").to_string(), "ToDo2: not completed");
    }

    #[test]
    fn test_deserialize_accepts_status_alias() {
        let todo: ToDo = serde_json::from_str(r#"{"text":"ToDo1","status":true}"#).unwrap();
        assert_eq!(todo, ToDo::with_completed("ToDo1", true));

        let todo: ToDo = serde_json::from_str(r#"{"text":"ToDo2"}"#).unwrap();
        assert!(!todo.completed);
    }

    #[test]
    fn test_serialize_uses_completed_field() {
        let json = serde_json::to_value(ToDo::with_completed("ToDo1", true)).unwrap();
        assert_eq!(json, serde_json::json!({"text": "ToDo1", "completed": true}));
    }
}
