//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! One store per session, created by `App` and handed to components as a prop.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_core::{ToDo, ToDoList, ToDoResult};

/// Progress of the optional remote seed
#[derive(Clone, Debug, PartialEq)]
pub enum SeedStatus {
    /// Using the built-in todos
    Defaults,
    Loading,
    Loaded(usize),
    /// Seed arrived after the user edited the list and was dropped
    Ignored(usize),
    /// Kept the built-in todos because the fetch failed
    Failed(String),
}

/// Session state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The session's todo list
    pub todos: ToDoList,
    /// Where the initial todos came from
    pub seed_status: SeedStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            todos: ToDoList::new(),
            seed_status: SeedStatus::Defaults,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the todos for rendering (tracks the list)
pub fn store_todos(store: &AppStore) -> Vec<ToDo> {
    store.todos().read().items().to_vec()
}

/// (total, completed) for the summary line
pub fn store_counts(store: &AppStore) -> (usize, usize) {
    let todos = store.todos().read();
    (todos.len(), todos.completed_count())
}

pub fn store_seed_status(store: &AppStore) -> SeedStatus {
    store.seed_status().get()
}

/// Append a todo to the end of the list
pub fn store_add_todo(store: &AppStore, text: String) {
    store.todos().write().add(text);
}

/// Remove the last todo
pub fn store_remove_last(store: &AppStore) -> ToDoResult<ToDo> {
    store.todos().write().remove_last()
}

/// Flip completion of the todo at `index`
pub fn store_toggle_todo(store: &AppStore, index: usize) -> ToDoResult<bool> {
    store.todos().write().toggle(index)
}

pub fn store_set_seed_status(store: &AppStore, status: SeedStatus) {
    *store.seed_status().write() = status;
}

/// Apply the remote seed, unless the user has already edited the list
pub fn store_apply_seed(store: &AppStore, todos: Vec<ToDo>) {
    let count = todos.len();
    let applied = store.todos().write().seed_if_untouched(todos);
    *store.seed_status().write() = if applied {
        SeedStatus::Loaded(count)
    } else {
        SeedStatus::Ignored(count)
    };
}
