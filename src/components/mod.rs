//! UI Components
//!
//! Leptos components for the todo widget.

mod new_todo_form;
mod todo_list_view;
mod todo_row;

pub use new_todo_form::NewToDoForm;
pub use todo_list_view::ToDoListView;
pub use todo_row::ToDoRow;
