//! Domain Layer
//!
//! Todo entities and the list that owns them.
//! No I/O lives here.

mod error;
mod list;
mod todo;

pub use error::{ToDoError, ToDoResult};
pub use list::{ToDoList, DEFAULT_TODOS};
pub use todo::ToDo;
