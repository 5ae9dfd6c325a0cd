//! Todo Core
//!
//! Layered like the widget that uses it:
//! - domain: todos, the list manager and their errors
//! - seed: optional remote source for the initial list
//! - config: settings embedded by the host page

mod domain;
pub mod config;
pub mod seed;


pub use config::WidgetConfig;
pub use domain::{ToDo, ToDoError, ToDoList, ToDoResult, DEFAULT_TODOS};
pub use seed::{fetch_seed, resolve_seed_url, SeedSource};
