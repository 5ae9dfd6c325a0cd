//! ToDo List View Component
//!
//! Renders the list in insertion order.

use leptos::prelude::*;

use crate::components::ToDoRow;
use crate::store::{store_todos, store_toggle_todo, AppStore};

#[component]
pub fn ToDoListView(store: AppStore) -> impl IntoView {
    let on_toggle = Callback::new(move |index: usize| {
        match store_toggle_todo(&store, index) {
            Ok(completed) => log::debug!("todo {} completed={}", index, completed),
            Err(e) => log::warn!("{}", e),
        }
    });

    view! {
        <div id="todo" class="todo-list">
            <ul>
                {move || {
                    store_todos(&store)
                        .into_iter()
                        .enumerate()
                        .map(|(index, todo)| view! { <ToDoRow index=index todo=todo on_toggle=on_toggle /> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
