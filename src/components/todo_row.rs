//! ToDo Row Component

use leptos::prelude::*;
use todo_core::ToDo;

/// A single todo: checkbox plus "<text>: <status>" label
#[component]
pub fn ToDoRow(
    index: usize,
    todo: ToDo,
    #[prop(into)] on_toggle: Callback<usize>,
) -> impl IntoView {
    let completed = todo.is_completed();
    let label = todo.to_string();

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                class="todo-toggle"
                prop:checked=completed
                on:change=move |_| on_toggle.run(index)
            />
            <span class="todo-text">{label}</span>
        </li>
    }
}
