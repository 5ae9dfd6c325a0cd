//! New ToDo Form Component
//!
//! Text input plus the add / remove-last actions.

use leptos::prelude::*;

use crate::store::{store_add_todo, store_remove_last, AppStore};

#[component]
pub fn NewToDoForm(store: AppStore) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_add_todo(&store, new_text.get());
        set_new_text.set(String::new());
    };

    let remove_todo = move |_: web_sys::MouseEvent| match store_remove_last(&store) {
        Ok(removed) => log::info!("removed todo {:?}", removed.text()),
        Err(e) => log::warn!("{}", e),
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                id="new-todo-name"
                type="text"
                placeholder="Add new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button id="add-todo" type="submit">"Add"</button>
            <button id="remove-todo" type="button" on:click=remove_todo>"Remove last"</button>
        </form>
    }
}
