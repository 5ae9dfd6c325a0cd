//! ToDo Widget App
//!
//! Root component: builds the session store and wires it into the components.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_core::{fetch_seed, resolve_seed_url, SeedSource, ToDo, ToDoResult, WidgetConfig};

use crate::components::{NewToDoForm, ToDoListView};
use crate::config::page_href;
use crate::store::{
    store_apply_seed, store_counts, store_seed_status, store_set_seed_status, AppState, AppStore,
    SeedStatus,
};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());

    // Remote seed replaces the defaults once it arrives, unless the user edited first
    if let SeedSource::Remote(url) = config.seed_source() {
        store_set_seed_status(&store, SeedStatus::Loading);
        spawn_local(async move {
            match load_seed(&url).await {
                Ok(todos) => store_apply_seed(&store, todos),
                Err(e) => {
                    log::warn!("{}; keeping default todos", e);
                    store_set_seed_status(&store, SeedStatus::Failed(e.to_string()));
                }
            }
        });
    }

    view! {
        <main class="todo-app">
            <h1>"ToDo"</h1>

            <NewToDoForm store=store />

            <ToDoListView store=store />

            <p class="todo-count">
                {move || {
                    let (total, completed) = store_counts(&store);
                    format!("{} todos, {} completed", total, completed)
                }}
            </p>

            {move || seed_status_text(&store_seed_status(&store)).map(|text| view! {
                <p class="seed-status">{text}</p>
            })}
        </main>
    }
}

async fn load_seed(url: &str) -> ToDoResult<Vec<ToDo>> {
    let resolved = resolve_seed_url(url, page_href().as_deref())?;
    fetch_seed(&reqwest::Client::new(), resolved.as_str()).await
}

fn seed_status_text(status: &SeedStatus) -> Option<String> {
    match status {
        SeedStatus::Defaults => None,
        SeedStatus::Loading => Some("Loading todos...".to_string()),
        SeedStatus::Loaded(count) => Some(format!("Loaded {} todos", count)),
        SeedStatus::Ignored(count) => Some(format!("Kept your edits, ignored {} seeded todos", count)),
        SeedStatus::Failed(reason) => Some(format!("Showing default todos ({})", reason)),
    }
}
