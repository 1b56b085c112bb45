//! New Item Form Component
//!
//! Compose field for adding an idea or feature.

use leptos::prelude::*;

use crate::components::list_section::{spawn_op, SyncHandle};
use crate::models::ListKind;
use crate::state::ListState;

#[component]
pub fn NewItemForm(kind: ListKind, state: RwSignal<ListState>, sync: SyncHandle) -> impl IntoView {
    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // blank input is rejected by the sync client before any request
        spawn_op(sync, |s| async move { s.create().await });
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <textarea
                rows="2"
                placeholder=format!("Add a new {}...", kind.noun())
                prop:value=move || state.with(|s| s.compose.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| s.compose = text);
                }
            />
            <button type="submit" class="add-btn">"Add +"</button>
        </form>
    }
}
