//! Item Row Component
//!
//! A single idea/feature with favorite, done, edit and delete actions, or
//! the inline editor when this row is the edit target.

use leptos::prelude::*;

use crate::components::list_section::{spawn_op, SyncHandle};
use crate::models::Item;
use crate::state::ListState;

#[component]
pub fn ItemRow(
    /// Position in the visible window
    index: usize,
    item: Item,
    state: RwSignal<ListState>,
    sync: SyncHandle,
) -> impl IntoView {
    let id = item.id.clone();
    let favorite = item.favorite;
    let done = item.done;
    let text = item.text.clone();

    let editing = {
        let id = id.clone();
        move || state.with(|s| s.edit.is_editing(&id))
    };

    let draft = move || {
        state.with(|s| s.edit.session().map(|e| e.draft.clone()).unwrap_or_default())
    };

    let on_toggle_favorite = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let id = id.clone();
            spawn_op(sync, move |s| async move { s.toggle_favorite(&id).await });
        }
    };

    let on_toggle_done = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let id = id.clone();
            spawn_op(sync, move |s| async move { s.toggle_done(&id).await });
        }
    };

    let on_delete = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let id = id.clone();
            spawn_op(sync, move |s| async move { s.delete(&id).await });
        }
    };

    view! {
        <li class={if done { "item-row done" } else { "item-row" }}>
            <Show
                when=editing
                fallback=move || {
                    let on_toggle_favorite = on_toggle_favorite.clone();
                    let on_toggle_done = on_toggle_done.clone();
                    let on_delete = on_delete.clone();
                    view! {
                        <p class="item-text">{text.clone()}</p>
                        <div class="item-actions">
                            <button
                                class={if favorite { "favorite-btn active" } else { "favorite-btn" }}
                                on:click=on_toggle_favorite
                            >
                                {if favorite { "★" } else { "☆" }}
                            </button>
                            <button
                                class={if done { "done-btn active" } else { "done-btn" }}
                                on:click=on_toggle_done
                            >
                                "✔"
                            </button>
                            <button
                                class="edit-btn"
                                on:click=move |_| state.update(|s| { s.start_edit(index); })
                            >
                                "✏️"
                            </button>
                            <button class="delete-btn" on:click=on_delete>
                                "🗑️"
                            </button>
                        </div>
                    }
                }
            >
                <div class="edit-box">
                    <textarea
                        rows="2"
                        prop:value=draft
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            state.update(|s| s.edit.set_draft(text));
                        }
                    />
                    <div class="edit-actions">
                        <button
                            class="save-btn"
                            on:click=move |_| spawn_op(sync, |s| async move { s.save_edit().await })
                        >
                            "Save"
                        </button>
                        <button class="cancel-btn" on:click=move |_| state.update(|s| s.edit.cancel())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </li>
    }
}
