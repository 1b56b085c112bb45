//! List Section Component
//!
//! One column of the tracker: compose form, the visible window of the list
//! and the show more / show less controls.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{HttpListService, SyncError};
use crate::components::{ItemRow, NewItemForm};
use crate::models::ListKind;
use crate::state::ListState;
use crate::sync::RemoteSync;

pub type ListSync = RemoteSync<HttpListService, RwSignal<ListState>>;

/// Copyable handle to the section's sync client
pub type SyncHandle = StoredValue<ListSync, LocalStorage>;

/// Placeholder rows shown until the first fetch returns
const SKELETON_ROWS: usize = 4;

/// Run a sync operation in the background. Failures are already recorded
/// on the list state by the sync client.
pub fn spawn_op<T, F, Fut>(sync: SyncHandle, op: F)
where
    F: FnOnce(ListSync) -> Fut + 'static,
    Fut: Future<Output = Result<T, SyncError>> + 'static,
{
    let sync = sync.get_value();
    spawn_local(async move {
        let _ = op(sync).await;
    });
}

#[component]
pub fn ListSection(kind: ListKind, service: HttpListService) -> impl IntoView {
    let state = RwSignal::new(ListState::new(kind));
    let sync: SyncHandle = StoredValue::new_local(RemoteSync::new(service, state));

    // Initial fetch on mount
    spawn_op(sync, |s| async move { s.load().await });

    let visible_rows = move || {
        state.with(|s| s.visible().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <section class="list-section">
            <h2>{kind.title()}</h2>

            <NewItemForm kind=kind state=state sync=sync />

            {move || state.with(|s| s.last_error.as_ref().map(|e| e.to_string())).map(|msg| view! {
                <p class="sync-error">{msg}</p>
            })}

            <ul class="item-list">
                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| (0..SKELETON_ROWS)
                        .map(|_| view! { <li class="item-row skeleton"></li> })
                        .collect_view()
                >
                    <For
                        each=visible_rows
                        key=|(index, item)| {
                            (*index, item.id.clone(), item.text.clone(), item.favorite, item.done)
                        }
                        children=move |(index, item)| view! {
                            <ItemRow index=index item=item state=state sync=sync />
                        }
                    />
                </Show>
            </ul>

            <div class="list-controls">
                <Show when=move || state.with(|s| s.can_show_more())>
                    <button class="show-more-btn" on:click=move |_| state.update(|s| s.show_more())>
                        "Show more"
                    </button>
                </Show>
                <Show when=move || state.with(|s| s.can_show_less())>
                    <button class="show-less-btn" on:click=move |_| state.update(|s| s.show_less())>
                        "Show less"
                    </button>
                </Show>
            </div>
        </section>
    }
}
