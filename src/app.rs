//! Idea & Feature Tracker App
//!
//! Two list sections side by side, one per list kind.

use leptos::prelude::*;

use crate::api::HttpListService;
use crate::components::ListSection;
use crate::config::ClientConfig;
use crate::models::ListKind;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_location();
    log::info!("list service at {}", config.api_base);
    let service = HttpListService::new(config.api_base);

    view! {
        <main class="app-layout">
            <h1>"Idea & Feature Tracker"</h1>
            <div class="sections">
                {ListKind::ALL
                    .iter()
                    .map(|&kind| view! { <ListSection kind=kind service=service.clone() /> })
                    .collect_view()}
            </div>
        </main>
    }
}
