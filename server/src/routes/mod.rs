//! HTTP Layer
//!
//! `axum` routes that bridge clients to the repository:
//!
//! - `GET    /api/{kind}`       full list
//! - `POST   /api/{kind}`       create
//! - `PATCH  /api/{kind}/{id}`  partial update
//! - `DELETE /api/{kind}/{id}`  delete

mod error;
mod extract;
mod item_routes;

use std::sync::Arc;

use axum::routing::{get, patch};
use axum::Router;

use crate::repository::ListRepository;

pub use error::ApiError;
pub use extract::ApiJson;
pub use item_routes::*;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ListRepository>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/{kind}", get(list_items).post(create_item))
        .route("/api/{kind}/{id}", patch(update_item).delete(delete_item))
        .with_state(state)
}
