//! List Service Bindings
//!
//! Frontend side of the `/api/<kind>` endpoints. The UI only talks to the
//! service through [`ListService`], so tests can swap in an in-memory one.

mod http;

use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Item, ItemId, ItemPatch, ListKind, NewItem};

pub use http::HttpListService;

/// Why an operation did not complete. The store is never touched when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Rejected locally; no request was sent
    #[error("invalid input: {0}")]
    Validation(String),
    /// The service no longer knows this id
    #[error("item {0} not found")]
    NotFound(ItemId),
    /// Network failure, unexpected status or undecodable body
    #[error("request failed: {0}")]
    Transport(String),
}

/// User-facing action a [`SyncError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    SaveEdit,
    ToggleFavorite,
    ToggleDone,
    Delete,
}

impl Operation {
    pub fn label(self) -> &'static str {
        match self {
            Operation::Load => "load the list",
            Operation::Create => "add the item",
            Operation::Update => "update the item",
            Operation::SaveEdit => "save the edit",
            Operation::ToggleFavorite => "change favorite",
            Operation::ToggleDone => "change done",
            Operation::Delete => "delete the item",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A failed operation together with what was attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not {op}: {error}")]
pub struct OpError {
    pub op: Operation,
    #[source]
    pub error: SyncError,
}

/// The external list-item service, one collection per [`ListKind`].
///
/// `?Send` because browser futures are not `Send`.
#[async_trait(?Send)]
pub trait ListService {
    /// `GET /<kind>`: the complete list in service order
    async fn list(&self, kind: ListKind) -> Result<Vec<Item>, SyncError>;

    /// `POST /<kind>`: returns the stored item with its new id
    async fn create(&self, kind: ListKind, item: &NewItem) -> Result<Item, SyncError>;

    /// `PATCH /<kind>/<id>`: returns the updated item
    async fn update(&self, kind: ListKind, id: &ItemId, patch: &ItemPatch)
        -> Result<Item, SyncError>;

    /// `DELETE /<kind>/<id>`
    async fn delete(&self, kind: ListKind, id: &ItemId) -> Result<(), SyncError>;
}

#[async_trait(?Send)]
impl<T: ListService + ?Sized> ListService for Rc<T> {
    async fn list(&self, kind: ListKind) -> Result<Vec<Item>, SyncError> {
        (**self).list(kind).await
    }

    async fn create(&self, kind: ListKind, item: &NewItem) -> Result<Item, SyncError> {
        (**self).create(kind, item).await
    }

    async fn update(
        &self,
        kind: ListKind,
        id: &ItemId,
        patch: &ItemPatch,
    ) -> Result<Item, SyncError> {
        (**self).update(kind, id, patch).await
    }

    async fn delete(&self, kind: ListKind, id: &ItemId) -> Result<(), SyncError> {
        (**self).delete(kind, id).await
    }
}
