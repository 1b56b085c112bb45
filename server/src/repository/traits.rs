//! Repository Layer - Core Traits
//!
//! Abstract interface for item storage. One repository serves every
//! [`ListKind`]; each kind is its own collection.

use async_trait::async_trait;

use crate::domain::{DomainResult, Item, ItemPatch, ListKind, NewItem};

#[async_trait]
pub trait ListRepository: Send + Sync {
    /// All items of a kind in insertion order
    async fn list(&self, kind: ListKind) -> DomainResult<Vec<Item>>;

    /// Store a new item and return it with its assigned id
    async fn create(&self, kind: ListKind, item: &NewItem) -> DomainResult<Item>;

    /// Apply the set fields of `patch`; `None` if the id is unknown
    async fn patch(&self, kind: ListKind, id: &str, patch: &ItemPatch)
        -> DomainResult<Option<Item>>;

    /// Delete by id; `false` if there was nothing to delete
    async fn delete(&self, kind: ListKind, id: &str) -> DomainResult<bool>;
}
