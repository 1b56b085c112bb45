//! Domain Layer
//!
//! List items and the errors operations on them can produce.
//! No HTTP or storage types in here.

mod error;
mod item;

pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemPatch, ListKind, NewItem};
