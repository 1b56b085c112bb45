//! Remote Sync Client
//!
//! Runs one request per user action and folds the confirmed result back
//! into the [`ListState`]. Nothing is applied optimistically: on failure the
//! store keeps its previous contents and the error is both recorded on the
//! state and returned to the caller.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ListService, Operation, SyncError};
use crate::models::{is_blank, Item, ItemId, ItemPatch, ListKind, NewItem};
use crate::state::ListState;

/// Access to a [`ListState`] that outlives await points.
///
/// Closures run synchronously; no borrow is held across a request.
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R;
    fn update_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<ListState>> {
    fn read_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl StateHandle for RwSignal<ListState> {
    fn read_state<R>(&self, f: impl FnOnce(&ListState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut ListState) -> R) -> R {
        f(&mut self.write())
    }
}

#[derive(Debug, Clone)]
pub struct RemoteSync<S, H> {
    service: S,
    state: H,
}

impl<S: ListService, H: StateHandle> RemoteSync<S, H> {
    pub fn new(service: S, state: H) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    fn kind(&self) -> ListKind {
        self.state.read_state(|s| s.kind)
    }

    fn fail<T>(&self, op: Operation, error: SyncError) -> Result<T, SyncError> {
        log::warn!("[{}] could not {}: {}", self.kind().path(), op, error);
        self.state.update_state(|s| s.apply_failure(op, error.clone()));
        Err(error)
    }

    /// Initial full fetch. Sets `loading` for the duration.
    pub async fn load(&self) -> Result<(), SyncError> {
        let kind = self.kind();
        self.state.update_state(|s| s.loading = true);
        match self.service.list(kind).await {
            Ok(items) => {
                log::debug!("[{}] loaded {} items", kind.path(), items.len());
                self.state.update_state(|s| s.apply_loaded(items));
                Ok(())
            }
            Err(e) => self.fail(Operation::Load, e),
        }
    }

    /// Create an item from the compose field.
    pub async fn create(&self) -> Result<ItemId, SyncError> {
        let (kind, text) = self.state.read_state(|s| (s.kind, s.compose.clone()));
        if is_blank(&text) {
            return Err(SyncError::Validation("text must not be empty".to_string()));
        }
        match self.service.create(kind, &NewItem::new(text)).await {
            Ok(item) => {
                let id = item.id.clone();
                log::debug!("[{}] created {}", kind.path(), id);
                self.state.update_state(|s| s.apply_created(item));
                Ok(id)
            }
            Err(e) => self.fail(Operation::Create, e),
        }
    }

    /// Generic patch; the reply replaces the stored item with the same id.
    pub async fn update(&self, id: &ItemId, patch: ItemPatch) -> Result<(), SyncError> {
        self.send_patch(Operation::Update, id, patch).await
    }

    async fn send_patch(
        &self,
        op: Operation,
        id: &ItemId,
        patch: ItemPatch,
    ) -> Result<(), SyncError> {
        let kind = self.kind();
        if patch.text.as_deref().is_some_and(is_blank) {
            return Err(SyncError::Validation("text must not be empty".to_string()));
        }
        match self.service.update(kind, id, &patch).await {
            Ok(item) => {
                log::debug!("[{}] updated {}", kind.path(), id);
                self.state.update_state(|s| s.apply_updated(item));
                Ok(())
            }
            Err(e) => self.fail(op, e),
        }
    }

    /// Flip `favorite`. The new value is computed from the store when the
    /// request is issued, so two toggles sent before either reply both ask
    /// for the same value and the later reply wins.
    pub async fn toggle_favorite(&self, id: &ItemId) -> Result<(), SyncError> {
        let current = self.current_flag(id, |item| item.favorite)?;
        self.send_patch(Operation::ToggleFavorite, id, ItemPatch::favorite(!current))
            .await
    }

    /// Flip `done`; same capture rule as [`Self::toggle_favorite`].
    pub async fn toggle_done(&self, id: &ItemId) -> Result<(), SyncError> {
        let current = self.current_flag(id, |item| item.done)?;
        self.send_patch(Operation::ToggleDone, id, ItemPatch::done(!current))
            .await
    }

    fn current_flag(
        &self,
        id: &ItemId,
        flag: impl FnOnce(&Item) -> bool,
    ) -> Result<bool, SyncError> {
        self.state
            .read_state(|s| s.store.get(id).map(flag))
            .ok_or_else(|| SyncError::NotFound(id.clone()))
    }

    /// Save the open inline edit. Closes the session on success; a blank
    /// draft is rejected before any request.
    pub async fn save_edit(&self) -> Result<(), SyncError> {
        let Some((id, patch)) = self.state.read_state(|s| s.edit.commit())? else {
            return Ok(());
        };
        self.send_patch(Operation::SaveEdit, &id, patch).await?;
        self.state.update_state(|s| s.edit.finish(&id));
        Ok(())
    }

    /// Delete after the service confirms; no optimistic removal.
    pub async fn delete(&self, id: &ItemId) -> Result<(), SyncError> {
        let kind = self.kind();
        match self.service.delete(kind, id).await {
            Ok(()) => {
                log::debug!("[{}] deleted {}", kind.path(), id);
                self.state.update_state(|s| s.apply_deleted(id));
                Ok(())
            }
            Err(e) => self.fail(Operation::Delete, e),
        }
    }
}
