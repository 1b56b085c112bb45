//! Edit Session
//!
//! At most one inline edit is open per list. The target is pinned to the
//! item's id when the edit starts, so later changes to the visible window
//! cannot move the edit onto a different row.

use crate::models::{is_blank, Item, ItemId, ItemPatch};
use crate::api::SyncError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: ItemId,
    pub draft: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    session: Option<EditSession>,
}

impl EditState {
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self, id: &ItemId) -> bool {
        self.session.as_ref().is_some_and(|s| &s.target == id)
    }

    /// Open an edit on row `index` of the visible window. Any open edit is
    /// discarded. Returns false if the index is outside the window.
    pub fn start(&mut self, visible: &[Item], index: usize) -> bool {
        match visible.get(index) {
            Some(item) => {
                self.start_item(item);
                true
            }
            None => false,
        }
    }

    pub fn start_item(&mut self, item: &Item) {
        self.session = Some(EditSession {
            target: item.id.clone(),
            draft: item.text.clone(),
        });
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.draft = draft.into();
        }
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Patch to send for a save, or a validation failure for a blank draft.
    pub fn commit(&self) -> Result<Option<(ItemId, ItemPatch)>, SyncError> {
        match &self.session {
            None => Ok(None),
            Some(session) if is_blank(&session.draft) => {
                Err(SyncError::Validation("text must not be empty".to_string()))
            }
            Some(session) => Ok(Some((
                session.target.clone(),
                ItemPatch::text(session.draft.clone()),
            ))),
        }
    }

    /// Close the session after a confirmed save, unless a different edit
    /// was opened while the save was in flight.
    pub fn finish(&mut self, saved: &ItemId) {
        if self.is_editing(saved) {
            self.session = None;
        }
    }
}
