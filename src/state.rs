//! List State
//!
//! Everything one list section renders from: the store, the pagination
//! window over it, the inline edit, the compose field and status flags.
//! The `apply_*` methods are the only way confirmed service results enter
//! the store; each one keeps the window and the edit session consistent.

use crate::api::{OpError, Operation, SyncError};
use crate::edit::EditState;
use crate::models::{Item, ItemId, ListKind};
use crate::pagination::PaginationWindow;
use crate::store::ListStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub kind: ListKind,
    pub store: ListStore,
    pub window: PaginationWindow,
    pub edit: EditState,
    /// Text in the "add new" field
    pub compose: String,
    /// True until the initial fetch has finished
    pub loading: bool,
    /// Most recent failed operation, cleared by the next confirmed success
    pub last_error: Option<OpError>,
}

impl ListState {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            store: ListStore::new(),
            window: PaginationWindow::new(kind.page_size()),
            edit: EditState::default(),
            compose: String::new(),
            loading: true,
            last_error: None,
        }
    }

    pub fn visible(&self) -> &[Item] {
        self.window.visible(self.store.items())
    }

    pub fn visible_count(&self) -> usize {
        self.window.visible_count(self.store.len())
    }

    pub fn can_show_more(&self) -> bool {
        self.window.can_show_more(self.store.len())
    }

    pub fn can_show_less(&self) -> bool {
        self.window.can_show_less(self.store.len())
    }

    pub fn show_more(&mut self) {
        self.window.show_more(self.store.len());
    }

    /// Collapse to one page; an open edit is dropped with it.
    pub fn show_less(&mut self) {
        self.window.show_less();
        self.edit.cancel();
    }

    /// Open an edit on row `index` of the visible window.
    pub fn start_edit(&mut self, index: usize) -> bool {
        let visible = self.window.visible(self.store.items());
        self.edit.start(visible, index)
    }

    pub fn apply_loaded(&mut self, items: Vec<Item>) {
        self.store.replace_all(items);
        self.window.reclamp(self.store.len());
        self.loading = false;
        self.last_error = None;
    }

    pub fn apply_created(&mut self, item: Item) {
        self.store.append(item);
        self.window.reclamp(self.store.len());
        self.compose.clear();
        self.last_error = None;
    }

    pub fn apply_updated(&mut self, item: Item) {
        let id = item.id.clone();
        self.store.replace_by_id(&id, item);
        self.last_error = None;
    }

    pub fn apply_deleted(&mut self, id: &ItemId) {
        if self.store.remove_by_id(id) {
            self.window.reclamp(self.store.len());
        }
        if self.edit.is_editing(id) {
            self.edit.cancel();
        }
        self.last_error = None;
    }

    /// Record a failed operation. A NotFound means the item is gone on the
    /// service side, but the store is still left alone.
    pub fn apply_failure(&mut self, op: Operation, error: SyncError) {
        self.loading = false;
        self.last_error = Some(OpError { op, error });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: usize) -> Item {
        Item {
            id: ItemId::new(id.to_string()),
            text: format!("idea {id}"),
            favorite: false,
            done: false,
        }
    }

    #[test]
    fn test_new_state_is_loading() {
        let mut state = ListState::new(ListKind::Features);
        assert!(state.loading);
        state.apply_loaded(Vec::new());
        assert!(!state.loading);
    }

    #[test]
    fn test_create_seven_show_more_twice_show_less() {
        let mut state = ListState::new(ListKind::Ideas);
        for i in 0..7 {
            state.apply_created(item(i));
        }
        assert_eq!(state.visible_count(), 3);

        state.show_more();
        state.show_more();
        assert_eq!(state.visible_count(), 7);
        assert!(state.can_show_less());

        state.show_less();
        assert_eq!(state.visible_count(), 3);
    }

    #[test]
    fn test_delete_reclamps_window() {
        let mut state = ListState::new(ListKind::Ideas);
        state.apply_loaded((0..5).map(item).collect());
        state.show_more();
        assert_eq!(state.visible_count(), 5);

        state.apply_deleted(&ItemId::new("4"));
        assert_eq!(state.visible_count(), 4);
        assert!(state.can_show_less());
        assert!(!state.can_show_more());
    }

    #[test]
    fn test_deleting_edit_target_closes_session() {
        let mut state = ListState::new(ListKind::Features);
        state.apply_loaded((0..3).map(item).collect());
        assert!(state.start_edit(1));

        state.apply_deleted(&ItemId::new("1"));
        assert!(state.edit.session().is_none());
    }

    #[test]
    fn test_edit_survives_shift_of_window() {
        let mut state = ListState::new(ListKind::Ideas);
        state.apply_loaded((0..3).map(item).collect());
        assert!(state.start_edit(2));

        // Row 0 disappears; row indices shift but the edit stays on "2"
        state.apply_deleted(&ItemId::new("0"));
        let session = state.edit.session().unwrap();
        assert_eq!(session.target, ItemId::new("2"));
        assert_eq!(session.draft, "idea 2");
    }

    #[test]
    fn test_show_less_closes_edit() {
        let mut state = ListState::new(ListKind::Ideas);
        state.apply_loaded((0..7).map(item).collect());
        state.show_more();
        state.show_more();
        assert!(state.start_edit(5));
        state.show_less();
        assert!(state.edit.session().is_none());
    }

    #[test]
    fn test_failure_keeps_store() {
        let mut state = ListState::new(ListKind::Ideas);
        state.apply_loaded((0..2).map(item).collect());
        let before = state.store.clone();

        state.apply_failure(Operation::Delete, SyncError::NotFound(ItemId::new("9")));
        assert_eq!(state.store, before);
        let failure = state.last_error.clone().unwrap();
        assert_eq!(failure.op, Operation::Delete);
        assert_eq!(failure.error, SyncError::NotFound(ItemId::new("9")));
        assert_eq!(failure.to_string(), "could not delete the item: item 9 not found");

        state.apply_created(item(2));
        assert!(state.last_error.is_none());
    }
}
