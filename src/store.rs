//! List Store
//!
//! Ordered, in-memory copy of one list. Only confirmed service responses
//! are written here.

use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListStore {
    items: Vec<Item>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Replace the whole list (initial load)
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Replace the item with `id` in place. Unknown ids are ignored.
    pub fn replace_by_id(&mut self, id: &ItemId, updated: Item) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                *item = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn remove_by_id(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, text: &str) -> Item {
        Item {
            id: ItemId::new(id),
            text: text.to_string(),
            favorite: false,
            done: false,
        }
    }

    fn ids(store: &ListStore) -> Vec<&str> {
        store.items().iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = ListStore::new();
        store.append(item("a", "one"));
        store.append(item("b", "two"));
        store.append(item("c", "three"));
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_replace_by_id_in_place() {
        let mut store = ListStore::new();
        store.replace_all(vec![item("a", "one"), item("b", "two"), item("c", "three")]);

        let mut updated = item("b", "TWO");
        updated.done = true;
        assert!(store.replace_by_id(&ItemId::new("b"), updated));

        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        let b = store.get(&ItemId::new("b")).unwrap();
        assert_eq!(b.text, "TWO");
        assert!(b.done);
    }

    #[test]
    fn test_remove_by_id_preserves_others() {
        let mut store = ListStore::new();
        store.replace_all(vec![item("a", "one"), item("b", "two"), item("c", "three")]);
        assert!(store.remove_by_id(&ItemId::new("b")));
        assert_eq!(ids(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = ListStore::new();
        store.replace_all(vec![item("a", "one")]);
        let snapshot = store.clone();

        assert!(!store.remove_by_id(&ItemId::new("missing")));
        assert!(!store.replace_by_id(&ItemId::new("missing"), item("missing", "x")));
        assert_eq!(store, snapshot);
    }
}
