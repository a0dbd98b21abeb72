//! Authoritative item order for a sortable list.

use crate::item::{Item, ItemId};
use std::collections::HashSet;

/// Ordered sequence of items with stable identity.
///
/// Lookups and mutations with an unknown identity or an out-of-range index
/// are no-ops: the registry is touched from inside live gesture handlers and
/// must never fail there.
#[derive(Debug, Clone)]
pub struct ItemRegistry<T> {
    items: Vec<Item<T>>,
}

impl<T> Default for ItemRegistry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ItemRegistry<T> {
    /// Create a registry from an ordered sequence of items.
    /// Later duplicates of an identity are dropped.
    pub fn new(items: impl IntoIterator<Item = Item<T>>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id());
                if !fresh {
                    log::warn!("Dropping duplicate item {}", item.id());
                }
                fresh
            })
            .collect();
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of an item in the order.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    /// Get an item by identity.
    pub fn get(&self, id: ItemId) -> Option<&Item<T>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Get a mutable reference to an item by identity.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item<T>> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Get the item at a position.
    pub fn at(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(index)
    }

    /// Items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item<T>> {
        self.items.iter()
    }

    /// Items in order, as a slice.
    pub fn as_slice(&self) -> &[Item<T>] {
        &self.items
    }

    /// Identities in order.
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(Item::id).collect()
    }

    /// Move an item so it occupies `index`, shifting the items after it.
    ///
    /// `index` is clamped to the last position. Returns true if the order
    /// changed; unknown identities leave the registry untouched.
    pub fn insert_before(&mut self, id: ItemId, index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let to = index.min(self.items.len() - 1);
        if from == to {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }

    /// Detach and forget the item at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Item<T>> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Detach and forget an item by identity.
    pub fn remove(&mut self, id: ItemId) -> Option<Item<T>> {
        let index = self.index_of(id)?;
        self.remove_at(index)
    }

    /// Consume the registry, returning the items in order.
    pub fn into_items(self) -> Vec<Item<T>> {
        self.items
    }
}

impl<'a, T> IntoIterator for &'a ItemRegistry<T> {
    type Item = &'a Item<T>;
    type IntoIter = std::slice::Iter<'a, Item<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(labels: &[&'static str]) -> ItemRegistry<&'static str> {
        ItemRegistry::new(labels.iter().map(|&label| Item::new(label)))
    }

    fn labels(registry: &ItemRegistry<&'static str>) -> Vec<&'static str> {
        registry.iter().map(|item| item.content).collect()
    }

    #[test]
    fn test_index_of() {
        let reg = registry(&["a", "b", "c"]);
        let b = reg.at(1).unwrap().id();
        assert_eq!(reg.index_of(b), Some(1));
        assert_eq!(reg.index_of(ItemId::new_v4()), None);
    }

    #[test]
    fn test_insert_before_forward() {
        let mut reg = registry(&["a", "b", "c", "d"]);
        let a = reg.at(0).unwrap().id();

        assert!(reg.insert_before(a, 2));
        assert_eq!(labels(&reg), vec!["b", "c", "a", "d"]);
        assert_eq!(reg.index_of(a), Some(2));
    }

    #[test]
    fn test_insert_before_backward() {
        let mut reg = registry(&["a", "b", "c", "d"]);
        let d = reg.at(3).unwrap().id();

        assert!(reg.insert_before(d, 1));
        assert_eq!(labels(&reg), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_insert_before_clamps() {
        let mut reg = registry(&["a", "b", "c"]);
        let a = reg.at(0).unwrap().id();

        assert!(reg.insert_before(a, 99));
        assert_eq!(labels(&reg), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_insert_before_same_index() {
        let mut reg = registry(&["a", "b"]);
        let b = reg.at(1).unwrap().id();
        assert!(!reg.insert_before(b, 1));
        assert_eq!(labels(&reg), vec!["a", "b"]);
    }

    #[test]
    fn test_insert_before_unknown_is_noop() {
        let mut reg = registry(&["a", "b"]);
        assert!(!reg.insert_before(ItemId::new_v4(), 0));
        assert_eq!(labels(&reg), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_at() {
        let mut reg = registry(&["a", "b", "c"]);

        let removed = reg.remove_at(1).unwrap();
        assert_eq!(removed.content, "b");
        assert_eq!(labels(&reg), vec!["a", "c"]);

        assert!(reg.remove_at(5).is_none());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut reg = registry(&["a", "b"]);
        let a = reg.at(0).unwrap().id();
        assert!(reg.remove(a).is_some());
        assert!(reg.remove(a).is_none());
        assert_eq!(labels(&reg), vec!["b"]);
    }

    #[test]
    fn test_duplicates_dropped() {
        let item = Item::new("a");
        let reg = ItemRegistry::new(vec![item.clone(), Item::new("b"), item]);
        assert_eq!(reg.len(), 2);
        assert_eq!(labels(&reg), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_registry() {
        let mut reg: ItemRegistry<()> = ItemRegistry::default();
        assert!(reg.is_empty());
        assert!(!reg.insert_before(ItemId::new_v4(), 0));
        assert!(reg.remove_at(0).is_none());
    }
}
