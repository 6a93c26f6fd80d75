//! Change descriptors produced by the canvas, and the reducers that apply them.
//!
//! Each batch is applied in order against a copy of the previous collection. Items
//! a batch does not touch come back equal to what went in, and descriptors that name
//! an id the collection does not hold are dropped without error. A node deleted while
//! its drag event is still in flight is an expected race, not a failure.

use ahash::AHashMap;

mod edge;
mod node;

pub use edge::{EdgeChange, apply_edge_changes};
pub use node::{NodeChange, apply_node_changes};

/// Common surface of the items a change batch can target.
pub(crate) trait Identified: Clone {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: &str);
    fn set_selected(&mut self, selected: bool);
}

/// Working copy of a collection while a change batch is applied.
///
/// Removed items leave an empty slot behind so the id index stays valid until the
/// batch is finished.
pub(crate) struct ChangeSlots<T: Identified> {
    slots: Vec<Option<T>>,
    index: AHashMap<String, usize>,
}

impl<T: Identified> ChangeSlots<T> {
    pub(crate) fn new(items: &[T]) -> Self {
        let slots: Vec<Option<T>> = items.iter().cloned().map(Some).collect();
        let mut index = AHashMap::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            // First occurrence wins if a collection already holds duplicates.
            index.entry(item.id().to_string()).or_insert(i);
        }
        Self { slots, index }
    }

    /// Mutable access to the live item with `id`, if any.
    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let slot = *self.index.get(id)?;
        self.slots[slot].as_mut()
    }

    pub(crate) fn add(&mut self, item: T) {
        if self.index.contains_key(item.id()) {
            log::debug!("Ignoring add for '{}': id already present", item.id());
            return;
        }
        self.index.insert(item.id().to_string(), self.slots.len());
        self.slots.push(Some(item));
    }

    pub(crate) fn remove(&mut self, id: &str) {
        match self.index.remove(id) {
            Some(slot) => self.slots[slot] = None,
            None => log::trace!("Ignoring remove for unknown id '{}'", id),
        }
    }

    pub(crate) fn select(&mut self, id: &str, selected: bool) {
        self.update(id, |item| item.set_selected(selected));
    }

    pub(crate) fn replace(&mut self, id: &str, mut item: T) {
        item.set_id(id);
        self.update(id, |current| *current = item);
    }

    /// Runs `f` on the item with `id`, or logs and skips when it is absent.
    pub(crate) fn update(&mut self, id: &str, f: impl FnOnce(&mut T)) {
        match self.get_mut(id) {
            Some(item) => f(item),
            None => log::trace!("Ignoring change for unknown id '{}'", id),
        }
    }

    pub(crate) fn finish(self) -> Vec<T> {
        self.slots.into_iter().flatten().collect()
    }
}
