//! Per-pool locking.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::state::PoolConfig;

/// One pool id's state cell. `None` until the pool is initialized.
pub(crate) type PoolSlot = Arc<Mutex<Option<PoolConfig>>>;

/// Map from pool id to its individually locked state.
///
/// The outer `RwLock` is held only long enough to clone a slot handle, so
/// operations on distinct pools never wait on each other.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    slots: RwLock<HashMap<u64, PoolSlot>>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot of `id`, if one was ever created.
    pub(crate) fn get(&self, id: u64) -> Option<PoolSlot> {
        self.slots.read().get(&id).cloned()
    }

    /// Slot of `id`, created empty if missing.
    ///
    /// Concurrent callers for the same id receive the same slot.
    pub(crate) fn get_or_create(&self, id: u64) -> PoolSlot {
        if let Some(slot) = self.get(id) {
            return slot;
        }
        Arc::clone(self.slots.write().entry(id).or_default())
    }

    /// Drops the slot of `id` again if it is still empty and `slot` is the
    /// only handle outside the map.
    ///
    /// New handles are only cloned out under the map lock, so a slot seen
    /// here with no other holder cannot be picked up concurrently.
    pub(crate) fn release(&self, id: u64, slot: PoolSlot) {
        let mut slots = self.slots.write();
        let Some(entry) = slots.get(&id) else {
            return;
        };
        if Arc::ptr_eq(entry, &slot) && Arc::strong_count(&slot) == 2 && slot.lock().is_none() {
            slots.remove(&id);
        }
    }

    /// Ids of every initialized pool, ascending.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        let slots: Vec<(u64, PoolSlot)> = self
            .slots
            .read()
            .iter()
            .map(|(id, slot)| (*id, Arc::clone(slot)))
            .collect();
        let mut ids: Vec<u64> = slots
            .into_iter()
            .filter(|(_, slot)| slot.lock().is_some())
            .map(|(id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolParams;
    use crate::domain::{Address, BasisPoints};

    #[test]
    fn get_or_create_is_shared() {
        let registry = PoolRegistry::new();
        assert!(registry.get(1).is_none());
        let a = registry.get_or_create(1);
        let b = registry.get_or_create(1);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry.get(1).is_some());
    }

    #[test]
    fn release_drops_unused_empty_slot() {
        let registry = PoolRegistry::new();
        let slot = registry.get_or_create(1);
        registry.release(1, slot);
        assert!(registry.get(1).is_none());
    }

    #[test]
    fn release_keeps_slot_with_other_holders() {
        let registry = PoolRegistry::new();
        let waiting = registry.get_or_create(1);
        let slot = registry.get_or_create(1);
        registry.release(1, slot);
        let Some(kept) = registry.get(1) else {
            panic!("slot still referenced elsewhere");
        };
        assert!(Arc::ptr_eq(&kept, &waiting));
    }

    #[test]
    fn release_keeps_initialized_slot() {
        let registry = PoolRegistry::new();
        let Ok(params) = PoolParams::new(
            2,
            BasisPoints::new(30),
            Address::from_label(b"authority"),
            Address::from_label(b"mint-x"),
            Address::from_label(b"mint-y"),
        ) else {
            panic!("valid params");
        };
        let slot = registry.get_or_create(2);
        *slot.lock() = Some(PoolConfig::new(&params));
        registry.release(2, slot);
        assert_eq!(registry.ids(), vec![2]);
    }

    #[test]
    fn ids_skip_empty_slots() {
        let registry = PoolRegistry::new();
        let _ = registry.get_or_create(9);
        let Ok(params) = PoolParams::new(
            4,
            BasisPoints::new(30),
            Address::from_label(b"authority"),
            Address::from_label(b"mint-x"),
            Address::from_label(b"mint-y"),
        ) else {
            panic!("valid params");
        };
        *registry.get_or_create(4).lock() = Some(PoolConfig::new(&params));
        assert_eq!(registry.ids(), vec![4]);
    }
}
