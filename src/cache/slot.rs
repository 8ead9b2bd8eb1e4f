//! Write-once slots keyed by icon id.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::core::IconId;

type Slot<V> = Arc<OnceLock<V>>;

pub(super) struct SlotMap<V> {
    slots: Mutex<FxHashMap<IconId, Slot<V>>>,
}

impl<V> Default for SlotMap<V> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(FxHashMap::default()),
        }
    }
}

impl<V: Clone> SlotMap<V> {
    /// Slot for `id`, created empty on first use.
    fn slot(&self, id: &IconId) -> Slot<V> {
        Arc::clone(self.slots.lock().entry(id.clone()).or_default())
    }

    /// Settled value for `id`, without waiting on a slot being filled.
    pub fn peek(&self, id: &str) -> Option<V> {
        let slot = self.slots.lock().get(id).cloned()?;
        slot.get().cloned()
    }

    /// Value for `id`, running `init` if no other caller has.
    ///
    /// The map lock is released before `init` runs.
    pub fn get_or_init(&self, id: &IconId, init: impl FnOnce() -> V) -> V {
        self.slot(id).get_or_init(init).clone()
    }

    /// Fill `id` with `value`. Returns `false` if it was already settled.
    pub fn set(&self, id: &IconId, value: V) -> bool {
        self.slot(id).set(value).is_ok()
    }

    /// Number of settled slots matching `pred`.
    pub fn count(&self, pred: impl Fn(&V) -> bool) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.get().is_some_and(&pred))
            .count()
    }
}
