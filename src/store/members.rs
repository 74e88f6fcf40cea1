//! Identity-keyed, insertion-ordered set of shared handles.
//!
//! Shared by the store [`Registry`](super::Registry) and each [`Store`](super::Store)'s
//! listener list. A member's identity is the address of its `Arc` allocation; the
//! set keeps the `Arc` alive, so the address cannot be reused while registered.
//!
//! ## Rules
//! - Insert of a present identity is a no-op.
//! - Remove of an absent identity is a no-op.
//! - Removal preserves the relative order of the remaining members.
//! - The lock is held only for lookup+mutation or a snapshot copy; removed handles
//!   are dropped after it is released.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::Mutex;

/// Stable identity token of a registered handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Identity(usize);

impl Identity {
    /// Identity of the allocation behind `handle` (vtable metadata ignored).
    #[inline]
    pub(crate) fn of<T: ?Sized>(handle: &Arc<T>) -> Self {
        Self(Arc::as_ptr(handle).cast::<()>() as usize)
    }
}

pub(crate) struct Members<T: ?Sized> {
    entries: Mutex<IndexMap<Identity, Arc<T>>>,
}

impl<T: ?Sized> Members<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
        }
    }

    /// Appends `handle` unless already present. Returns `true` if it was added.
    pub(crate) fn insert(&self, handle: Arc<T>) -> bool {
        let mut entries = self.entries.lock();
        match entries.entry(Identity::of(&handle)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    /// Removes the member sharing `handle`'s allocation. Returns `true` if it was present.
    pub(crate) fn remove<U: ?Sized>(&self, handle: &Arc<U>) -> bool {
        let removed = self.entries.lock().shift_remove(&Identity::of(handle));
        removed.is_some()
    }

    pub(crate) fn contains<U: ?Sized>(&self, handle: &Arc<U>) -> bool {
        self.entries.lock().contains_key(&Identity::of(handle))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Copies the current members, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.lock().values().cloned().collect()
    }
}

impl<T: ?Sized> fmt::Debug for Members<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Members").field("len", &self.len()).finish()
    }
}
