use std::any::Any;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Typed key into an actor's attribute store.
///
/// A key is a plain `u64` id plus a compile-time type tag. Ids are chosen by
/// the tree author and must be unique within one actor's store; the type tag
/// makes every read and write statically typed without the store itself
/// knowing any concrete types. Keys are declared as consts next to the code
/// that owns them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttrKey<T: 'static> {
    id: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Clone for AttrKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for AttrKey<T> {}

impl<T: 'static> AttrKey<T> {
    pub const fn new(id: u64) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub const fn id(self) -> u64 {
        self.id
    }
}

/// Per-actor storage of named, typed slots.
///
/// This is the only state surface the evaluation engine touches: leaf actions
/// read and write domain slots here, and the stateful combinators keep their
/// continuation state here, keyed by node id. A slot is either present with
/// the exact type its key declares, or absent. Reading an absent slot is an
/// ordinary `None`; reading a present slot through a key of the wrong type
/// is a programming error and panics.
#[derive(Debug, Default)]
pub struct Attributes {
    slots: BTreeMap<u64, Box<dyn Any + Send + Sync>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove every slot.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn contains<T: Send + Sync + 'static>(&self, key: AttrKey<T>) -> bool {
        self.slots.contains_key(&key.id)
    }

    /// Insert or overwrite the slot for `key`.
    pub fn set<T: Send + Sync + 'static>(&mut self, key: AttrKey<T>, value: T) {
        self.slots.insert(key.id, Box::new(value));
    }

    pub fn get<T: Send + Sync + 'static>(&self, key: AttrKey<T>) -> Option<&T> {
        let slot = self.slots.get(&key.id)?;
        match slot.downcast_ref::<T>() {
            Some(value) => Some(value),
            None => panic!("attribute type mismatch for key id={}", key.id),
        }
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self, key: AttrKey<T>) -> Option<&mut T> {
        let slot = self.slots.get_mut(&key.id)?;
        match slot.downcast_mut::<T>() {
            Some(value) => Some(value),
            None => panic!("attribute type mismatch for key id={}", key.id),
        }
    }

    /// Take the slot for `key` out of the store.
    pub fn remove<T: Send + Sync + 'static>(&mut self, key: AttrKey<T>) -> Option<T> {
        let slot = self.slots.remove(&key.id)?;
        match slot.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(_) => panic!("attribute type mismatch for key id={}", key.id),
        }
    }
}
