use crate::editable_binary_heap::HeapIndex;
use indexmap::map::{Entry as IMEntry, IndexMap};
use indexmap::TryReserveError;
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Position of a key inside the `Mediator`.
/// Heap entries store it instead of the key itself,
/// so moving an entry in the heap never hashes the key again.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// Key to heap position index.
/// Wraps `IndexMap` so the rest of the crate sees only `MediatorIndex` and `HeapIndex`,
/// and keeps all "index must be valid" checks in one place.
#[derive(Clone, Debug)]
pub(crate) struct Mediator<TKey: Hash + Eq, S: BuildHasher> {
    map: IndexMap<TKey, HeapIndex, S>,
}

#[inline(always)]
fn with_copied_heap_index<'a, T>((k, &i): (&'a T, &HeapIndex)) -> (&'a T, HeapIndex) {
    (k, i)
}

impl<TKey, S> Mediator<TKey, S>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn from_map(map: IndexMap<TKey, HeapIndex, S>) -> Self {
        Self { map }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.map.try_reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, MediatorIndex(position): MediatorIndex) -> (&TKey, HeapIndex) {
        self.map
            .get_index(position)
            .map(with_copied_heap_index)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn get_index_mut(&mut self, MediatorIndex(index): MediatorIndex) -> &mut HeapIndex {
        self.map
            .get_index_mut(index)
            .expect("All mediator indexes must be valid")
            .1
    }

    #[inline(always)]
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    #[inline(always)]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<HeapIndex>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).copied()
    }

    #[cfg(test)]
    pub(crate) fn get_full<'a, Q>(&'a self, key: &Q) -> Option<(MediatorIndex, &'a TKey, HeapIndex)>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .get_full(key)
            .map(|(idx, key, &val)| (MediatorIndex(idx), key, val))
    }

    /// Inserts a key which must be absent.
    /// Returns `None` and leaves the map untouched if the key is present.
    /// Hashes the key exactly once.
    #[inline(always)]
    pub(crate) fn insert_new(&mut self, key: TKey, heap_idx: HeapIndex) -> Option<MediatorIndex> {
        match self.map.entry(key) {
            IMEntry::Occupied(_) => None,
            IMEntry::Vacant(entry) => {
                let index = MediatorIndex(entry.index());
                entry.insert(heap_idx);
                Some(index)
            }
        }
    }

    /// Removes entry by position.
    /// The last entry of the map is moved into the freed position.
    #[inline(always)]
    pub(crate) fn swap_remove_index(
        &mut self,
        MediatorIndex(index): MediatorIndex,
    ) -> (TKey, HeapIndex) {
        self.map
            .swap_remove_index(index)
            .expect("All mediator indexes must be valid")
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&TKey, HeapIndex)> {
        self.map.iter().map(with_copied_heap_index)
    }
}

impl<TKey, S> Mediator<TKey, S>
where
    TKey: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Copies index keeping positions of all keys,
    /// so `MediatorIndex` values stored in a cloned heap stay valid.
    pub(crate) fn try_clone(&self) -> Result<Self, TryReserveError> {
        let mut map = IndexMap::with_hasher(self.map.hasher().clone());
        map.try_reserve(self.map.len())?;
        map.extend(self.map.iter().map(|(key, &heap_idx)| (key.clone(), heap_idx)));
        Ok(Self { map })
    }
}
