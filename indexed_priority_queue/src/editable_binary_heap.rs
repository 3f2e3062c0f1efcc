use std::collections::TryReserveError;
use std::fmt::Debug;
use std::vec::Vec;

use crate::comparator::Comparator;
use crate::mediator::MediatorIndex;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

pub(crate) struct HeapEntry<TValue> {
    outer_pos: MediatorIndex,
    value: TValue,
}

/// Binary heap which reports every move of its entries.
///
/// Entries remember only position of their key in outer index,
/// outer index must be updated from `change_handler` callbacks.
/// Slot 0 is the root; children of `i` are `2i+1` and `2i+2`.
pub(crate) struct BinaryHeap<TValue> {
    data: Vec<HeapEntry<TValue>>,
}

impl<TValue> BinaryHeap<TValue> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    #[inline(always)]
    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Puts value at the end of heap and sifts it up.
    /// Position of the new entry is `self.len()` before the call,
    /// change_handler is called for every entry moved afterwards.
    /// Time complexity - O(log n) swaps and change_handler calls
    #[inline(always)]
    pub(crate) fn push<C, TChangeHandler>(
        &mut self,
        outer_pos: MediatorIndex,
        value: TValue,
        comparator: &C,
        change_handler: TChangeHandler,
    ) where
        C: Comparator<TValue> + ?Sized,
        TChangeHandler: FnMut(MediatorIndex, HeapIndex),
    {
        self.data.push(HeapEntry { outer_pos, value });
        self.heapify_up(
            HeapIndex(self.data.len() - 1),
            comparator,
            change_handler,
        );
    }

    /// Removes the root entry.
    /// The last entry is moved into the root and sifted down.
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn pop<C, TChangeHandler>(
        &mut self,
        comparator: &C,
        mut change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, TValue)>
    where
        C: Comparator<TValue> + ?Sized,
        TChangeHandler: FnMut(MediatorIndex, HeapIndex),
    {
        if self.data.len() <= 1 {
            return self.data.pop().map(|x| (x.outer_pos, x.value));
        }
        let result = self.data.swap_remove(0);
        change_handler(self.data[0].outer_pos, HeapIndex(0));
        self.heapify_down(HeapIndex(0), comparator, change_handler);
        Some((result.outer_pos, result.value))
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<(MediatorIndex, &TValue)> {
        self.look_into(HeapIndex(0))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(MediatorIndex, &TValue)> {
        let entry = self.data.get(position.0)?;
        Some((entry.outer_pos, &entry.value))
    }

    /// Replaces value of the entry and restores heap order.
    /// Returns the old value.
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn change_value<C, TChangeHandler>(
        &mut self,
        position: HeapIndex,
        updated: TValue,
        comparator: &C,
        change_handler: TChangeHandler,
    ) -> TValue
    where
        C: Comparator<TValue> + ?Sized,
        TChangeHandler: FnMut(MediatorIndex, HeapIndex),
    {
        if position >= self.len() {
            panic!("Out of index during changing value");
        }

        let old = std::mem::replace(&mut self.data[position.0].value, updated);
        if comparator.is_higher_priority(&self.data[position.0].value, &old)
            || self.outranks_parent(position, comparator)
        {
            self.heapify_up(position, comparator, change_handler);
        } else {
            // Also handles ties, it doesn't move anything then.
            self.heapify_down(position, comparator, change_handler);
        }
        old
    }

    /// New value may be incomparable with the old one and still outrank the parent.
    #[inline(always)]
    fn outranks_parent<C>(&self, position: HeapIndex, comparator: &C) -> bool
    where
        C: Comparator<TValue> + ?Sized,
    {
        let position = position.0;
        position > 0
            && comparator.is_higher_priority(
                &self.data[position].value,
                &self.data[(position - 1) / 2].value,
            )
    }

    /// Changes outer index position of entry and returns old one.
    pub(crate) fn change_outer_pos(
        &mut self,
        outer_pos: MediatorIndex,
        position: HeapIndex,
    ) -> MediatorIndex {
        if position >= self.len() {
            panic!("Out of index during changing outer position");
        }

        std::mem::replace(&mut self.data[position.0].outer_pos, outer_pos)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<TValue> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    fn heapify_up<C, TChangeHandler>(
        &mut self,
        position: HeapIndex,
        comparator: &C,
        mut change_handler: TChangeHandler,
    ) where
        C: Comparator<TValue> + ?Sized,
        TChangeHandler: FnMut(MediatorIndex, HeapIndex),
    {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            let (child, parent) = (&self.data[position], &self.data[parent_pos]);
            if comparator.is_higher_priority(&child.value, &parent.value) {
                self.swap_items(parent_pos, position, &mut change_handler);
                position = parent_pos;
            } else {
                break;
            }
        }
    }

    fn heapify_down<C, TChangeHandler>(
        &mut self,
        position: HeapIndex,
        comparator: &C,
        mut change_handler: TChangeHandler,
    ) where
        C: Comparator<TValue> + ?Sized,
        TChangeHandler: FnMut(MediatorIndex, HeapIndex),
    {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let mut position = position.0;
        loop {
            let child1 = position * 2 + 1;
            let child2 = child1 + 1;
            let mut best = position;
            if child1 < self.data.len()
                && comparator.is_higher_priority(&self.data[child1].value, &self.data[best].value)
            {
                best = child1;
            }
            if child2 < self.data.len()
                && comparator.is_higher_priority(&self.data[child2].value, &self.data[best].value)
            {
                best = child2;
            }

            if best == position {
                break;
            }
            self.swap_items(position, best, &mut change_handler);
            position = best;
        }
    }

    /// Exchanges two entries and reports both new positions.
    #[inline(always)]
    fn swap_items<TChangeHandler>(
        &mut self,
        pos1: usize,
        pos2: usize,
        change_handler: &mut TChangeHandler,
    ) where
        TChangeHandler: FnMut(MediatorIndex, HeapIndex),
    {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
        change_handler(self.data[pos1].outer_pos, HeapIndex(pos1));
        change_handler(self.data[pos2].outer_pos, HeapIndex(pos2));
    }
}

impl<TValue: Clone> BinaryHeap<TValue> {
    /// Clones storage, reporting allocation failure instead of aborting.
    pub(crate) fn try_clone(&self) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())?;
        data.extend(self.data.iter().cloned());
        Ok(Self { data })
    }
}

/// Unordered iterator over heap entries
pub(crate) struct BinaryHeapIterator<'a, TValue> {
    inner: std::slice::Iter<'a, HeapEntry<TValue>>,
}

impl<'a, TValue> Iterator for BinaryHeapIterator<'a, TValue> {
    type Item = (MediatorIndex, &'a TValue);

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| (x.outer_pos, &x.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline(always)]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.count()
    }
}

// Default implementations

impl<TValue: Clone> Clone for HeapEntry<TValue> {
    fn clone(&self) -> Self {
        Self {
            outer_pos: self.outer_pos,
            value: self.value.clone(),
        }
    }
}

impl<TValue: Copy> Copy for HeapEntry<TValue> {}

impl<TValue: Debug> Debug for HeapEntry<TValue> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{{outer_pos: {:?}, value: {:?}}}",
            &self.outer_pos, &self.value
        )
    }
}

impl<TValue: Clone> Clone for BinaryHeap<TValue> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<TValue: Debug> Debug for BinaryHeap<TValue> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

pub(crate) mod for_iteration_construction {
    use super::{BinaryHeap, HeapEntry, HeapIndex};
    use crate::comparator::Comparator;
    use crate::mediator::MediatorIndex;

    #[inline(always)]
    pub(crate) fn make_heap_entry<TValue>(
        outer_pos: MediatorIndex,
        value: TValue,
    ) -> HeapEntry<TValue> {
        HeapEntry { outer_pos, value }
    }

    #[inline(always)]
    pub(crate) fn set_entry_value<TValue>(entry: &mut HeapEntry<TValue>, new_value: TValue) {
        entry.value = new_value;
    }

    #[inline(always)]
    pub(crate) fn make_heap_index(index: usize) -> HeapIndex {
        HeapIndex(index)
    }

    /// Builds heap from unordered entries in O(n).
    /// Positions aren't reported, use `reader_iterator` afterwards.
    pub(crate) fn create_heap<TValue, C>(
        vec: Vec<HeapEntry<TValue>>,
        comparator: &C,
    ) -> BinaryHeap<TValue>
    where
        C: Comparator<TValue> + ?Sized,
    {
        let heapify_start = vec.len() / 2;
        let mut res = BinaryHeap { data: vec };
        for pos in (0..heapify_start).rev().map(HeapIndex) {
            res.heapify_down(pos, comparator, |_, _| {});
        }
        res
    }

    #[inline(always)]
    pub(crate) fn reader_iterator<TValue>(
        heap: &BinaryHeap<TValue>,
    ) -> impl Iterator<Item = (HeapIndex, MediatorIndex)> + '_ {
        heap.data
            .iter()
            .enumerate()
            .map(|(i, entry)| (HeapIndex(i), entry.outer_pos))
    }
}
