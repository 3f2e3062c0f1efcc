use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use indexmap::map::{Entry as IMEntry, IndexMap};
use log::{debug, trace};

use crate::comparator::{Comparator, MaxComparator};
use crate::editable_binary_heap::{for_iteration_construction, BinaryHeap, BinaryHeapIterator};
use crate::error::IpqError;
use crate::mediator::{Mediator, MediatorIndex};

/// A priority queue that supports lookup and priority change by key.
///
/// Each element is a unique *key* with an associated *value*.
/// Which value goes first is decided by comparator `C`,
/// by default [`MaxComparator`] so bigger values have more priority.
///
/// It is logic error if values change other way than by [`change_value`] method.
/// It is logic error if keys change somehow while in queue.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// Keys are hashed only when they enter the queue or are looked up;
/// reordering of the heap never hashes keys.
///
/// [`change_value`]: struct.IndexedPriorityQueue.html#method.change_value
/// [`MaxComparator`]: struct.MaxComparator.html
///
/// # Examples
///
/// ## Main example
/// ```
/// use indexed_priority_queue::{IndexedPriorityQueue, IpqError};
///
/// let mut queue = IndexedPriorityQueue::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.peek(), None);
/// assert_eq!(queue.pop(), Err(IpqError::Underflow));
///
/// queue.push(2, 1).unwrap();
/// queue.push(3, 7).unwrap();
/// queue.push(1, 0).unwrap();
/// queue.push(4, 5).unwrap();
///
/// // Keys are unique
/// assert_eq!(queue.push(4, 100), Err(IpqError::KeyAlreadyExists));
///
/// // Peek returns references to most important pair.
/// assert_eq!(queue.peek(), Some((&3, &7)));
///
/// // Priority can be lowered or raised by key
/// assert_eq!(queue.change_value(&3, 2), Ok(7));
/// assert_eq!(queue.change_value(&1, 9), Ok(0));
/// assert_eq!(queue.change_value(&10, 9), Err(IpqError::KeyNotFound));
/// assert_eq!(queue.peek(), Some((&1, &9)));
///
/// assert_eq!(queue.pop(), Ok((1, 9)));
/// assert_eq!(queue.pop(), Ok((4, 5)));
/// assert_eq!(queue.peek(), Some((&3, &2)));
///
/// assert!(queue.contains_key(&2));
/// assert!(!queue.contains_key(&4));
/// assert_eq!(queue.len(), 2);
/// ```
///
/// ## Min queue
///
/// ```
/// use indexed_priority_queue::{IndexedPriorityQueue, MinComparator};
///
/// let mut queue = IndexedPriorityQueue::with_comparator(MinComparator);
/// queue.push("far", 30u32).unwrap();
/// queue.push("near", 10).unwrap();
/// queue.push("middle", 20).unwrap();
/// // Found shorter way to "far"
/// queue.change_value(&"far", 5).unwrap();
///
/// let order: Vec<_> = queue.into_iter().map(|(key, _)| key).collect();
/// assert_eq!(order, ["far", "near", "middle"]);
/// ```
pub struct IndexedPriorityQueue<TKey, TValue, C = MaxComparator, S = RandomState>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    heap: BinaryHeap<TValue>,
    key_to_pos: Mediator<TKey, S>,
    comparator: C,
}

impl<TKey: Hash + Eq, TValue> IndexedPriorityQueue<TKey, TValue, MaxComparator, RandomState> {
    /// Creates an empty queue where bigger values have more priority
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::new();
    /// queue.push("Key", 4).unwrap();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_comparator_and_hasher(0, MaxComparator, RandomState::default())
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(10);
    /// queue.push("Key", 4).unwrap();
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_comparator_and_hasher(capacity, MaxComparator, RandomState::default())
    }
}

impl<TKey: Hash + Eq, TValue, C> IndexedPriorityQueue<TKey, TValue, C, RandomState> {
    /// Creates an empty queue ordered by `comparator`.
    /// The comparator is kept for the whole life of the queue
    /// and used for every priority comparison.
    #[inline]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_comparator_and_hasher(0, comparator, RandomState::default())
    }

    /// Creates an empty queue ordered by `comparator`
    /// with memory for `capacity` elements.
    #[inline]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self::with_capacity_comparator_and_hasher(capacity, comparator, RandomState::default())
    }
}

impl<TKey: Hash + Eq, TValue, C, S: BuildHasher> IndexedPriorityQueue<TKey, TValue, C, S> {
    /// Creates an empty queue with specific comparator and Hasher
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, MinComparator};
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = IndexedPriorityQueue::with_comparator_and_hasher(
    ///     MinComparator,
    ///     RandomState::default(),
    /// );
    /// queue.push("Key", 4).unwrap();
    /// ```
    #[inline]
    pub fn with_comparator_and_hasher(comparator: C, hasher: S) -> Self {
        Self::with_capacity_comparator_and_hasher(0, comparator, hasher)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    #[inline]
    pub fn with_capacity_comparator_and_hasher(capacity: usize, comparator: C, hasher: S) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
            comparator,
        }
    }

    /// Returns comparator used by the queue.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Tries to reserve space for at least `additional` new elements.
    /// Returns allocation error instead of aborting.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<u64, u64> = IndexedPriorityQueue::new();
    /// assert!(queue.try_reserve(100).is_ok());
    /// assert!(queue.try_reserve(usize::MAX).unwrap_err().is_allocation_failure());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), IpqError> {
        self.heap.try_reserve(additional).map_err(|err| {
            debug!("Failed to reserve {} heap slots: {}", additional, err);
            err
        })?;
        self.key_to_pos.try_reserve(additional).map_err(|err| {
            debug!("Failed to reserve {} index slots: {}", additional, err);
            err
        })?;
        Ok(())
    }

    /// Get reference to the pair with the highest priority.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn peek(&self) -> Option<(&TKey, &TValue)> {
        let (outer_pos, value) = self.heap.peek()?;
        let (key, _) = self.key_to_pos.get_index(outer_pos);
        Some((key, value))
    }

    /// Returns true if key is in queue.
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.contains_key(key)
    }

    /// Get reference to the value by key.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<&str, i32> = [("first", 0), ("second", 1)]
    ///     .iter().cloned().collect();
    /// assert_eq!(queue.get_value(&"second"), Some(&1));
    /// assert_eq!(queue.get_value(&"third"), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    pub fn get_value<Q>(&self, key: &Q) -> Option<&TValue>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = self.key_to_pos.get(key)?;
        Some(
            self.heap
                .look_into(heap_idx)
                .expect("Must contain if key_to_pos contain")
                .1,
        )
    }

    /// Get the number of elements in queue.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        self.key_to_pos.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = indexed_priority_queue::IndexedPriorityQueue::new();
    /// assert!(queue.is_empty());
    /// queue.push(0, 5).unwrap();
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.key_to_pos.is_empty()
    }

    /// Make the queue empty.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    /// Create readonly borrowing iterator over queue.
    /// Order of items is unspecified.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// use std::collections::HashMap;
    /// let queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// let entries: HashMap<i32, i32> = queue.iter().map(|(&k, &v)| (k, v)).collect();
    /// let second_map: HashMap<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// assert_eq!(entries, second_map);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> IndexedPriorityQueueBorrowIter<TKey, TValue, S> {
        IndexedPriorityQueueBorrowIter {
            key_to_pos: &self.key_to_pos,
            heap_iterator: self.heap.iter(),
        }
    }
}

impl<TKey, TValue, C, S> IndexedPriorityQueue<TKey, TValue, C, S>
where
    TKey: Hash + Eq,
    C: Comparator<TValue>,
    S: BuildHasher,
{
    /// Adds new element to queue.
    ///
    /// Fails with [`IpqError::KeyAlreadyExists`] if key is in queue already,
    /// and with allocation error if queue cannot grow.
    /// On failure queue stays unchanged.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, IpqError};
    /// let mut queue = IndexedPriorityQueue::new();
    /// assert_eq!(queue.push("First", 5), Ok(()));
    /// assert_eq!(queue.push("First", 10), Err(IpqError::KeyAlreadyExists));
    /// assert_eq!(queue.peek(), Some((&"First", &5)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    /// If elements pushed in order of decreasing priority, amortized complexity is ***O(1)***.
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    ///
    /// [`IpqError::KeyAlreadyExists`]: enum.IpqError.html#variant.KeyAlreadyExists
    pub fn push(&mut self, key: TKey, value: TValue) -> Result<(), IpqError> {
        // Both containers must have room before either is touched,
        // so failed allocation cannot desync them.
        self.try_reserve(1)?;

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let mediator_index = key_to_pos
            .insert_new(key, heap.len())
            .ok_or(IpqError::KeyAlreadyExists)?;
        heap.push(mediator_index, value, &self.comparator, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        });
        trace!("Pushed item, queue length is {}", heap.usize_len());
        Ok(())
    }

    /// Remove and return item with the highest priority.
    /// Fails with [`IpqError::Underflow`] if queue is empty.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, IpqError};
    /// let mut queue: IndexedPriorityQueue<i32, i32> = (0..3).map(|x| (x, x)).collect();
    /// assert_eq!(queue.pop(), Ok((2, 2)));
    /// assert_eq!(queue.pop(), Ok((1, 1)));
    /// assert_eq!(queue.pop(), Ok((0, 0)));
    /// assert_eq!(queue.pop(), Err(IpqError::Underflow));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of pop is always ***O(log n)***
    ///
    /// [`IpqError::Underflow`]: enum.IpqError.html#variant.Underflow
    pub fn pop(&mut self) -> Result<(TKey, TValue), IpqError> {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let (removed_idx, value) = heap
            .pop(&self.comparator, |index, heap_idx| {
                *key_to_pos.get_index_mut(index) = heap_idx
            })
            .ok_or(IpqError::Underflow)?;

        // Last key of the index takes place of removed one,
        // so heap entry of the moved key must learn its new index position.
        let (removed_key, _) = key_to_pos.swap_remove_index(removed_idx);
        if MediatorIndex(key_to_pos.len()) != removed_idx {
            let (_, heap_idx_of_moved) = key_to_pos.get_index(removed_idx);
            heap.change_outer_pos(removed_idx, heap_idx_of_moved);
        }

        trace!("Popped item, queue length is {}", heap.usize_len());
        Ok((removed_key, value))
    }

    /// Set new value for existing key and reorder the queue.
    /// Returns old value if succeeds or [`IpqError::KeyNotFound`].
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, IpqError};
    /// let mut queue: IndexedPriorityQueue<&str, i32> = [("first", 0), ("second", 1), ("third", 2)]
    ///     .iter().cloned().collect();
    /// assert_eq!(queue.change_value(&"second", 5), Ok(1));
    /// assert_eq!(queue.get_value(&"second"), Some(&5));
    /// assert_eq!(queue.pop(), Ok(("second", 5)));
    /// assert_eq!(queue.change_value(&"Missing", 5), Err(IpqError::KeyNotFound));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    ///
    /// [`IpqError::KeyNotFound`]: enum.IpqError.html#variant.KeyNotFound
    pub fn change_value<Q>(&mut self, key: &Q, value: TValue) -> Result<TValue, IpqError>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = self.key_to_pos.get(key).ok_or(IpqError::KeyNotFound)?;

        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        Ok(heap.change_value(heap_idx, value, &self.comparator, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        }))
    }

    /// Builds queue from pairs using given comparator and hasher.
    /// If key repeats, the last value wins.
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** in average.
    pub fn from_iter_with_comparator_and_hasher<T>(iter: T, comparator: C, hasher: S) -> Self
    where
        T: IntoIterator<Item = (TKey, TValue)>,
    {
        use for_iteration_construction::{
            create_heap, make_heap_entry, make_heap_index, reader_iterator, set_entry_value,
        };

        let iter = iter.into_iter();
        let min_size = iter.size_hint().0;
        let mut for_heap = Vec::with_capacity(min_size);
        let mut for_map: IndexMap<TKey, _, S> =
            IndexMap::with_capacity_and_hasher(min_size, hasher);

        // Until heapify heap positions equal index positions.
        for (key, value) in iter {
            match for_map.entry(key) {
                IMEntry::Vacant(entry) => {
                    let new_idx = for_heap.len();
                    for_heap.push(make_heap_entry(MediatorIndex(new_idx), value));
                    entry.insert(make_heap_index(new_idx));
                }
                IMEntry::Occupied(entry) => {
                    set_entry_value(&mut for_heap[entry.index()], value);
                }
            }
        }

        let heap = create_heap(for_heap, &comparator);
        let mut key_to_pos = Mediator::from_map(for_map);
        for (heap_idx, outer_pos) in reader_iterator(&heap) {
            *key_to_pos.get_index_mut(outer_pos) = heap_idx;
        }

        Self {
            heap,
            key_to_pos,
            comparator,
        }
    }
}

impl<TKey, TValue, C, S> IndexedPriorityQueue<TKey, TValue, C, S>
where
    TKey: Hash + Eq + Clone,
    TValue: Clone,
    C: Clone,
    S: BuildHasher + Clone,
{
    /// Makes independent copy of the queue,
    /// reporting allocation failure instead of aborting.
    ///
    /// The original queue is never modified;
    /// partially built copy is released on failure.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<i32, i32> = (0..5).map(|x| (x, x)).collect();
    /// let mut copy = queue.try_clone().unwrap();
    /// copy.change_value(&0, 10).unwrap();
    /// assert_eq!(copy.pop(), Ok((0, 10)));
    /// assert_eq!(queue.pop(), Ok((4, 4)));
    /// ```
    pub fn try_clone(&self) -> Result<Self, IpqError> {
        let heap = self.heap.try_clone().map_err(|err| {
            debug!("Failed to clone heap of {} items: {}", self.len(), err);
            err
        })?;
        let key_to_pos = self.key_to_pos.try_clone().map_err(|err| {
            debug!("Failed to clone index of {} items: {}", self.len(), err);
            err
        })?;
        Ok(Self {
            heap,
            key_to_pos,
            comparator: self.comparator.clone(),
        })
    }
}

impl<TKey, TValue, C, S> Clone for IndexedPriorityQueue<TKey, TValue, C, S>
where
    TKey: Hash + Eq + Clone,
    TValue: Clone,
    C: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            key_to_pos: self.key_to_pos.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<TKey: Hash + Eq + Debug, TValue: Debug, C, S: BuildHasher> Debug
    for IndexedPriorityQueue<TKey, TValue, C, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for entry in self.iter() {
            write!(f, "{:?}", entry)?;
        }
        write!(f, "]")
    }
}

impl<TKey: Hash + Eq, TValue, C: Default, S: BuildHasher + Default> Default
    for IndexedPriorityQueue<TKey, TValue, C, S>
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_comparator_and_hasher(0, C::default(), S::default())
    }
}

impl<TKey, TValue, C, S> FromIterator<(TKey, TValue)> for IndexedPriorityQueue<TKey, TValue, C, S>
where
    TKey: Hash + Eq,
    C: Comparator<TValue> + Default,
    S: BuildHasher + Default,
{
    /// Allows building queue from iterator using `collect()`.
    /// At result it will be valid queue with unique keys,
    /// repeated key keeps the last value.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue: IndexedPriorityQueue<&str, i32> =
    ///     [("first", 0), ("second", 1), ("third", 2), ("first", -1)]
    ///         .iter().cloned().collect();
    /// assert_eq!(queue.pop(), Ok(("third", 2)));
    /// assert_eq!(queue.pop(), Ok(("second", 1)));
    /// assert_eq!(queue.pop(), Ok(("first", -1)));
    /// assert!(queue.pop().is_err());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n)*** in average.
    fn from_iter<T: IntoIterator<Item = (TKey, TValue)>>(iter: T) -> Self {
        Self::from_iter_with_comparator_and_hasher(iter, C::default(), S::default())
    }
}

impl<TKey, TValue, C, S> IntoIterator for IndexedPriorityQueue<TKey, TValue, C, S>
where
    TKey: Hash + Eq,
    C: Comparator<TValue>,
    S: BuildHasher,
{
    type Item = (TKey, TValue);
    type IntoIter = IndexedPriorityQueueIterator<TKey, TValue, C, S>;

    /// Make iterator that returns items in order of decreasing priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let queue: IndexedPriorityQueue<&str, i32> =
    ///     [("first", 0), ("second", 1), ("third", 2)]
    ///         .iter().cloned().collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(("third", 2)));
    /// assert_eq!(iterator.next(), Some(("second", 1)));
    /// assert_eq!(iterator.next(), Some(("first", 0)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns elements in order of decreasing priority
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedPriorityQueueIterator<TKey, TValue, C = MaxComparator, S = RandomState>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    queue: IndexedPriorityQueue<TKey, TValue, C, S>,
}

impl<TKey, TValue, C, S> Iterator for IndexedPriorityQueueIterator<TKey, TValue, C, S>
where
    TKey: Hash + Eq,
    C: Comparator<TValue>,
    S: BuildHasher,
{
    type Item = (TKey, TValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

/// This is unordered borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct IndexedPriorityQueueBorrowIter<'a, TKey, TValue, S = RandomState>
where
    TKey: 'a + Hash + Eq,
    TValue: 'a,
    S: BuildHasher,
{
    heap_iterator: BinaryHeapIterator<'a, TValue>,
    key_to_pos: &'a Mediator<TKey, S>,
}

impl<'a, TKey: 'a + Hash + Eq, TValue: 'a, S: BuildHasher> Iterator
    for IndexedPriorityQueueBorrowIter<'a, TKey, TValue, S>
{
    type Item = (&'a TKey, &'a TValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let heap_iterator = &mut self.heap_iterator;
        let key_to_pos = &self.key_to_pos;
        heap_iterator.next().map(|(index, value)| {
            let (key, _) = key_to_pos.get_index(index);
            (key, value)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}
