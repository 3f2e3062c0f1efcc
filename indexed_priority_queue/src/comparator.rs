use std::fmt::{Debug, Formatter};

/// Decides which of two values should be closer to the top of the queue.
///
/// The comparator value itself is the comparison context:
/// it is stored by the queue and passed to every comparison.
///
/// Implementations must be a strict weak ordering:
/// irreflexive (`a` never outranks itself),
/// asymmetric (if `a` outranks `b` then `b` does not outrank `a`),
/// transitive, and with transitive incomparability
/// (if neither of `a`, `b` outranks the other and the same holds for `b`, `c`,
/// then neither of `a`, `c` outranks the other).
/// A total order is not required: incomparable values are treated as ties.
/// Ordering by a key where many values share the same key is fine,
/// ordering by "comparable only inside a group" is not.
///
/// It is a logic error to violate this contract;
/// the queue will then return elements in unspecified order but will not cause undefined behaviour.
pub trait Comparator<TValue: ?Sized> {
    /// Returns `true` if `a` must be popped before `b`.
    fn is_higher_priority(&self, a: &TValue, b: &TValue) -> bool;
}

/// Bigger values have more priority. Default comparator of the queue.
///
/// ```
/// use indexed_priority_queue::{Comparator, MaxComparator};
/// assert!(MaxComparator.is_higher_priority(&5, &3));
/// assert!(!MaxComparator.is_higher_priority(&3, &3));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MaxComparator;

impl<TValue: Ord + ?Sized> Comparator<TValue> for MaxComparator {
    #[inline(always)]
    fn is_higher_priority(&self, a: &TValue, b: &TValue) -> bool {
        a > b
    }
}

/// Smaller values have more priority.
///
/// Useful for shortest-path searches where the smallest distance is handled first.
///
/// ```
/// use indexed_priority_queue::{Comparator, MinComparator};
/// assert!(MinComparator.is_higher_priority(&3, &5));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MinComparator;

impl<TValue: Ord + ?Sized> Comparator<TValue> for MinComparator {
    #[inline(always)]
    fn is_higher_priority(&self, a: &TValue, b: &TValue) -> bool {
        a < b
    }
}

/// Comparator made from a context value and a function receiving it.
///
/// Allows choosing the ordering policy at runtime
/// or ordering by data the values only refer to.
///
/// ### Examples
///
/// ```
/// use indexed_priority_queue::{FnComparator, IndexedPriorityQueue};
///
/// // Nodes are ordered by weights stored outside the queue.
/// let weights = vec![10u32, 30, 20];
/// let comparator = FnComparator::new(weights, |weights: &Vec<u32>, a: &usize, b: &usize| {
///     weights[*a] > weights[*b]
/// });
/// let mut queue = IndexedPriorityQueue::with_comparator(comparator);
/// queue.push("a", 0).unwrap();
/// queue.push("b", 1).unwrap();
/// queue.push("c", 2).unwrap();
/// assert_eq!(queue.pop(), Ok(("b", 1)));
/// assert_eq!(queue.comparator().context()[2], 20);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<TContext, F> {
    context: TContext,
    compare: F,
}

impl<TContext, F> FnComparator<TContext, F> {
    /// Makes comparator which calls `compare(&context, a, b)`.
    #[inline]
    pub fn new(context: TContext, compare: F) -> Self {
        Self { context, compare }
    }

    /// Returns reference to the context passed to every comparison.
    #[inline]
    pub fn context(&self) -> &TContext {
        &self.context
    }

    /// Returns the context back.
    #[inline]
    pub fn into_context(self) -> TContext {
        self.context
    }
}

impl<TContext, TValue, F> Comparator<TValue> for FnComparator<TContext, F>
where
    TValue: ?Sized,
    F: Fn(&TContext, &TValue, &TValue) -> bool,
{
    #[inline(always)]
    fn is_higher_priority(&self, a: &TValue, b: &TValue) -> bool {
        (self.compare)(&self.context, a, b)
    }
}

impl<TContext: Debug, F> Debug for FnComparator<TContext, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnComparator")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<'a, TValue: ?Sized, C: Comparator<TValue> + ?Sized> Comparator<TValue> for &'a C {
    #[inline(always)]
    fn is_higher_priority(&self, a: &TValue, b: &TValue) -> bool {
        (**self).is_higher_priority(a, b)
    }
}
