use thiserror::Error;

/// Error returned by fallible operations of [`IndexedPriorityQueue`].
///
/// Every failed operation leaves the queue exactly as it was before the call.
///
/// [`IndexedPriorityQueue`]: struct.IndexedPriorityQueue.html
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpqError {
    /// `pop` was called on an empty queue.
    #[error("priority queue is empty")]
    Underflow,

    /// `push` was called with a key which is already in the queue.
    #[error("key already exists in priority queue")]
    KeyAlreadyExists,

    /// Key passed to `change_value` is not in the queue.
    #[error("key not found in priority queue")]
    KeyNotFound,

    /// Heap storage failed to grow.
    #[error("failed to allocate heap storage: {0}")]
    StorageAllocation(#[from] std::collections::TryReserveError),

    /// Key index failed to grow.
    #[error("failed to allocate key index: {0}")]
    IndexAllocation(#[from] indexmap::TryReserveError),
}

impl IpqError {
    /// Returns true for both kinds of allocation failure.
    ///
    /// ```
    /// use indexed_priority_queue::IpqError;
    /// assert!(!IpqError::Underflow.is_allocation_failure());
    /// ```
    #[inline]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            IpqError::StorageAllocation(_) | IpqError::IndexAllocation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::IpqError;

    #[test]
    fn test_display() {
        assert_eq!(IpqError::Underflow.to_string(), "priority queue is empty");
        assert_eq!(
            IpqError::KeyAlreadyExists.to_string(),
            "key already exists in priority queue"
        );
        assert_eq!(
            IpqError::KeyNotFound.to_string(),
            "key not found in priority queue"
        );
    }

    #[test]
    fn test_storage_allocation_from() {
        let err = Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err();
        let err: IpqError = err.into();
        assert!(err.is_allocation_failure());
        assert!(err.to_string().starts_with("failed to allocate heap storage"));
    }
}
