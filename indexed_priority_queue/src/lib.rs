//! This is priority queue that supports lookup and priority change by key.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each entry has associated *key* and *value*.
//! Keys must be unique and hashable; values are ordered by a [`Comparator`],
//! which also carries any context needed to compare them.
//!
//! Popping returns element with the highest priority.
//! Pushing adds element to queue, pushing existing key is an error.
//! Also it is possible to check membership, read or change value by key.
//!
//! Pop, push, change value have ***O(log n)*** time complexity;
//! peek, lookup by key are ***O(1)***.
//!
//! Every failure is reported through [`IpqError`] and leaves the queue unchanged.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra algorithm][dijkstra] for a small graph.
//! When shorter path to a node in queue is found,
//! its distance is lowered in place instead of pushing a duplicate.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`Comparator`]: trait.Comparator.html
//! [`IpqError`]: enum.IpqError.html
//!
//! ```
//! use indexed_priority_queue::{IndexedPriorityQueue, MinComparator};
//! use std::collections::HashMap;
//!
//! // Adjacency list: node -> [(neighbour, edge cost)]
//! let graph: Vec<Vec<(usize, u32)>> = vec![
//!     vec![(1, 7), (2, 9), (5, 14)],
//!     vec![(0, 7), (2, 10), (3, 15)],
//!     vec![(0, 9), (1, 10), (3, 11), (5, 2)],
//!     vec![(1, 15), (2, 11), (4, 6)],
//!     vec![(3, 6), (5, 9)],
//!     vec![(0, 14), (2, 2), (4, 9)],
//! ];
//!
//! fn shortest_paths(graph: &[Vec<(usize, u32)>], start: usize) -> HashMap<usize, u32> {
//!     let mut done = HashMap::new();
//!     let mut pending = IndexedPriorityQueue::with_comparator(MinComparator);
//!     pending.push(start, 0u32).unwrap();
//!     while let Ok((node, distance)) = pending.pop() {
//!         done.insert(node, distance);
//!         for &(next, cost) in graph[node].iter() {
//!             if done.contains_key(&next) {
//!                 continue;
//!             }
//!             let candidate = distance + cost;
//!             match pending.get_value(&next) {
//!                 None => pending.push(next, candidate).unwrap(),
//!                 Some(&known) if candidate < known => {
//!                     pending.change_value(&next, candidate).unwrap();
//!                 }
//!                 Some(_) => { /* Have found worse path. */ }
//!             }
//!         }
//!     }
//!     done
//! }
//!
//! let distances = shortest_paths(&graph, 0);
//! assert_eq!(distances[&4], 20);
//! assert_eq!(distances[&3], 20);
//! assert_eq!(distances[&5], 11);
//! ```
//!

mod comparator;
mod editable_binary_heap;
mod error;
mod indexed_priority_queue;
mod mediator;

pub use crate::comparator::{Comparator, FnComparator, MaxComparator, MinComparator};
pub use crate::error::IpqError;
pub use crate::indexed_priority_queue::{
    IndexedPriorityQueue, IndexedPriorityQueueBorrowIter, IndexedPriorityQueueIterator,
};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
