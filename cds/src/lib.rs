//! `cds`: a resizable array of plain-old-data elements with generation-checked
//! iterators and pluggable memory strategies.
//!
//! [`Vector`] owns one contiguous buffer obtained from a [`MemoryStrategy`].
//! Elements are `Copy`, so they are moved around as raw bytes and never need
//! a destructor.
//!
//! # Capacity Management
//!
//! - A full vector grows to `max(8, 2 * len)` on `push_back` or `insert`,
//!   giving amortised O(1) appends.
//! - After `erase` or `pop_back`, the buffer is halved once `capacity / len`
//!   reaches 4. Failure to shrink is swallowed; failure to grow is reported
//!   and leaves the vector as it was.
//! - `reserve` only grows, `shrink_to_fit` trims to exactly `len`.
//!
//! ```
//! # use cds::Vector;
//! let mut vector = Vector::new();
//! for i in 0..9 {
//!     vector.push_back(i).unwrap();
//! }
//! assert_eq!(vector.capacity(), 16);
//!
//! while vector.len() > 4 {
//!     vector.pop_back().unwrap();
//! }
//! assert_eq!(vector.capacity(), 8);
//! ```
//!
//! # Iterators and Invalidation
//!
//! `begin`, `end`, `rbegin` and `rend` produce [`Iter`] objects that do not
//! borrow the vector. Each one remembers the vector's generation, and every
//! structural mutation (`push_back`, `insert`, `erase`, `pop_back`, `clear`,
//! `resize`, `swap`) advances it. An iterator whose stamp no longer matches
//! is invalid for good: `has_next` and `has_back` report `false` and stepping
//! yields `None`.
//!
//! ```
//! # use cds::Vector;
//! let mut vector = Vector::new();
//! vector.extend_from_slice(&[0, 1, 2, 3]).unwrap();
//!
//! let mut iter = vector.begin();
//! let seen: Vec<i32> = iter.walk(&vector).collect();
//! assert_eq!(seen, [0, 1, 2, 3]);
//!
//! let iter = vector.begin();
//! vector.push_back(4).unwrap();
//! assert!(!iter.is_valid(&vector));
//! assert!(!iter.has_next(&vector));
//! ```
//!
//! Reverse iterators walk from the back:
//!
//! ```
//! # use cds::Vector;
//! let mut vector = Vector::new();
//! vector.extend_from_slice(&[1, 2, 3]).unwrap();
//!
//! let mut iter = vector.rbegin();
//! assert_eq!(iter.next(&vector), Some(3));
//! assert_eq!(iter.next(&vector), Some(2));
//! assert_eq!(iter.back(&vector), Some(2));
//! ```
//!
//! The borrowing [`VectorIter`] is available for ordinary `for` loops:
//!
//! ```
//! # use cds::Vector;
//! let mut vector = Vector::new();
//! vector.extend_from_slice(&[10, 20]).unwrap();
//!
//! let total: i32 = vector.iter().sum();
//! assert_eq!(total, 30);
//! for value in &vector {
//!     assert!(*value >= 10);
//! }
//! ```
//!
//! # Memory Strategies
//!
//! [`System`] uses the process allocator. [`MemoryHooks`] assembles a
//! strategy from three function hooks; if any is missing, construction
//! fails.
//!
//! ```
//! # use cds::{MemoryHooks, Vector, VectorError};
//! let result = Vector::<u32, _>::with_capacity_in(8, MemoryHooks::default());
//! assert_eq!(result.err(), Some(VectorError::InvalidStrategy));
//!
//! let vector = Vector::<u32, _>::with_capacity_in(8, MemoryHooks::system()).unwrap();
//! assert_eq!(vector.capacity(), 8);
//! ```
//!
//! # Thread Safety
//!
//! A vector is `Send` and `Sync` when its element type and strategy are, but
//! it provides no locking of its own. Share one across threads only behind
//! an exclusive lock.

mod config;
mod core;
mod error;
mod generation;
mod graph;
mod iter;
pub mod memory;
mod raw;

// Re-export public types and traits
pub use crate::config::{VectorConfig, DEFAULT_CAPACITY};
pub use crate::core::{Vector, MIN_GROW_CAPACITY, SHRINK_RATIO};
pub use crate::error::VectorError;
pub use crate::graph::Graph;
pub use crate::iter::{Cursor, Iter, VectorCursor, VectorIter, VectorRevIter, Walk};
pub use crate::memory::{MemoryHooks, MemoryStrategy, System};
