//! A binary-heap priority queue ordered by a caller-supplied comparator.
//!
//! This crate provides [`HeapQueue`], a classic array-backed binary max-heap:
//! whichever element the [`Compare`] parameter ranks highest is the one
//! [`pop()`][HeapQueue::pop] removes. The natural-order comparator
//! [`NaturalOrder`] makes it a max-queue over any [`Ord`] type; any closure
//! taking two elements works as an ad-hoc comparator.
//!
//! # Key Features
//!
//! - **O(log n) push and pop**, O(1) peek at the highest-ranked element
//! - **Comparator-driven order**: rank by `Ord`, by a field, or by any
//!   closure - no wrapper types needed
//! - **Array-backed**: elements live in a growable array read as a complete
//!   binary tree
//!
//! # Example
//!
//! ```rust
//! use heap_queue::HeapQueue;
//!
//! let mut queue = HeapQueue::new();
//!
//! queue.push(30);
//! queue.push(10);
//! queue.push(20);
//!
//! // Elements leave highest first.
//! assert_eq!(queue.pop(), 30);
//! assert_eq!(queue.pop(), 20);
//! assert_eq!(queue.pop(), 10);
//! ```
//!
//! ## Ranking by a field
//!
//! ```rust
//! use heap_queue::HeapQueue;
//!
//! struct Alarm {
//!     severity: u8,
//!     message: &'static str,
//! }
//!
//! let mut alarms = HeapQueue::with_comparator(|a: &Alarm, b: &Alarm| {
//!     a.severity.cmp(&b.severity)
//! });
//!
//! alarms.push(Alarm { severity: 2, message: "disk filling up" });
//! alarms.push(Alarm { severity: 9, message: "disk failed" });
//!
//! assert_eq!(alarms.pop().message, "disk failed");
//! ```

mod compare;
mod queue;

pub use compare::{Compare, NaturalOrder};
pub use queue::HeapQueue;
