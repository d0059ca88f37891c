//! A double-ended queue built from fixed-capacity storage blocks.
//!
//! This crate provides [`BlockDeque`], a deque that stores its elements in
//! blocks of a fixed capacity and tracks the blocks through a circular array
//! of descriptors, plus the thin [`Stack`] and [`Queue`] adapters over it.
//!
//! # Key Features
//!
//! - **Stable element addresses**: growth doubles the descriptor ring and
//!   moves only descriptors; element storage is never relocated or copied
//! - **O(1) at both ends**: amortized constant-time push and pop at the
//!   front and the back
//! - **O(1) random access**: any position translates directly to a block
//!   and a slot, because every interior block is completely full
//! - **Double-ended cursor**: [`iter()`][BlockDeque::iter] walks forward and
//!   backward over borrowed elements
//!
//! # Example
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! let mut deque = BlockDeque::new();
//!
//! deque.push_back("middle");
//! deque.push_back("newest");
//! deque.push_front("oldest");
//!
//! assert_eq!(deque.len(), 3);
//! assert_eq!(*deque.get(1), "middle");
//!
//! // Traversal in both directions.
//! let forward: Vec<&str> = deque.iter().copied().collect();
//! assert_eq!(forward, ["oldest", "middle", "newest"]);
//!
//! let backward: Vec<&str> = deque.iter().rev().copied().collect();
//! assert_eq!(backward, ["newest", "middle", "oldest"]);
//! ```
//!
//! ## Choosing a block capacity
//!
//! ```rust
//! use block_deque::BlockDeque;
//!
//! // Small blocks keep memory tight for deques known to stay small.
//! let mut deque = BlockDeque::<u64>::builder().block_capacity(16).build();
//!
//! for value in 0..64 {
//!     deque.push_back(value);
//! }
//!
//! assert_eq!(*deque.get(40), 40);
//! ```

mod block;
mod builder;
mod deque;
mod iter;
mod queue;
mod stack;

pub(crate) use block::*;
pub use builder::*;
pub use deque::BlockDeque;
pub use iter::{IntoIter, Iter};
pub use queue::Queue;
pub use stack::Stack;
