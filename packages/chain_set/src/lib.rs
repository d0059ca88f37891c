//! A chaining hash set of unique keys with a skew-tolerant expansion policy.
//!
//! This crate provides [`ChainSet`], a hash table of per-bucket chains that
//! rejects duplicate keys and expands only when bucket overload is clearly
//! systemic: the first bucket whose chain outgrows the soft cap is tolerated
//! indefinitely, and the table doubles only when a second bucket follows.
//!
//! # Key Features
//!
//! - **Unique keys**: inserting a duplicate key is a silent no-op, not an
//!   error
//! - **Projected keys**: a [`KeySpace`] can narrow the key to a field of the
//!   element, giving map-like lookup and removal by key alone
//! - **Skew tolerance**: one pathological bucket never pays for a full
//!   rehash; a second one does
//! - **Pluggable hash oracle**: any [`std::hash::BuildHasher`], defaulting
//!   to `foldhash`
//! - **Index-linked chains**: nodes live in an arena and are relinked by
//!   index during expansion, so elements never move
//!
//! # Example
//!
//! ```rust
//! use chain_set::ChainSet;
//!
//! let mut seen = ChainSet::new();
//!
//! assert!(seen.insert("event-17"));
//! assert!(seen.insert("event-18"));
//!
//! // The same event arriving again changes nothing.
//! assert!(!seen.insert("event-17"));
//! assert_eq!(seen.len(), 2);
//!
//! assert!(seen.remove(&"event-18"));
//! assert_eq!(seen.get(&"event-18"), None);
//! ```
//!
//! ## Keys narrower than the element
//!
//! ```rust
//! use chain_set::{ChainSet, KeySpace};
//!
//! #[derive(Debug)]
//! struct Route {
//!     prefix: u32,
//!     gateway: String,
//! }
//!
//! /// Routes are identified by prefix alone.
//! enum ByPrefix {}
//!
//! impl KeySpace<Route> for ByPrefix {
//!     type Key = u32;
//!
//!     fn key_of(route: &Route) -> &u32 {
//!         &route.prefix
//!     }
//! }
//!
//! let mut routes = ChainSet::<Route>::builder().key_space::<ByPrefix>().build();
//!
//! routes.insert(Route {
//!     prefix: 24,
//!     gateway: "10.0.0.1".to_string(),
//! });
//!
//! // Lookup needs only the key.
//! assert_eq!(routes.get(&24).expect("route was inserted").gateway, "10.0.0.1");
//! ```

mod arena;
mod builder;
mod iter;
mod key_space;
mod set;

pub(crate) use arena::*;
pub use builder::*;
pub use iter::Iter;
pub use key_space::{KeySpace, WholeElement};
pub use set::ChainSet;
