use std::hash::Hash;

/// Selects which part of an element acts as its key for hashing and
/// equality in a [`ChainSet`][crate::ChainSet].
///
/// The default key space, [`WholeElement`], uses the entire element. A
/// custom key space projects out a field (or any other stable part) of the
/// element, which turns the set into a map keyed by that projection: lookups
/// and removals then need only the key, and two elements with equal keys are
/// duplicates no matter what the rest of their fields hold.
///
/// # Example
///
/// ```rust
/// use chain_set::{ChainSet, KeySpace};
///
/// struct Session {
///     id: u64,
///     user: String,
/// }
///
/// /// Keys sessions by their identifier alone.
/// enum ById {}
///
/// impl KeySpace<Session> for ById {
///     type Key = u64;
///
///     fn key_of(item: &Session) -> &u64 {
///         &item.id
///     }
/// }
///
/// let mut sessions = ChainSet::<Session>::builder().key_space::<ById>().build();
///
/// assert!(sessions.insert(Session {
///     id: 7,
///     user: "alice".to_string(),
/// }));
///
/// // A second session with the same identifier is a duplicate.
/// assert!(!sessions.insert(Session {
///     id: 7,
///     user: "bob".to_string(),
/// }));
///
/// assert_eq!(sessions.get(&7).expect("session 7 was inserted").user, "alice");
/// ```
pub trait KeySpace<T> {
    /// The key type elements are hashed and compared by.
    type Key: ?Sized + Hash + Eq;

    /// Projects the key out of an element.
    fn key_of(item: &T) -> &Self::Key;
}

/// The default key space: the entire element is its own key.
#[derive(Debug)]
pub enum WholeElement {}

impl<T> KeySpace<T> for WholeElement
where
    T: Hash + Eq,
{
    type Key = T;

    fn key_of(item: &T) -> &T {
        item
    }
}
