use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;
use std::mem;

use foldhash::fast::RandomState;

use crate::{ChainSetBuilder, Iter, KeySpace, NodeArena, WholeElement};

/// How many buckets the table starts with. The bucket array doubles on
/// expansion.
const INITIAL_BUCKET_COUNT: usize = 32;

/// How many nodes a bucket's chain may hold before it counts as overloaded,
/// unless configured otherwise.
pub(crate) const DEFAULT_MAX_CHAIN_LEN: usize = 11;

/// A chaining hash set of unique keys with a skew-tolerant expansion policy.
///
/// Elements are stored in per-bucket chains; the key of an element is chosen
/// by the [`KeySpace`] parameter, which defaults to the whole element and
/// can instead project out a field for map-like use. Two elements with equal
/// keys are duplicates: inserting the second one is rejected (not an error)
/// and the set is unchanged.
///
/// # Tolerating one long chain
///
/// Because the key may be a narrow projection of the element, a single key
/// distribution can pound one bucket while the rest of the table stays
/// nearly empty. Doubling the table on every overload would then buy
/// nothing. Instead, the first bucket whose chain reaches the soft cap
/// (11 nodes by default) is simply tolerated and keeps growing; the table
/// expands only when a *second* bucket reaches the cap, which is the signal
/// that the whole table - not one unlucky bucket - is overloaded. Expansion
/// doubles the bucket array and relinks every node; element storage does
/// not move.
///
/// Once a bucket has been tolerated, the mark stays even if removals later
/// shrink its chain: the next overloaded bucket still forces an expansion.
///
/// # Example
///
/// ```rust
/// use chain_set::ChainSet;
///
/// let mut set = ChainSet::new();
///
/// assert!(set.insert("alpha"));
/// assert!(set.insert("beta"));
///
/// // Duplicate keys are rejected, not an error.
/// assert!(!set.insert("alpha"));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&"alpha"));
///
/// assert!(set.remove(&"alpha"));
/// assert!(!set.contains(&"alpha"));
/// ```
pub struct ChainSet<T, K = WholeElement, S = RandomState> {
    /// Bucket array; each bucket heads a chain of arena nodes.
    buckets: Vec<Bucket>,

    /// Node storage. Chains are index links, so expansion relinks chains
    /// without moving any element.
    nodes: NodeArena<T>,

    /// Hash oracle for key projections.
    hasher: S,

    /// Number of elements in the set.
    len: usize,

    /// Soft cap on chain length; the first chain to reach it is tolerated,
    /// the second forces an expansion.
    max_chain_len: usize,

    /// Bucket index of the chain currently tolerated above the soft cap.
    long_chain: Option<usize>,

    _key_space: PhantomData<K>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Bucket {
    /// Arena index of the first node in this bucket's chain.
    pub(crate) first: Option<usize>,

    /// Number of nodes in this bucket's chain.
    pub(crate) len: usize,
}

impl Bucket {
    const EMPTY: Self = Self {
        first: None,
        len: 0,
    };
}

impl<T> ChainSet<T>
where
    T: Hash + Eq,
{
    /// Creates a new [`ChainSet`] with the default configuration: the whole
    /// element is the key and the default hasher is used.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    ///
    /// set.insert(42);
    /// assert!(set.contains(&42));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl<T> ChainSet<T> {
    /// Starts building a new [`ChainSet`].
    ///
    /// Use this to pick a key space, a hasher, or a chain length cap other
    /// than the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let set = ChainSet::<u32>::builder().max_chain_length(4).build();
    ///
    /// assert_eq!(set.max_chain_len(), 4);
    /// ```
    pub fn builder() -> ChainSetBuilder<T, WholeElement, RandomState> {
        ChainSetBuilder::new()
    }
}

impl<T, K, S> ChainSet<T, K, S>
where
    K: KeySpace<T>,
    S: BuildHasher,
{
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or the chain length cap is zero.
    #[must_use]
    pub(crate) fn new_inner(max_chain_len: usize, hasher: S) -> Self {
        assert!(size_of::<T>() > 0, "ChainSet must have non-zero item size");
        assert!(
            max_chain_len > 0,
            "ChainSet must have a non-zero chain length cap"
        );

        Self {
            buckets: vec![Bucket::EMPTY; INITIAL_BUCKET_COUNT],
            nodes: NodeArena::new(),
            hasher,
            len: 0,
            max_chain_len,
            long_chain: None,
            _key_space: PhantomData,
        }
    }

    /// The number of elements in the set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// assert_eq!(set.len(), 0);
    ///
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.len(), 2);
    /// ```
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use and/or infinite loop.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The current number of buckets. Doubles on each expansion.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The soft cap on chain length.
    #[must_use]
    pub fn max_chain_len(&self) -> usize {
        self.max_chain_len
    }

    /// Whether some bucket's chain is currently tolerated above the soft
    /// cap. While this is `true`, the next bucket to reach the cap forces
    /// an expansion.
    #[must_use]
    pub fn has_long_chain(&self) -> bool {
        self.long_chain.is_some()
    }

    /// Inserts an element.
    ///
    /// Returns `true` if the element was inserted and `false` if the set
    /// already held an element with an equal key; a rejected duplicate is
    /// dropped and the set is unchanged. Rejection is an ordinary outcome
    /// of set semantics, not an error.
    ///
    /// May expand the table; see the [type documentation][Self] for when.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    ///
    /// assert!(set.insert("key"));
    /// assert!(!set.insert("key"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let node = self.nodes.allocate(value);

        if self.insert_node(node) {
            true
        } else {
            // Duplicate key: the rejected element is dropped here.
            drop(self.nodes.release(node));
            false
        }
    }

    /// Removes the element with the given key.
    ///
    /// Returns `true` if an element was removed; removal of an absent key
    /// is a no-op returning `false`.
    ///
    /// The long-chain mark is left in place even when this shrinks the
    /// marked bucket's chain back under the cap.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.insert(7);
    ///
    /// assert!(set.remove(&7));
    /// assert!(!set.remove(&7));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K::Key) -> bool {
        let bucket_index = self.bucket_index_of(self.hasher.hash_one(key));

        let mut previous: Option<usize> = None;
        let mut current = self.buckets[bucket_index].first;

        while let Some(node) = current {
            if K::key_of(self.nodes.value(node)) == key {
                let after = self.nodes.next_of(node);

                match previous {
                    Some(previous) => self.nodes.set_next(previous, after),
                    None => self.buckets[bucket_index].first = after,
                }

                drop(self.nodes.release(node));

                // Cannot underflow: the chain held the node we just removed.
                self.buckets[bucket_index].len = self.buckets[bucket_index].len.wrapping_sub(1);
                self.len = self.len.wrapping_sub(1);

                return true;
            }

            previous = current;
            current = self.nodes.next_of(node);
        }

        false
    }

    /// Returns the element with the given key, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.insert("key");
    ///
    /// assert_eq!(set.get(&"key"), Some(&"key"));
    /// assert_eq!(set.get(&"other"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K::Key) -> Option<&T> {
        let bucket_index = self.bucket_index_of(self.hasher.hash_one(key));

        let mut current = self.buckets[bucket_index].first;
        while let Some(node) = current {
            let value = self.nodes.value(node);
            if K::key_of(value) == key {
                return Some(value);
            }

            current = self.nodes.next_of(node);
        }

        None
    }

    /// Whether the set holds an element with the given key.
    #[must_use]
    pub fn contains(&self, key: &K::Key) -> bool {
        self.get(key).is_some()
    }

    /// Removes all elements.
    ///
    /// The bucket array keeps its current size, and the long-chain mark is
    /// left in place, as with [`remove()`][Self::remove].
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();

        for bucket in &mut self.buckets {
            *bucket = Bucket::EMPTY;
        }

        self.len = 0;
    }

    /// Returns a forward cursor over the elements.
    ///
    /// Traversal order is bucket order, then chain order within each
    /// bucket - not insertion order, and an expansion reshuffles it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    ///
    /// let mut set = ChainSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut values: Vec<u32> = set.iter().copied().collect();
    /// values.sort_unstable();
    /// assert_eq!(values, [1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buckets, &self.nodes, self.len)
    }

    /// Links an already-allocated node into the table, unless its key is a
    /// duplicate. Increments the element count on success.
    ///
    /// This is the single placement routine: user inserts come through it,
    /// and an expansion re-runs it for every existing node.
    fn insert_node(&mut self, node: usize) -> bool {
        let hash = self.hasher.hash_one(K::key_of(self.nodes.value(node)));
        let mut bucket_index = self.bucket_index_of(hash);

        // Reject a duplicate key before deciding placement.
        let mut current = self.buckets[bucket_index].first;
        while let Some(existing) = current {
            if K::key_of(self.nodes.value(existing)) == K::key_of(self.nodes.value(node)) {
                return false;
            }

            current = self.nodes.next_of(existing);
        }

        // Decide which bucket takes the node. A bucket under the soft cap
        // takes it directly; an overloaded bucket is either the one
        // tolerated long chain (insert anyway) or the trigger for an
        // expansion, after which the bucket is recomputed against the
        // doubled table.
        loop {
            bucket_index = self.bucket_index_of(hash);

            if self.buckets[bucket_index].len < self.max_chain_len {
                break;
            }

            match self.long_chain {
                Some(tolerated) if tolerated != bucket_index => self.expand(),
                _ => {
                    self.long_chain = Some(bucket_index);
                    break;
                }
            }
        }

        // Link at the chain head: most recently inserted first.
        let bucket = &mut self.buckets[bucket_index];
        self.nodes.set_next(node, bucket.first);
        bucket.first = Some(node);

        // Cannot overflow: that would imply more nodes than virtual memory.
        bucket.len = bucket.len.wrapping_add(1);
        self.len = self.len.wrapping_add(1);

        true
    }

    /// Doubles the bucket array and relinks every node.
    ///
    /// Nodes are re-placed through the normal placement routine, old
    /// buckets in index order, each relinked at its new bucket's head, so
    /// relative order does not survive an expansion. The long-chain mark is
    /// cleared; re-placement may set it again, or even expand again, if the
    /// doubled table still concentrates one bucket.
    fn expand(&mut self) {
        let new_bucket_count = self
            .buckets
            .len()
            .checked_mul(2)
            .expect("bucket count overflow");

        let old_buckets = mem::replace(&mut self.buckets, vec![Bucket::EMPTY; new_bucket_count]);
        self.len = 0;
        self.long_chain = None;

        for bucket in old_buckets {
            let mut current = bucket.first;
            while let Some(node) = current {
                current = self.nodes.next_of(node);

                let relinked = self.insert_node(node);
                debug_assert!(relinked, "expansion encountered a duplicate key");
            }
        }
    }

    fn bucket_index_of(&self, hash: u64) -> usize {
        let bucket_count =
            u64::try_from(self.buckets.len()).expect("bucket count must fit in u64");

        usize::try_from(hash % bucket_count).expect("bucket index is bounded by the bucket count")
    }
}

impl<T> Default for ChainSet<T>
where
    T: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K, S> fmt::Debug for ChainSet<T, K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainSet")
            .field("len", &self.len)
            .field("bucket_count", &self.buckets.len())
            .field("max_chain_len", &self.max_chain_len)
            .field("long_chain", &self.long_chain)
            .finish()
    }
}
