use std::hash::BuildHasher;
use std::marker::PhantomData;

use foldhash::fast::RandomState;

use crate::set::DEFAULT_MAX_CHAIN_LEN;
use crate::{ChainSet, KeySpace, WholeElement};

/// Builder for creating an instance of [`ChainSet`].
///
/// You only need to use this builder if you want to customize the set
/// configuration. The default configuration used by [`ChainSet::new()`][1]
/// is sufficient for most use cases.
///
/// # Example
///
/// ```rust
/// use chain_set::ChainSet;
///
/// let set = ChainSet::<u32>::builder().max_chain_length(4).build();
/// ```
///
/// [1]: ChainSet::new
#[must_use]
pub struct ChainSetBuilder<T, K, S> {
    max_chain_len: usize,
    hasher: S,

    _markers: PhantomData<(T, K)>,
}

impl<T, K, S> std::fmt::Debug for ChainSetBuilder<T, K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainSetBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("max_chain_len", &self.max_chain_len)
            .finish()
    }
}

impl<T> ChainSetBuilder<T, WholeElement, RandomState> {
    pub(crate) fn new() -> Self {
        Self {
            max_chain_len: DEFAULT_MAX_CHAIN_LEN,
            hasher: RandomState::default(),
            _markers: PhantomData,
        }
    }
}

impl<T, K, S> ChainSetBuilder<T, K, S> {
    /// Sets the soft cap on chain length. The default is 11.
    ///
    /// The first bucket to reach the cap is tolerated; the second forces
    /// an expansion.
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
    pub fn max_chain_length(mut self, cap: usize) -> Self {
        self.max_chain_len = cap;
        self
    }

    /// Selects the key space that projects each element's key.
    ///
    /// The default key space is [`WholeElement`]. See [`KeySpace`] for a
    /// worked map-like example.
    pub fn key_space<K2>(self) -> ChainSetBuilder<T, K2, S>
    where
        K2: KeySpace<T>,
    {
        ChainSetBuilder {
            max_chain_len: self.max_chain_len,
            hasher: self.hasher,
            _markers: PhantomData,
        }
    }

    /// Sets the hash oracle used to place keys into buckets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chain_set::ChainSet;
    /// use foldhash::fast::FixedState;
    ///
    /// // A fixed seed makes bucket placement reproducible across runs.
    /// let set = ChainSet::<u32>::builder()
    ///     .hasher(FixedState::with_seed(7))
    ///     .build();
    /// ```
    pub fn hasher<S2>(self, hasher: S2) -> ChainSetBuilder<T, K, S2>
    where
        S2: BuildHasher,
    {
        ChainSetBuilder {
            max_chain_len: self.max_chain_len,
            hasher,
            _markers: PhantomData,
        }
    }

    /// Builds the set with the specified configuration.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or the chain length cap is zero.
    #[must_use]
    pub fn build(self) -> ChainSet<T, K, S>
    where
        K: KeySpace<T>,
        S: BuildHasher,
    {
        ChainSet::new_inner(self.max_chain_len, self.hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_applies() {
        let set = ChainSetBuilder::<u32, WholeElement, RandomState>::new().build();

        assert_eq!(set.max_chain_len(), DEFAULT_MAX_CHAIN_LEN);
        assert!(!set.has_long_chain());
    }

    #[test]
    #[should_panic]
    fn panic_when_zero_chain_cap() {
        _ = ChainSet::<u32>::builder().max_chain_length(0).build();
    }
}
