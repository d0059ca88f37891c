use std::marker::PhantomData;

use crate::BlockDeque;
use crate::deque::DEFAULT_BLOCK_CAPACITY;

/// Builder for creating an instance of [`BlockDeque`].
///
/// You only need to use this builder if you want to customize the deque
/// configuration. The default configuration used by [`BlockDeque::new()`][1]
/// is sufficient for most use cases.
///
/// # Example
///
/// ```rust
/// use block_deque::BlockDeque;
///
/// let deque = BlockDeque::<u32>::builder().block_capacity(64).build();
/// ```
///
/// [1]: BlockDeque::new
#[must_use]
pub struct BlockDequeBuilder<T> {
    block_capacity: usize,

    _item: PhantomData<T>,
}

impl<T> std::fmt::Debug for BlockDequeBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockDequeBuilder")
            .field(
                "item_type",
                &std::format_args!("{}", std::any::type_name::<T>()),
            )
            .field("block_capacity", &self.block_capacity)
            .finish()
    }
}

impl<T> BlockDequeBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            block_capacity: DEFAULT_BLOCK_CAPACITY,
            _item: PhantomData,
        }
    }

    /// Sets the element capacity of each storage block. The default is 512.
    ///
    /// Larger blocks mean fewer allocations per element; smaller blocks
    /// waste less memory at the partially filled ends.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let deque = BlockDeque::<u32>::builder().block_capacity(16).build();
    ///
    /// assert_eq!(deque.block_capacity(), 16);
    /// ```
    pub fn block_capacity(mut self, capacity: usize) -> Self {
        self.block_capacity = capacity;
        self
    }

    /// Builds the deque with the specified configuration.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or the block capacity is zero.
    #[must_use]
    pub fn build(self) -> BlockDeque<T> {
        BlockDeque::new_inner(self.block_capacity)
    }
}
