use crate::{Block, BlockDequeBuilder, Iter};

/// How many block descriptor slots the ring starts with. The ring doubles
/// whenever every slot holds a block and another one is needed.
const INITIAL_RING_CAPACITY: usize = 32;

/// How many elements each storage block holds unless configured otherwise.
pub(crate) const DEFAULT_BLOCK_CAPACITY: usize = 512;

/// A double-ended queue assembled from fixed-capacity storage blocks.
///
/// Elements live inside blocks of `block_capacity` slots each; the deque
/// tracks the blocks through a circular array of descriptors. Pushing and
/// popping at either end is amortized O(1) and random access is O(1).
///
/// The property that distinguishes this layout from a flat ring buffer is
/// that growth never relocates stored elements: when the descriptor ring is
/// exhausted it doubles and the descriptors are repacked, but each block's
/// element storage stays exactly where it was allocated. Only the metadata
/// moves, so growth costs O(number of blocks), not O(number of elements),
/// and element addresses remain stable until the element is removed.
///
/// Random access works because only the first and the last block may hold a
/// partial range of elements - every interior block is completely full, so
/// the block holding any position can be computed directly.
///
/// # Example
///
/// ```rust
/// use block_deque::BlockDeque;
///
/// let mut deque = BlockDeque::new();
///
/// deque.push_back("b");
/// deque.push_back("c");
/// deque.push_front("a");
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(*deque.get(0), "a");
/// assert_eq!(*deque.back(), "c");
///
/// assert_eq!(deque.pop_front(), "a");
/// assert_eq!(deque.pop_back(), "c");
/// ```
#[derive(Debug)]
pub struct BlockDeque<T> {
    /// Circular array of block descriptor slots. Only slots inside the
    /// occupied window `[begin, end]` (circularly) hold a block.
    blocks: Box<[Option<Block<T>>]>,

    /// Element capacity of each block.
    block_capacity: usize,

    /// Ring index of the first occupied descriptor slot.
    begin: usize,

    /// Ring index of the last occupied descriptor slot. Equal to `begin`
    /// when the deque holds at most one block.
    end: usize,

    /// Number of descriptor slots currently holding a block.
    used_blocks: usize,

    /// Total number of elements across all blocks.
    len: usize,
}

impl<T> BlockDeque<T> {
    /// Creates a new [`BlockDeque`] with the default configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    ///
    /// deque.push_back(42);
    /// assert_eq!(deque.len(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a new [`BlockDeque`].
    ///
    /// Use this when you want to customize the deque configuration beyond
    /// the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let deque = BlockDeque::<u32>::builder().block_capacity(64).build();
    ///
    /// assert_eq!(deque.block_capacity(), 64);
    /// ```
    pub fn builder() -> BlockDequeBuilder<T> {
        BlockDequeBuilder::new()
    }

    /// # Panics
    ///
    /// Panics if `T` is zero-sized or the block capacity is zero.
    #[must_use]
    pub(crate) fn new_inner(block_capacity: usize) -> Self {
        assert!(
            size_of::<T>() > 0,
            "BlockDeque must have non-zero item size"
        );
        assert!(
            block_capacity > 0,
            "BlockDeque must have non-zero block capacity"
        );

        Self {
            blocks: (0..INITIAL_RING_CAPACITY).map(|_| None).collect(),
            block_capacity,
            begin: 0,
            end: 0,
            used_blocks: 0,
            len: 0,
        }
    }

    /// The number of elements in the deque.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    /// assert_eq!(deque.len(), 0);
    ///
    /// deque.push_back(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.len(), 2);
    /// ```
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use and/or infinite loop.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the deque is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element capacity of each storage block.
    #[must_use]
    pub fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    /// Inserts an element at the back.
    ///
    /// Amortized O(1): at most one block allocation, plus a descriptor ring
    /// doubling when every descriptor slot is in use. Neither moves any
    /// already-stored element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    ///
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(*deque.back(), 2);
    /// ```
    pub fn push_back(&mut self, value: T) {
        // The ring is saturated and the terminal block has no room: double
        // the descriptor ring first. This is a metadata-only resize.
        if self.used_blocks == self.blocks.len() && !self.block(self.end).has_back_room() {
            self.grow_ring();
        }

        if self.used_blocks == 0 {
            self.end = self.begin;
            self.used_blocks = 1;
            self.blocks[self.end] = Some(Block::anchored_at_start(self.block_capacity));
        } else if !self.block(self.end).has_back_room() {
            self.end = self.next_ring_index(self.end);
            // Cannot overflow: bounded by the ring capacity, grown above.
            self.used_blocks = self.used_blocks.wrapping_add(1);
            self.blocks[self.end] = Some(Block::anchored_at_start(self.block_capacity));
        }

        self.block_mut(self.end).push_back(value);

        // Cannot overflow: that would imply more elements than virtual memory.
        self.len = self.len.wrapping_add(1);

        #[cfg(debug_assertions)]
        self.integrity_check();
    }

    /// Inserts an element at the front.
    ///
    /// Amortized O(1) with the same allocation behavior as
    /// [`push_back()`][Self::push_back].
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    ///
    /// deque.push_front(1);
    /// deque.push_front(2);
    ///
    /// assert_eq!(*deque.front(), 2);
    /// ```
    pub fn push_front(&mut self, value: T) {
        if self.used_blocks == self.blocks.len() && !self.block(self.begin).has_front_room() {
            self.grow_ring();
        }

        if self.used_blocks == 0 {
            self.begin = self.end;
            self.used_blocks = 1;
            self.blocks[self.begin] = Some(Block::anchored_at_end(self.block_capacity));
        } else if !self.block(self.begin).has_front_room() {
            self.begin = self.previous_ring_index(self.begin);
            // Cannot overflow: bounded by the ring capacity, grown above.
            self.used_blocks = self.used_blocks.wrapping_add(1);
            self.blocks[self.begin] = Some(Block::anchored_at_end(self.block_capacity));
        }

        self.block_mut(self.begin).push_front(value);

        // Cannot overflow: that would imply more elements than virtual memory.
        self.len = self.len.wrapping_add(1);

        #[cfg(debug_assertions)]
        self.integrity_check();
    }

    /// Removes and returns the element at the back.
    ///
    /// Frees the terminal block when it held its last element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_back(), 2);
    /// assert_eq!(deque.len(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(self.len > 0, "pop_back() called on an empty deque");

        let value = if self.block(self.end).len() == 1 {
            let mut block = self.blocks[self.end]
                .take()
                .expect("terminal descriptor slot must hold a block while the deque is non-empty");
            let value = block.pop_back();

            if self.used_blocks != 1 {
                self.end = self.previous_ring_index(self.end);
            } else {
                // The deque is now empty: collapse to a single shared index.
                self.end = self.begin;
            }

            // Cannot underflow: the terminal block existed, so at least one
            // descriptor slot was in use.
            self.used_blocks = self.used_blocks.wrapping_sub(1);
            value
        } else {
            self.block_mut(self.end).pop_back()
        };

        // Cannot underflow: guarded by the emptiness assertion above.
        self.len = self.len.wrapping_sub(1);

        #[cfg(debug_assertions)]
        self.integrity_check();

        value
    }

    /// Removes and returns the element at the front.
    ///
    /// Frees the first block when it held its last element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_front(), 1);
    /// assert_eq!(deque.len(), 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn pop_front(&mut self) -> T {
        assert!(self.len > 0, "pop_front() called on an empty deque");

        let value = if self.block(self.begin).len() == 1 {
            let mut block = self.blocks[self.begin]
                .take()
                .expect("first descriptor slot must hold a block while the deque is non-empty");
            let value = block.pop_front();

            if self.used_blocks != 1 {
                self.begin = self.next_ring_index(self.begin);
            } else {
                // The deque is now empty: collapse to a single shared index.
                self.begin = self.end;
            }

            // Cannot underflow: the first block existed, so at least one
            // descriptor slot was in use.
            self.used_blocks = self.used_blocks.wrapping_sub(1);
            value
        } else {
            self.block_mut(self.begin).pop_front()
        };

        // Cannot underflow: guarded by the emptiness assertion above.
        self.len = self.len.wrapping_sub(1);

        #[cfg(debug_assertions)]
        self.integrity_check();

        value
    }

    /// Returns the element at the given position.
    ///
    /// O(1): the position is translated directly to a block and a slot,
    /// which is possible because every interior block is completely full.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    /// for value in 0..5 {
    ///     deque.push_back(value);
    /// }
    ///
    /// assert_eq!(*deque.get(3), 3);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn get(&self, position: usize) -> &T {
        let (block_index, slot) = self.locate(position);
        self.block(block_index).get(slot)
    }

    /// Returns the element at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, position: usize) -> &mut T {
        let (block_index, slot) = self.locate(position);
        self.block_mut(block_index).get_mut(slot)
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    pub fn front(&self) -> &T {
        self.get(0)
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    #[must_use]
    pub fn back(&self) -> &T {
        assert!(self.len > 0, "back() called on an empty deque");
        self.get(self.len.wrapping_sub(1))
    }

    /// Removes all elements and releases every block.
    ///
    /// The descriptor ring keeps its current capacity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    ///
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// ```
    pub fn clear(&mut self) {
        for offset in 0..self.used_blocks {
            let index = self.ring_index_at(offset);

            // Dropping the block drops its remaining elements.
            self.blocks[index] = None;
        }

        self.begin = 0;
        self.end = 0;
        self.used_blocks = 0;
        self.len = 0;
    }

    /// Returns a double-ended cursor over the elements, front to back.
    ///
    /// # Example
    ///
    /// ```rust
    /// use block_deque::BlockDeque;
    ///
    /// let mut deque = BlockDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// let collected: Vec<u32> = deque.iter().copied().collect();
    /// assert_eq!(collected, [1, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Translates an element position to a (ring index, block slot) pair.
    ///
    /// The first block may be partially filled, so its remaining length is
    /// consumed first; past it, every block before the terminal one is
    /// completely full and the target falls out of plain block arithmetic.
    #[expect(
        clippy::integer_division,
        reason = "block arithmetic is exact: interior blocks are always full"
    )]
    fn locate(&self, position: usize) -> (usize, usize) {
        assert!(
            position < self.len,
            "position {position} out of bounds in deque of length {}",
            self.len
        );

        let first_block = self.block(self.begin);
        let first_block_len = first_block.len();

        if position < first_block_len {
            // Cannot overflow: the slot stays within the first block.
            (self.begin, first_block.begin_offset().wrapping_add(position))
        } else {
            let rest = position.wrapping_sub(first_block_len);
            let blocks_past_first = rest / self.block_capacity;

            // Cannot overflow: bounded by the ring capacity after the modulo.
            let block_index = self
                .begin
                .wrapping_add(blocks_past_first)
                .wrapping_add(1)
                % self.blocks.len();

            (block_index, rest % self.block_capacity)
        }
    }

    /// Doubles the descriptor ring and repacks the occupied window to start
    /// at ring index 0.
    ///
    /// Only block descriptors move; the element storage each block owns is
    /// untouched, so this is O(used blocks) and element addresses survive.
    fn grow_ring(&mut self) {
        let old_capacity = self.blocks.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .expect("descriptor ring capacity overflow");

        let mut new_blocks: Box<[Option<Block<T>>]> = (0..new_capacity).map(|_| None).collect();

        for offset in 0..self.used_blocks {
            let from = self.ring_index_at(offset);
            new_blocks[offset] = self.blocks[from].take();
        }

        self.blocks = new_blocks;
        self.begin = 0;
        // Cannot underflow: the ring only grows when every slot is in use.
        self.end = self.used_blocks.wrapping_sub(1);
    }

    /// Ring index of the descriptor slot `offset` positions into the
    /// occupied window.
    fn ring_index_at(&self, offset: usize) -> usize {
        // Cannot overflow: both operands are bounded by the ring capacity.
        self.begin.wrapping_add(offset) % self.blocks.len()
    }

    fn next_ring_index(&self, index: usize) -> usize {
        // Cannot overflow: the index is bounded by the ring capacity.
        index.wrapping_add(1) % self.blocks.len()
    }

    fn previous_ring_index(&self, index: usize) -> usize {
        // Cannot overflow: both operands are bounded by the ring capacity.
        index.wrapping_add(self.blocks.len()).wrapping_sub(1) % self.blocks.len()
    }

    fn block(&self, index: usize) -> &Block<T> {
        self.blocks[index]
            .as_ref()
            .expect("descriptor slot inside the occupied window must hold a block")
    }

    fn block_mut(&mut self, index: usize) -> &mut Block<T> {
        self.blocks[index]
            .as_mut()
            .expect("descriptor slot inside the occupied window must hold a block")
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    fn integrity_check(&self) {
        let mut elements_in_window: usize = 0;

        for offset in 0..self.used_blocks {
            let index = self.ring_index_at(offset);
            let block = self.blocks[index]
                .as_ref()
                .expect("occupied window contains a vacant descriptor slot");

            assert!(
                block.len() > 0,
                "block at ring index {index} is empty outside a mutation"
            );

            let is_first = offset == 0;
            let is_last = offset == self.used_blocks.wrapping_sub(1);
            if !is_first && !is_last {
                assert!(
                    block.len() == self.block_capacity,
                    "interior block at ring index {index} is not full"
                );
            }

            elements_in_window = elements_in_window.wrapping_add(block.len());
        }

        assert!(
            elements_in_window == self.len,
            "deque length {} does not match the {elements_in_window} elements held by its blocks",
            self.len
        );

        if self.used_blocks == 0 {
            assert!(
                self.begin == self.end,
                "empty deque must collapse begin and end to a shared index"
            );
        }
    }
}

impl<T> Default for BlockDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    /// A deque whose blocks hold only a few elements, so tests cross block
    /// boundaries and exercise ring growth without millions of pushes.
    fn tiny_blocks() -> BlockDeque<u32> {
        BlockDeque::builder().block_capacity(4).build()
    }

    #[test]
    fn smoke_test() {
        let mut deque = BlockDeque::<u32>::new();

        deque.push_back(2);
        deque.push_back(3);
        deque.push_front(1);

        assert_eq!(deque.len(), 3);
        assert_eq!(*deque.front(), 1);
        assert_eq!(*deque.back(), 3);

        assert_eq!(deque.pop_front(), 1);
        assert_eq!(deque.pop_back(), 3);
        assert_eq!(deque.pop_back(), 2);
        assert!(deque.is_empty());
    }

    #[test]
    fn random_access_preserves_push_order() {
        let mut deque = tiny_blocks();

        for value in 0..20 {
            deque.push_back(value);
        }

        for position in 0..20 {
            assert_eq!(*deque.get(position as usize), position);
        }
    }

    #[test]
    fn front_push_is_visible_at_position_zero() {
        let mut deque = tiny_blocks();

        for value in 0..20 {
            deque.push_front(value);
            assert_eq!(*deque.get(0), value);
        }

        // Front pushes read back in reverse push order.
        for position in 0..20 {
            assert_eq!(*deque.get(position), 19 - position as u32);
        }
    }

    #[test]
    fn position_arithmetic_crosses_block_boundary() {
        let mut deque = tiny_blocks();

        for value in 0..5 {
            deque.push_back(value);
        }

        // With block capacity 4, position 3 is the first block's last slot
        // and position 4 is the second block's first slot.
        assert_eq!(*deque.get(3), 3);
        assert_eq!(*deque.get(4), 4);
    }

    #[test]
    fn push_pop_at_same_end_is_identity() {
        let mut deque = tiny_blocks();

        for value in 0..7 {
            deque.push_back(value);
        }

        let snapshot: Vec<u32> = deque.iter().copied().collect();

        deque.push_back(100);
        assert_eq!(deque.pop_back(), 100);
        deque.push_front(200);
        assert_eq!(deque.pop_front(), 200);

        let after: Vec<u32> = deque.iter().copied().collect();
        assert_eq!(snapshot, after);
    }

    #[test]
    fn growth_is_transparent_to_readers() {
        let mut deque = tiny_blocks();

        // Enough elements to force several ring doublings: the initial ring
        // holds 32 descriptors and these pushes fill 400 blocks.
        let total = 400 * deque.block_capacity() as u32;
        for value in 0..total {
            deque.push_back(value);
        }

        assert_eq!(deque.len(), total as usize);
        for position in 0..total {
            assert_eq!(*deque.get(position as usize), position);
        }
    }

    #[test]
    fn mixed_end_traffic_keeps_order() {
        let mut deque = tiny_blocks();

        for value in 0..10 {
            deque.push_back(value);
            deque.push_front(value);
        }

        let collected: Vec<u32> = deque.iter().copied().collect();
        let expected: Vec<u32> = (0..10).rev().chain(0..10).collect();
        assert_eq!(collected, expected);
    }

    #[test]
    fn drains_back_to_front_anchored_blocks() {
        let mut deque = tiny_blocks();

        // Front pushes allocate blocks anchored at their storage end; make
        // sure popping from the back walks through them correctly.
        for value in 0..13 {
            deque.push_front(value);
        }

        for expected in 0..13 {
            assert_eq!(deque.pop_back(), expected);
        }
        assert!(deque.is_empty());
    }

    #[test]
    fn clear_resets_but_remains_usable() {
        let mut deque = tiny_blocks();

        for value in 0..9 {
            deque.push_back(value);
        }

        deque.clear();
        assert!(deque.is_empty());
        assert_eq!(deque.len(), 0);

        deque.push_back(42);
        assert_eq!(*deque.front(), 42);
    }

    #[test]
    fn every_element_dropped_exactly_once() {
        struct DropTracker {
            dropped: Rc<Cell<usize>>,
        }

        impl Drop for DropTracker {
            fn drop(&mut self) {
                self.dropped.set(self.dropped.get() + 1);
            }
        }

        let dropped = Rc::new(Cell::new(0));

        let mut deque = BlockDeque::builder().block_capacity(4).build();
        for _ in 0..10 {
            deque.push_back(DropTracker {
                dropped: Rc::clone(&dropped),
            });
        }

        drop(deque.pop_front());
        drop(deque.pop_back());
        assert_eq!(dropped.get(), 2);

        drop(deque);
        assert_eq!(dropped.get(), 10);
    }

    #[test]
    #[should_panic]
    fn panic_when_pop_back_on_empty() {
        let mut deque = BlockDeque::<u32>::new();
        _ = deque.pop_back();
    }

    #[test]
    #[should_panic]
    fn panic_when_pop_front_on_empty() {
        let mut deque = BlockDeque::<u32>::new();
        _ = deque.pop_front();
    }

    #[test]
    #[should_panic]
    fn panic_when_position_out_of_bounds() {
        let mut deque = BlockDeque::<u32>::new();
        deque.push_back(1);
        _ = deque.get(1);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut deque = tiny_blocks();
        for value in 0..6 {
            deque.push_back(value);
        }

        *deque.get_mut(5) = 99;
        assert_eq!(*deque.back(), 99);
    }
}
