use std::fmt;
use std::mem::MaybeUninit;

/// A fixed-capacity storage segment owning a contiguous run of elements.
///
/// The occupied range is `[begin, begin + len)` within the segment's slots.
/// A block writes toward its back when it was anchored at the start of its
/// storage and toward its front when it was anchored at the end; the deque
/// only ever extends a block in the direction it was anchored for, which is
/// what keeps every interior block of a deque completely full.
pub(crate) struct Block<T> {
    /// Slot storage. Allocated once at block creation and never reallocated,
    /// so element addresses are stable for the lifetime of the block even
    /// when the block descriptor itself is moved during ring growth.
    storage: Box<[MaybeUninit<T>]>,

    /// First occupied slot index.
    begin: usize,

    /// Number of occupied slots.
    len: usize,
}

impl<T> Block<T> {
    /// Creates an empty block whose occupied range will grow from slot 0
    /// upward. Used when pushing at the back of the deque.
    #[must_use]
    pub(crate) fn anchored_at_start(capacity: usize) -> Self {
        assert!(capacity > 0, "block capacity must be non-zero");

        Self {
            storage: Self::allocate_slots(capacity),
            begin: 0,
            len: 0,
        }
    }

    /// Creates an empty block whose occupied range will grow from the last
    /// slot downward. Used when pushing at the front of the deque.
    #[must_use]
    pub(crate) fn anchored_at_end(capacity: usize) -> Self {
        assert!(capacity > 0, "block capacity must be non-zero");

        Self {
            storage: Self::allocate_slots(capacity),
            begin: capacity,
            len: 0,
        }
    }

    fn allocate_slots(capacity: usize) -> Box<[MaybeUninit<T>]> {
        (0..capacity).map(|_| MaybeUninit::uninit()).collect()
    }

    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use and/or infinite loop.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Index of the first occupied slot. Meaningless while the block is
    /// empty, which only happens transiently inside push operations.
    #[must_use]
    pub(crate) fn begin_offset(&self) -> usize {
        self.begin
    }

    /// Whether another element can be appended after the occupied range.
    #[must_use]
    pub(crate) fn has_back_room(&self) -> bool {
        // Cannot overflow: begin + len never exceeds the slot count.
        self.begin.wrapping_add(self.len) < self.storage.len()
    }

    /// Whether another element can be prepended before the occupied range.
    #[must_use]
    pub(crate) fn has_front_room(&self) -> bool {
        self.begin > 0
    }

    /// Appends an element directly after the occupied range.
    ///
    /// # Panics
    ///
    /// Panics if the block has no room at its back.
    pub(crate) fn push_back(&mut self, value: T) {
        assert!(
            self.has_back_room(),
            "push_back() called on a block with no back room"
        );

        // Guarded by the room check above.
        let slot = self.begin.wrapping_add(self.len);
        self.storage[slot].write(value);
        self.len = self.len.wrapping_add(1);
    }

    /// Prepends an element directly before the occupied range.
    ///
    /// # Panics
    ///
    /// Panics if the block has no room at its front.
    pub(crate) fn push_front(&mut self, value: T) {
        assert!(
            self.has_front_room(),
            "push_front() called on a block with no front room"
        );

        // Guarded by the room check above.
        self.begin = self.begin.wrapping_sub(1);
        self.storage[self.begin].write(value);
        self.len = self.len.wrapping_add(1);
    }

    /// Removes and returns the last element of the occupied range.
    ///
    /// # Panics
    ///
    /// Panics if the block is empty.
    pub(crate) fn pop_back(&mut self) -> T {
        assert!(self.len > 0, "pop_back() called on an empty block");

        // Shrinking the range first takes the slot out of the occupied range,
        // so `Drop` will not touch it again.
        self.len = self.len.wrapping_sub(1);
        let slot = self.begin.wrapping_add(self.len);

        // SAFETY: The slot was inside the occupied range until the line
        // above, so it holds an initialized element, and it is read out
        // exactly once because it is no longer part of the range.
        unsafe { self.storage[slot].assume_init_read() }
    }

    /// Removes and returns the first element of the occupied range.
    ///
    /// # Panics
    ///
    /// Panics if the block is empty.
    pub(crate) fn pop_front(&mut self) -> T {
        assert!(self.len > 0, "pop_front() called on an empty block");

        let slot = self.begin;
        self.begin = self.begin.wrapping_add(1);
        self.len = self.len.wrapping_sub(1);

        // SAFETY: The slot was inside the occupied range until the lines
        // above, so it holds an initialized element, and it is read out
        // exactly once because it is no longer part of the range.
        unsafe { self.storage[slot].assume_init_read() }
    }

    /// Returns the element in the given slot of this block's storage.
    ///
    /// The index is a slot index into the block's storage, not an ordinal
    /// position - the deque computes it from its block arithmetic.
    ///
    /// # Panics
    ///
    /// Panics if the slot is outside the occupied range.
    #[must_use]
    pub(crate) fn get(&self, slot: usize) -> &T {
        self.assert_occupied(slot);

        // SAFETY: Every slot in the occupied range holds an initialized
        // element, and the bounds assertion above proved membership.
        unsafe { self.storage[slot].assume_init_ref() }
    }

    /// Returns the element in the given slot of this block's storage.
    ///
    /// # Panics
    ///
    /// Panics if the slot is outside the occupied range.
    #[must_use]
    pub(crate) fn get_mut(&mut self, slot: usize) -> &mut T {
        self.assert_occupied(slot);

        // SAFETY: Every slot in the occupied range holds an initialized
        // element, and the bounds assertion above proved membership. We hold
        // an exclusive reference to the block.
        unsafe { self.storage[slot].assume_init_mut() }
    }

    fn assert_occupied(&self, slot: usize) {
        assert!(
            slot >= self.begin && slot < self.begin.wrapping_add(self.len),
            "slot {slot} is outside the occupied range [{}, {}) of the block",
            self.begin,
            self.begin.wrapping_add(self.len)
        );
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        for slot in self.begin..self.begin.wrapping_add(self.len) {
            // SAFETY: Every slot in the occupied range holds an initialized
            // element. Each is dropped exactly once because the block itself
            // is being dropped and pop operations remove slots from the
            // range before reading them out.
            unsafe {
                self.storage[slot].assume_init_drop();
            }
        }
    }
}

impl<T> fmt::Debug for Block<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("capacity", &self.storage.len())
            .field("begin", &self.begin)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn back_anchored_block_fills_from_start() {
        let mut block = Block::<u32>::anchored_at_start(4);

        block.push_back(1);
        block.push_back(2);
        block.push_back(3);
        block.push_back(4);

        assert!(!block.has_back_room());
        assert_eq!(block.len(), 4);
        assert_eq!(block.begin_offset(), 0);
        assert_eq!(*block.get(0), 1);
        assert_eq!(*block.get(3), 4);
    }

    #[test]
    fn front_anchored_block_fills_from_end() {
        let mut block = Block::<u32>::anchored_at_end(4);

        block.push_front(1);
        block.push_front(2);

        assert!(block.has_front_room());
        assert_eq!(block.begin_offset(), 2);
        assert_eq!(*block.get(2), 2);
        assert_eq!(*block.get(3), 1);
    }

    #[test]
    fn pop_returns_elements_in_reverse_push_order() {
        let mut block = Block::<u32>::anchored_at_start(4);

        block.push_back(1);
        block.push_back(2);

        assert_eq!(block.pop_back(), 2);
        assert_eq!(block.pop_back(), 1);
        assert_eq!(block.len(), 0);
    }

    #[test]
    #[should_panic]
    fn panic_when_slot_outside_occupied_range() {
        let mut block = Block::<u32>::anchored_at_start(4);

        block.push_back(1);
        _ = block.get(1);
    }

    #[test]
    fn drop_releases_only_occupied_slots() {
        struct DropTracker {
            dropped: Rc<Cell<usize>>,
        }

        impl Drop for DropTracker {
            fn drop(&mut self) {
                self.dropped.set(self.dropped.get() + 1);
            }
        }

        let dropped = Rc::new(Cell::new(0));

        let mut block = Block::<DropTracker>::anchored_at_start(4);
        block.push_back(DropTracker {
            dropped: Rc::clone(&dropped),
        });
        block.push_back(DropTracker {
            dropped: Rc::clone(&dropped),
        });

        // Popped elements are dropped by the caller, not the block.
        drop(block.pop_back());
        assert_eq!(dropped.get(), 1);

        drop(block);
        assert_eq!(dropped.get(), 2);
    }
}
