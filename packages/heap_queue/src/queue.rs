use std::cmp::Ordering;
use std::fmt;

use crate::{Compare, NaturalOrder};

/// A priority queue over a binary max-heap.
///
/// Elements are held in a growable array read as a complete binary tree:
/// the children of the element at index `i` sit at `2i + 1` and `2i + 2`,
/// and every parent ranks at least as high as its children per the
/// [`Compare`] parameter. [`push()`][Self::push] and [`pop()`][Self::pop]
/// repair that shape in O(log n); [`top()`][Self::top] is O(1).
///
/// Ties are broken arbitrarily: elements that compare equal come out in no
/// particular order relative to each other.
///
/// # Example
///
/// ```rust
/// use heap_queue::HeapQueue;
///
/// let mut queue = HeapQueue::new();
///
/// queue.push(3);
/// queue.push(7);
/// queue.push(5);
///
/// assert_eq!(*queue.top(), 7);
/// assert_eq!(queue.pop(), 7);
/// assert_eq!(queue.pop(), 5);
/// assert_eq!(queue.pop(), 3);
/// ```
pub struct HeapQueue<T, C = NaturalOrder> {
    /// Heap storage: a complete binary tree in array form.
    items: Vec<T>,

    comparator: C,
}

impl<T> HeapQueue<T>
where
    T: Ord,
{
    /// Creates a new [`HeapQueue`] ranked by the element type's [`Ord`]
    /// implementation: the largest element is popped first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heap_queue::HeapQueue;
    ///
    /// let mut queue = HeapQueue::new();
    /// queue.push(1);
    /// queue.push(9);
    ///
    /// assert_eq!(queue.pop(), 9);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> HeapQueue<T, C>
where
    C: Compare<T>,
{
    /// Creates a new [`HeapQueue`] ranked by the given comparator.
    ///
    /// Whichever element the comparator ranks highest is popped first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heap_queue::HeapQueue;
    ///
    /// struct Job {
    ///     priority: u8,
    ///     name: &'static str,
    /// }
    ///
    /// let mut jobs = HeapQueue::with_comparator(|a: &Job, b: &Job| {
    ///     a.priority.cmp(&b.priority)
    /// });
    ///
    /// jobs.push(Job { priority: 1, name: "sweep" });
    /// jobs.push(Job { priority: 9, name: "alert" });
    ///
    /// assert_eq!(jobs.pop().name, "alert");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        assert!(size_of::<T>() > 0, "HeapQueue must have non-zero item size");

        Self {
            items: Vec::new(),
            comparator,
        }
    }

    /// The number of elements in the queue.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heap_queue::HeapQueue;
    ///
    /// let mut queue = HeapQueue::new();
    /// assert_eq!(queue.len(), 0);
    ///
    /// queue.push(1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[must_use]
    #[cfg_attr(test, mutants::skip)] // Can be mutated to infinitely growing memory use and/or infinite loop.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the highest-ranked element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heap_queue::HeapQueue;
    ///
    /// let mut queue = HeapQueue::new();
    /// queue.push(4);
    /// queue.push(8);
    ///
    /// assert_eq!(*queue.top(), 8);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    pub fn top(&self) -> &T {
        self.items.first().expect("top() called on an empty queue")
    }

    /// Inserts an element, keeping the heap shape.
    ///
    /// O(log n): the element is appended and sifted up while its parent
    /// ranks strictly lower.
    pub fn push(&mut self, value: T) {
        let mut index = self.items.len();
        self.items.push(value);

        while index > 0 {
            let parent = parent_of(index);

            if self.comparator.compare(&self.items[parent], &self.items[index])
                == Ordering::Less
            {
                self.items.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Removes and returns the highest-ranked element.
    ///
    /// O(log n): the root is swapped with the last element, the array is
    /// shrunk, and the new root is sifted down while either child ranks
    /// strictly higher.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heap_queue::HeapQueue;
    ///
    /// let mut queue = HeapQueue::new();
    /// queue.push(2);
    /// queue.push(6);
    ///
    /// assert_eq!(queue.pop(), 6);
    /// assert_eq!(queue.pop(), 2);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.items.is_empty(), "pop() called on an empty queue");

        // Cannot underflow: guarded by the emptiness assertion above.
        let last = self.items.len().wrapping_sub(1);
        self.items.swap(0, last);

        let value = self
            .items
            .pop()
            .expect("guarded by the emptiness assertion above");

        self.sift_down();

        value
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Restores the heap shape from the root downward after a pop.
    fn sift_down(&mut self) {
        let len = self.items.len();
        let mut current = 0;

        while current < len {
            let left = left_child_of(current);
            let right = right_child_of(current);

            let mut highest = current;
            if left < len
                && self.comparator.compare(&self.items[left], &self.items[highest])
                    == Ordering::Greater
            {
                highest = left;
            }

            if right < len
                && self.comparator.compare(&self.items[right], &self.items[highest])
                    == Ordering::Greater
            {
                highest = right;
            }

            if highest == current {
                break;
            }

            self.items.swap(current, highest);
            current = highest;
        }
    }
}

impl<T> Default for HeapQueue<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for HeapQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapQueue")
            .field("len", &self.items.len())
            .finish()
    }
}

/// Index of the parent of a non-root heap index.
#[expect(
    clippy::integer_division,
    reason = "heap index arithmetic rounds down on purpose"
)]
fn parent_of(index: usize) -> usize {
    index.wrapping_sub(1) / 2
}

fn left_child_of(index: usize) -> usize {
    // Cannot overflow for any index reachable through a Vec.
    index.wrapping_mul(2).wrapping_add(1)
}

fn right_child_of(index: usize) -> usize {
    // Cannot overflow for any index reachable through a Vec.
    index.wrapping_mul(2).wrapping_add(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small deterministic pseudo-random sequence, enough to shuffle
    /// inputs without pulling in a randomness dependency.
    fn scrambled(count: u32) -> Vec<u32> {
        let mut state: u32 = 0x2545_f491;
        (0..count)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                state >> 16
            })
            .collect()
    }

    #[test]
    fn smoke_test() {
        let mut queue = HeapQueue::new();

        queue.push(3);
        queue.push(1);
        queue.push(2);

        assert_eq!(queue.len(), 3);
        assert_eq!(*queue.top(), 3);
        assert_eq!(queue.pop(), 3);
        assert_eq!(queue.pop(), 2);
        assert_eq!(queue.pop(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn push_all_pop_all_sorts_descending() {
        let values = scrambled(1_000);

        let mut queue = HeapQueue::new();
        for &value in &values {
            queue.push(value);
        }

        let mut drained = Vec::with_capacity(values.len());
        while !queue.is_empty() {
            drained.push(queue.pop());
        }

        let mut expected = values;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(drained, expected);
    }

    #[test]
    fn pop_always_returns_the_current_maximum() {
        let values = scrambled(200);
        let mut queue = HeapQueue::new();
        let mut mirror: Vec<u32> = Vec::new();

        for (round, &value) in values.iter().enumerate() {
            queue.push(value);
            mirror.push(value);

            // Pop on every third round to interleave with pushes.
            if round % 3 == 2 {
                let expected_index = mirror
                    .iter()
                    .enumerate()
                    .max_by_key(|&(_, &v)| v)
                    .map(|(i, _)| i)
                    .expect("mirror is non-empty after a push");
                let expected = mirror.swap_remove(expected_index);

                assert_eq!(queue.pop(), expected);
            }
        }
    }

    #[test]
    fn top_tracks_the_maximum_across_pushes() {
        let mut queue = HeapQueue::new();
        let mut maximum = 0;

        for value in scrambled(100) {
            queue.push(value);
            maximum = maximum.max(value);
            assert_eq!(*queue.top(), maximum);
        }
    }

    #[test]
    fn comparator_inverts_the_order() {
        let mut queue = HeapQueue::with_comparator(|a: &u32, b: &u32| b.cmp(a));

        for value in [5, 1, 4, 2, 3] {
            queue.push(value);
        }

        for expected in 1..=5 {
            assert_eq!(queue.pop(), expected);
        }
    }

    #[test]
    fn equal_ranks_all_come_out() {
        struct Job {
            priority: u8,
            id: u32,
        }

        let mut queue =
            HeapQueue::with_comparator(|a: &Job, b: &Job| a.priority.cmp(&b.priority));

        for id in 0..10 {
            queue.push(Job { priority: 3, id });
        }
        queue.push(Job { priority: 9, id: 99 });

        assert_eq!(queue.pop().id, 99);

        // Ties break arbitrarily; every tied element still comes out once.
        let mut ids: Vec<u32> = (0..10).map(|_| queue.pop().id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..10).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = HeapQueue::new();
        queue.push(1);
        queue.push(2);

        queue.clear();
        assert!(queue.is_empty());

        queue.push(7);
        assert_eq!(*queue.top(), 7);
    }

    #[test]
    #[should_panic]
    fn panic_when_pop_on_empty() {
        let mut queue = HeapQueue::<u32>::new();
        _ = queue.pop();
    }

    #[test]
    #[should_panic]
    fn panic_when_top_on_empty() {
        let queue = HeapQueue::<u32>::new();
        _ = queue.top();
    }
}
