use crate::BlockDeque;

/// A first-in-first-out adapter over a [`BlockDeque`].
///
/// Elements enter at the back and leave from the front; all operations pass
/// straight through to the deque, so the performance and panic behavior are
/// exactly those of the deque.
///
/// # Example
///
/// ```rust
/// use block_deque::Queue;
///
/// let mut queue = Queue::new();
///
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(*queue.front(), 1);
/// assert_eq!(queue.pop(), 1);
/// assert_eq!(queue.pop(), 2);
/// ```
#[derive(Debug)]
pub struct Queue<T> {
    items: BlockDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new [`Queue`] with the default deque configuration.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: BlockDeque::new(),
        }
    }

    /// The number of elements in the queue.
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

    /// Inserts an element at the back of the queue.
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.is_empty(), "pop() called on an empty queue");
        self.items.pop_front()
    }

    /// Returns the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front() called on an empty queue");
        self.items.front()
    }

    /// Returns the back element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[must_use]
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back() called on an empty queue");
        self.items.back()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
