//! FIFO ring buffers backing the buffering stages.
//!
//! `RingBuffer` is fixed-capacity and is used as the shuffle reservoir;
//! `GrowingRingBuffer` backs the output queue of the pump-based stages.

/// Fixed-capacity FIFO buffer over a circular slot array.
pub struct RingBuffer<T> {
    data: Vec<Option<T>>,
    capacity: usize,
    begin: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create a buffer holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring buffer capacity must be positive");
        Self {
            data: (0..capacity).map(|_| None).collect(),
            capacity,
            begin: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    fn slot(&self, index: usize) -> usize {
        (self.begin + index) % self.capacity
    }

    /// Append a value at the back.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full; callers check `is_full` first.
    pub fn push(&mut self, value: T) {
        assert!(!self.is_full(), "push onto a full ring buffer");
        let slot = self.slot(self.len);
        self.data[slot] = Some(value);
        self.len += 1;
    }

    /// Remove and return the oldest value, or `None` when empty.
    pub fn shift(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.data[self.begin].take();
        self.begin = (self.begin + 1) % self.capacity;
        self.len -= 1;
        value
    }

    /// Remove the value at logical `index`, backfilling the vacated slot
    /// with the most recently pushed value so that a following `push`
    /// restores full occupancy. Order of the survivors is not preserved.
    pub fn excise(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        let value = self.data[slot].take();
        let last = self.slot(self.len - 1);
        if slot != last {
            self.data[slot] = self.data[last].take();
        }
        self.len -= 1;
        value
    }
}

const GROWING_INITIAL_CAPACITY: usize = 32;

/// FIFO buffer that doubles its capacity instead of rejecting a push.
pub struct GrowingRingBuffer<T> {
    inner: RingBuffer<T>,
}

impl<T> GrowingRingBuffer<T> {
    pub fn new() -> Self {
        Self {
            inner: RingBuffer::new(GROWING_INITIAL_CAPACITY),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn push(&mut self, value: T) {
        if self.inner.is_full() {
            self.expand();
        }
        self.inner.push(value);
    }

    pub fn shift(&mut self) -> Option<T> {
        self.inner.shift()
    }

    fn expand(&mut self) {
        let mut expanded = RingBuffer::new(self.inner.capacity() * 2);
        while let Some(value) = self.inner.shift() {
            expanded.push(value);
        }
        self.inner = expanded;
    }
}

impl<T> Default for GrowingRingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
