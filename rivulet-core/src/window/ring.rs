//! Fixed-capacity circular buffer over the most recent samples.

/// Holds the last `capacity` values pushed into it, overwriting the oldest
/// slot on every write once full.
///
/// Reads are indexed most-recent-first: `at(0)` is the latest value,
/// `at(capacity - 1)` the oldest. Weighted-window stages lean on this to
/// pair each sample with a position-dependent weight.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    slots: Vec<T>,
    capacity: usize,
    head: usize,
}

impl<T: Copy> Ring<T> {
    /// Creates a ring holding the last `capacity` values. A zero capacity
    /// is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        }
    }

    /// Pushes a value, overwriting the oldest slot when the ring is full.
    /// Always succeeds.
    pub fn put(&mut self, value: T) {
        if self.slots.len() < self.capacity {
            self.slots.push(value);
        } else {
            self.slots[self.head] = value;
        }
        self.head = (self.head + 1) % self.capacity;
    }

    /// Returns the value `index` positions back from the most recent one,
    /// or `None` if that position has not been written yet.
    pub fn at(&self, index: usize) -> Option<T> {
        if index >= self.slots.len() {
            return None;
        }
        let slot = (self.head + self.capacity - 1 - index) % self.capacity;
        Some(self.slots[slot])
    }

    /// Iterates the written values most-recent-first. Yields exactly
    /// [`len`](Ring::len) items, so a full ring walks the whole window.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.slots.len()).map(move |index| {
            let slot = (self.head + self.capacity - 1 - index) % self.capacity;
            self.slots[slot]
        })
    }

    /// True once `capacity` values have been written.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Number of values written so far, saturating at the capacity.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True before the first write.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
