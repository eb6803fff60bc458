use crate::models::Pair;

/// Where a qualifying candidate landed and what it cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Index the candidate now occupies
    pub slot: usize,
    /// Entries moved one slot to the right, including one pushed off the end
    pub shifts: u64,
}

/// A sorted buffer that never holds more than `capacity` pairs
///
/// The occupied prefix is the backing `Vec` itself, so there are no
/// placeholder slots and a real zero-distance pair is never confused with
/// an empty one. Entries stay sorted ascending by distance and pairs with
/// equal distance keep their arrival order.
#[derive(Debug, Clone)]
pub struct BoundedBuffer {
    slots: Vec<Pair>,
    capacity: usize,
}

impl BoundedBuffer {
    /// Creates an empty buffer that will keep at most `capacity` pairs
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Reserves room for `additional` pairs without exceeding the capacity
    pub fn reserve(&mut self, additional: usize) {
        let room = self.capacity.saturating_sub(self.slots.len());
        self.slots.reserve(additional.min(room));
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.slots
    }

    /// Offers a candidate to the buffer
    ///
    /// While the buffer has free slots every candidate is accepted. Once it
    /// is full a candidate must be strictly closer than the current last
    /// entry; ties lose to the pair that arrived first. Accepted candidates
    /// are placed after every entry whose distance is less than or equal to
    /// theirs, displacing the larger ones one slot to the right.
    ///
    /// # Returns
    /// - `Some(Insertion)`: the candidate was stored
    /// - `None`: the candidate did not rank within the capacity
    pub fn offer(&mut self, candidate: Pair) -> Option<Insertion> {
        if self.capacity == 0 {
            return None;
        }

        let full = self.is_full();
        if full {
            let last = self.slots.last()?;
            if candidate.distance >= last.distance {
                return None;
            }
        }

        let mut slot = self.slots.len();
        while slot > 0 && self.slots[slot - 1].distance > candidate.distance {
            slot -= 1;
        }
        let shifts = crate::conv_num!(u64, self.slots.len() - slot, u64::MAX);

        if full {
            self.slots.pop();
        }
        self.slots.insert(slot, candidate);

        Some(Insertion { slot, shifts })
    }

    /// Consumes the buffer, returning the occupied prefix
    pub fn into_pairs(self) -> Vec<Pair> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn pair(distance: u64, tag: i32) -> Pair {
        Pair::new(distance, Point::new(tag, 0), Point::new(tag, 1))
    }

    fn distances(buffer: &BoundedBuffer) -> Vec<u64> {
        buffer.as_slice().iter().map(|p| p.distance).collect()
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut buffer = BoundedBuffer::new(0);
        assert_eq!(buffer.offer(pair(0, 0)), None);
        assert!(buffer.is_empty());
        assert!(buffer.is_full());
    }

    #[test]
    fn fills_in_sorted_order_while_not_full() {
        let mut buffer = BoundedBuffer::new(4);
        assert_eq!(buffer.offer(pair(5, 0)), Some(Insertion { slot: 0, shifts: 0 }));
        assert_eq!(buffer.offer(pair(3, 1)), Some(Insertion { slot: 0, shifts: 1 }));
        assert_eq!(buffer.offer(pair(9, 2)), Some(Insertion { slot: 2, shifts: 0 }));
        assert_eq!(buffer.offer(pair(4, 3)), Some(Insertion { slot: 1, shifts: 2 }));
        assert_eq!(distances(&buffer), vec![3, 4, 5, 9]);
        assert!(buffer.is_full());
    }

    #[test]
    fn full_buffer_drops_the_largest_and_counts_the_drop_as_a_shift() {
        let mut buffer = BoundedBuffer::new(3);
        for (i, d) in [2, 4, 6].into_iter().enumerate() {
            buffer.offer(pair(d, i as i32));
        }

        assert_eq!(buffer.offer(pair(1, 9)), Some(Insertion { slot: 0, shifts: 3 }));
        assert_eq!(distances(&buffer), vec![1, 2, 4]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn ties_do_not_displace_earlier_pairs_once_full() {
        let mut buffer = BoundedBuffer::new(2);
        buffer.offer(pair(1, 0));
        buffer.offer(pair(2, 1));

        assert_eq!(buffer.offer(pair(2, 2)), None);
        assert_eq!(buffer.as_slice()[1], pair(2, 1));
    }

    #[test]
    fn ties_land_after_existing_equal_entries() {
        let mut buffer = BoundedBuffer::new(4);
        buffer.offer(pair(1, 0));
        buffer.offer(pair(3, 1));

        assert_eq!(buffer.offer(pair(1, 2)), Some(Insertion { slot: 1, shifts: 1 }));
        assert_eq!(buffer.as_slice()[0], pair(1, 0));
        assert_eq!(buffer.as_slice()[1], pair(1, 2));
    }

    #[test]
    fn zero_distance_pairs_are_real_entries() {
        let mut buffer = BoundedBuffer::new(2);
        buffer.offer(pair(0, 0));
        buffer.offer(pair(0, 1));

        assert_eq!(buffer.offer(pair(0, 2)), None);
        assert_eq!(distances(&buffer), vec![0, 0]);
    }

    #[test]
    fn reserving_extra_room_does_not_raise_the_capacity() {
        let mut buffer = BoundedBuffer::new(3);
        buffer.reserve(1_000_000);
        assert!(buffer.is_empty());

        for (i, d) in [9, 7, 5, 3].into_iter().enumerate() {
            buffer.offer(pair(d, i as i32));
        }
        assert_eq!(distances(&buffer), vec![3, 5, 7]);
    }
}
