use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A binary-heap-backed min-priority queue with a deterministic tie-break:
/// items of equal priority pop in insertion order.
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

struct Entry<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both fields: the std heap is a max-heap, so its
        // "greatest" entry must be the lowest-priority, earliest-pushed one.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, priority: u32, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_single() {
        let mut pq = PriorityQueue::new();
        pq.push(10, "hello");
        assert_eq!(pq.pop_min(), Some("hello"));
        assert_eq!(pq.pop_min(), None);
    }

    #[test]
    fn test_push_pop_ordered() {
        let mut pq = PriorityQueue::new();
        pq.push(10, "low");
        pq.push(5, "lower");
        pq.push(15, "high");

        assert_eq!(pq.pop_min(), Some("lower"));
        assert_eq!(pq.pop_min(), Some("low"));
        assert_eq!(pq.pop_min(), Some("high"));
        assert_eq!(pq.pop_min(), None);
    }

    #[test]
    fn test_push_pop_same_priority() {
        let mut pq = PriorityQueue::new();
        pq.push(10, "first");
        pq.push(10, "second");
        pq.push(10, "third");

        assert_eq!(pq.pop_min(), Some("first"));
        assert_eq!(pq.pop_min(), Some("second"));
        assert_eq!(pq.pop_min(), Some("third"));
        assert_eq!(pq.pop_min(), None);
    }

    #[test]
    fn test_push_pop_mixed() {
        let mut pq = PriorityQueue::new();
        pq.push(100, "a");
        pq.push(50, "b");
        assert_eq!(pq.pop_min(), Some("b"));
        pq.push(25, "c");
        pq.push(75, "d");
        assert_eq!(pq.pop_min(), Some("c"));
        assert_eq!(pq.pop_min(), Some("d"));
        assert_eq!(pq.pop_min(), Some("a"));
    }

    #[test]
    fn test_ties_interleaved_with_other_priorities() {
        let mut pq = PriorityQueue::new();
        pq.push(7, "tie_a");
        pq.push(3, "small");
        pq.push(7, "tie_b");
        pq.push(9, "big");
        pq.push(7, "tie_c");

        assert_eq!(pq.pop_min(), Some("small"));
        assert_eq!(pq.pop_min(), Some("tie_a"));
        assert_eq!(pq.pop_min(), Some("tie_b"));
        assert_eq!(pq.pop_min(), Some("tie_c"));
        assert_eq!(pq.pop_min(), Some("big"));
    }

    #[test]
    fn test_empty_queue() {
        let mut pq: PriorityQueue<i32> = PriorityQueue::new();
        assert_eq!(pq.pop_min(), None);
    }
}
