//! FIFO Tracker Module
//!
//! Tracks insertion order for first-in-first-out cache eviction.

use std::collections::VecDeque;

// == FIFO Tracker ==
/// Tracks the order in which keys were first inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest insertion
/// - Back = Newest insertion
///
/// Reads never reorder keys. Re-inserting a tracked key keeps its position.
#[derive(Debug, Default)]
pub struct FifoTracker {
    order: VecDeque<String>,
}

impl FifoTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Insert ==
    /// Records a key as newest unless it is already tracked.
    pub fn insert(&mut self, key: &str) {
        if !self.contains(key) {
            self.order.push_back(key.to_string());
        }
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest key, or None if empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_new() {
        let fifo = FifoTracker::new();
        assert!(fifo.is_empty());
        assert_eq!(fifo.len(), 0);
    }

    #[test]
    fn test_fifo_insert_order() {
        let mut fifo = FifoTracker::new();

        fifo.insert("a");
        fifo.insert("b");
        fifo.insert("c");

        assert_eq!(fifo.len(), 3);
        assert_eq!(fifo.evict_oldest(), Some("a".to_string()));
    }

    #[test]
    fn test_fifo_reinsert_keeps_position() {
        let mut fifo = FifoTracker::new();

        fifo.insert("a");
        fifo.insert("b");
        fifo.insert("a");

        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.evict_oldest(), Some("a".to_string()));
        assert_eq!(fifo.evict_oldest(), Some("b".to_string()));
    }

    #[test]
    fn test_fifo_evict_empty() {
        let mut fifo = FifoTracker::new();
        assert_eq!(fifo.evict_oldest(), None);
    }

    #[test]
    fn test_fifo_remove() {
        let mut fifo = FifoTracker::new();

        fifo.insert("a");
        fifo.insert("b");
        fifo.insert("c");
        fifo.remove("b");
        fifo.remove("missing");

        assert_eq!(fifo.len(), 2);
        assert!(!fifo.contains("b"));
        assert_eq!(fifo.evict_oldest(), Some("a".to_string()));
        assert_eq!(fifo.evict_oldest(), Some("c".to_string()));
    }

    #[test]
    fn test_fifo_removed_key_reinserted_at_back() {
        let mut fifo = FifoTracker::new();

        fifo.insert("a");
        fifo.insert("b");
        fifo.remove("a");
        fifo.insert("a");

        assert_eq!(fifo.evict_oldest(), Some("b".to_string()));
        assert_eq!(fifo.evict_oldest(), Some("a".to_string()));
    }

    #[test]
    fn test_fifo_clear() {
        let mut fifo = FifoTracker::new();

        fifo.insert("a");
        fifo.insert("b");
        fifo.clear();

        assert!(fifo.is_empty());
        assert_eq!(fifo.evict_oldest(), None);
    }
}
