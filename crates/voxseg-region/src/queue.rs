//! Downhill bucket priority queue
//!
//! Priorities are small non-negative integers (voxel intensities), so the
//! queue keeps one FIFO bucket per value plus a cursor on the highest
//! non-empty bucket. Push and pop are O(1) amortized: while the queue is
//! used downhill (no push above the value last popped) the cursor only
//! moves down, crossing the value range at most once per run.
//!
//! Entries of equal priority come out in insertion order.

use std::collections::VecDeque;

/// A bucket queue yielding entries in descending priority order
#[derive(Debug, Clone)]
pub struct DownhillQueue<T> {
    buckets: Vec<VecDeque<T>>,
    /// Highest bucket that may be non-empty
    cursor: usize,
    len: usize,
}

impl<T> DownhillQueue<T> {
    /// Create a queue accepting priorities `0..=max_priority`
    pub fn new(max_priority: usize) -> Self {
        Self {
            buckets: (0..=max_priority).map(|_| VecDeque::new()).collect(),
            cursor: 0,
            len: 0,
        }
    }

    /// Largest accepted priority
    #[inline]
    pub fn max_priority(&self) -> usize {
        self.buckets.len() - 1
    }

    /// Number of queued entries
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is queued
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Queue `item` at `priority`, clamped to [`DownhillQueue::max_priority`]
    #[inline]
    pub fn push(&mut self, priority: usize, item: T) {
        let priority = priority.min(self.max_priority());
        self.buckets[priority].push_back(item);
        self.len += 1;
        if priority > self.cursor {
            self.cursor = priority;
        }
    }

    /// Remove the oldest entry of the highest priority
    pub fn pop(&mut self) -> Option<(usize, T)> {
        if self.len == 0 {
            return None;
        }
        while self.buckets[self.cursor].is_empty() {
            // len > 0 guarantees a non-empty bucket at or below the cursor
            self.cursor -= 1;
        }
        let item = self.buckets[self.cursor].pop_front()?;
        self.len -= 1;
        Some((self.cursor, item))
    }

    /// Priority of the next entry without removing it
    pub fn peek_priority(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        (0..=self.cursor).rev().find(|&p| !self.buckets[p].is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_order() {
        let mut queue = DownhillQueue::new(255);
        assert!(queue.is_empty());

        queue.push(100, 'a');
        queue.push(50, 'b');
        queue.push(200, 'c');

        assert_eq!(queue.peek_priority(), Some(200));
        assert_eq!(queue.pop(), Some((200, 'c')));
        assert_eq!(queue.pop(), Some((100, 'a')));
        assert_eq!(queue.pop(), Some((50, 'b')));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = DownhillQueue::new(10);
        queue.push(5, 1);
        queue.push(5, 2);
        queue.push(5, 3);
        assert_eq!(queue.pop(), Some((5, 1)));
        queue.push(5, 4);
        assert_eq!(queue.pop(), Some((5, 2)));
        assert_eq!(queue.pop(), Some((5, 3)));
        assert_eq!(queue.pop(), Some((5, 4)));
    }

    #[test]
    fn test_push_above_cursor_after_pop() {
        let mut queue = DownhillQueue::new(10);
        queue.push(3, 'a');
        assert_eq!(queue.pop(), Some((3, 'a')));
        queue.push(7, 'b');
        queue.push(0, 'c');
        assert_eq!(queue.pop(), Some((7, 'b')));
        assert_eq!(queue.pop(), Some((0, 'c')));
    }

    #[test]
    fn test_priority_clamped() {
        let mut queue = DownhillQueue::new(3);
        queue.push(99, 'x');
        assert_eq!(queue.pop(), Some((3, 'x')));
    }
}
