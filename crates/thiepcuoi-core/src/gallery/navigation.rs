//! Shared lightbox position.

use tokio::sync::watch;

/// Step direction for lightbox navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// `(current + offset) mod count`, wrapping in both directions.
///
/// Returns 0 for an empty list.
pub fn wrap_index(current: usize, offset: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let count = count as isize;
    (current as isize + offset).rem_euclid(count) as usize
}

/// Current lightbox index, observable through a watch channel.
#[derive(Debug)]
pub struct NavigationState {
    tx: watch::Sender<usize>,
}

impl NavigationState {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub fn current(&self) -> usize {
        *self.tx.borrow()
    }

    pub fn set(&self, index: usize) {
        self.tx.send_replace(index);
    }

    /// Move one step and return the new index.
    pub fn step(&self, direction: Direction, count: usize) -> usize {
        let next = wrap_index(self.current(), direction.offset(), count);
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.tx.subscribe()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
