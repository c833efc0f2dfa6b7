//! Bounded decoded-text history
//!
//! Holds resolved characters and inserted word spaces. When full, the
//! oldest character shifts out so the display always shows the most
//! recent text.

use std::collections::VecDeque;

/// Default number of characters kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct History {
    chars: VecDeque<char>,
    capacity: usize,
}

impl History {
    /// Create a history holding up to `capacity` characters (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            chars: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a character, shifting out the oldest when full
    pub fn push(&mut self, character: char) {
        while self.chars.len() >= self.capacity {
            self.chars.pop_front();
        }
        self.chars.push_back(character);
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
