//! Bounded ring of previously accepted lines.

use log::debug;

/// Number of lines retained.
pub const HISTORY_SIZE: usize = 16;

/// Longest stored line in bytes. Longer lines are truncated.
pub const ENTRY_CAPACITY: usize = 127;

#[derive(Clone, Copy)]
struct Entry {
    bytes: [u8; ENTRY_CAPACITY],
    len: usize,
}

impl Entry {
    const EMPTY: Entry = Entry {
        bytes: [0; ENTRY_CAPACITY],
        len: 0,
    };

    fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Fixed-capacity line history addressed by distance from the newest entry.
///
/// Slot `n % HISTORY_SIZE` holds the `n`-th pushed line, so once more than
/// `HISTORY_SIZE` lines have been pushed the oldest is overwritten.
pub struct History {
    entries: [Entry; HISTORY_SIZE],
    /// Lines pushed so far, never decreases.
    pushed: usize,
}

impl History {
    /// An empty history.
    pub const fn new() -> Self {
        History {
            entries: [Entry::EMPTY; HISTORY_SIZE],
            pushed: 0,
        }
    }

    /// Stores a copy of `line`, truncated to [`ENTRY_CAPACITY`] bytes.
    /// Empty lines are not stored.
    pub fn push(&mut self, line: &[u8]) {
        if line.is_empty() {
            return;
        }
        let len = line.len().min(ENTRY_CAPACITY);
        let entry = &mut self.entries[self.pushed % HISTORY_SIZE];
        entry.bytes[..len].copy_from_slice(&line[..len]);
        entry.len = len;
        self.pushed += 1;
        debug!("history: stored entry #{} ({} bytes)", self.pushed, len);
    }

    /// The line `distance` steps back, 0 being the newest. `None` past the
    /// oldest retained line.
    pub fn get(&self, distance: usize) -> Option<&[u8]> {
        if distance >= self.len() {
            return None;
        }
        let slot = (self.pushed - 1 - distance) % HISTORY_SIZE;
        Some(self.entries[slot].as_bytes())
    }

    /// Number of lines currently retained.
    pub fn len(&self) -> usize {
        self.pushed.min(HISTORY_SIZE)
    }

    /// Whether nothing has been pushed yet.
    pub fn is_empty(&self) -> bool {
        self.pushed == 0
    }

    /// Number of lines pushed since creation, including evicted ones.
    pub fn total_pushed(&self) -> usize {
        self.pushed
    }

    /// Retained lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.len()).rev().filter_map(move |distance| self.get(distance))
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_history_has_nothing() {
        let h = History::new();
        assert!(h.is_empty());
        assert_eq!(h.get(0), None);
        assert_eq!(h.iter().count(), 0);
    }

    #[test]
    fn empty_lines_are_not_stored() {
        let mut h = History::new();
        h.push(b"");
        assert!(h.is_empty());
        assert_eq!(h.total_pushed(), 0);
    }

    #[test]
    fn newest_is_distance_zero() {
        let mut h = History::new();
        h.push(b"time");
        h.push(b"date");
        assert_eq!(h.get(0), Some(&b"date"[..]));
        assert_eq!(h.get(1), Some(&b"time"[..]));
        assert_eq!(h.get(2), None);
    }

    #[test]
    fn long_lines_are_truncated() {
        let mut h = History::new();
        let long = [b'x'; 200];
        h.push(&long);
        assert_eq!(h.get(0).map(<[u8]>::len), Some(ENTRY_CAPACITY));
    }

    #[test]
    fn shorter_line_does_not_leak_previous_tail() {
        let mut h = History::new();
        for i in 0..HISTORY_SIZE {
            h.push(format!("a-much-longer-line-{i}").as_bytes());
        }
        h.push(b"ls");
        assert_eq!(h.get(0), Some(&b"ls"[..]));
    }

    #[test]
    fn oldest_is_overwritten_past_capacity() {
        let mut h = History::new();
        for i in 0..=HISTORY_SIZE {
            h.push(format!("cmd{i}").as_bytes());
        }
        assert_eq!(h.len(), HISTORY_SIZE);
        assert_eq!(h.get(HISTORY_SIZE - 1), Some(&b"cmd1"[..]));
        assert_eq!(h.get(HISTORY_SIZE), None);
        let all: Vec<&[u8]> = h.iter().collect();
        assert_eq!(all.first().copied(), Some(&b"cmd1"[..]));
        assert_eq!(all.last().copied(), Some(&format!("cmd{HISTORY_SIZE}").as_bytes()[..]));
    }

    proptest! {
        #[test]
        fn get_returns_kth_from_the_end(lines in proptest::collection::vec("[a-z]{1,12}", 1..40)) {
            let mut h = History::new();
            for line in &lines {
                h.push(line.as_bytes());
            }
            let retained = lines.len().min(HISTORY_SIZE);
            prop_assert_eq!(h.len(), retained);
            for d in 0..retained {
                prop_assert_eq!(h.get(d), Some(lines[lines.len() - 1 - d].as_bytes()));
            }
            prop_assert_eq!(h.get(retained), None);
        }
    }
}
