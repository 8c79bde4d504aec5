// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In memory history of submitted lines.
//!
//! # Mental model
//!
//! ```text
//! entries:  [ "ls", "pwd", "echo hi" ]      history_index: 0..=3
//!              0      1        2     3  <- the "fresh line" slot (not an entry)
//! ```
//!
//! - When nothing is being browsed, `history_index == len` (the fresh line slot).
//! - Scrolling up from the fresh line slot parks whatever is in the [`LineBuffer`] as
//!   a *temp entry* at the end of `entries`, and sets `temp_stored`. Scrolling back
//!   down to it restores the unfinished line verbatim. Edits made to that line while it
//!   is on screen are captured again on the next scroll up.
//! - The temp entry is dropped (or replaced by the real line) on the next
//!   [`HistoryStore::commit`].
//!
//! Nothing here renders anything. Recalled text is handed to [`LineBuffer::load`],
//! which takes care of the screen.

use crate::{Bell, LineBuffer, ReaderConfig, ok};
use std::{collections::VecDeque,
          io::{self, Write}};

/// Characters that [`HistoryStore::commit`] strips from both ends of a line.
pub const HISTORY_TRIM_CHARS: [char; 6] = [' ', '\t', '\x0C', '\x0B', '\n', '\r'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    /// Oldest first.
    entries: VecDeque<String>,
    history_index: usize,
    temp_stored: bool,
    max_entries: usize,
}

impl HistoryStore {
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            history_index: 0,
            temp_stored: false,
            max_entries: max_entries.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &ReaderConfig) -> Self {
        Self::new(config.history_max_entries.get())
    }

    /// Oldest first.
    #[must_use]
    pub fn entries(&self) -> &VecDeque<String> { &self.entries }

    /// Includes the temp entry, if there is one.
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn history_index(&self) -> usize { self.history_index }

    #[must_use]
    pub fn is_temp_stored(&self) -> bool { self.temp_stored }

    /// `true` when no entry is being browsed and the fresh line slot is showing.
    #[must_use]
    pub fn is_at_fresh_line(&self) -> bool {
        !self.temp_stored && self.history_index == self.entries.len()
    }
}

impl HistoryStore {
    /// Adds a submitted line to the history.
    ///
    /// 1. Whitespace is removed from both ends of `raw_line`.
    /// 2. A non empty result replaces the temp entry if there is one, and is appended
    ///    otherwise. An empty result adds nothing, but the temp entry is still dropped.
    /// 3. The oldest entry is evicted if the history grew past its limit.
    /// 4. `history_index` points at the fresh line slot again.
    ///
    /// Returns the trimmed line that was added, or [`None`] if it was empty.
    pub fn commit(&mut self, raw_line: &str) -> Option<&str> {
        let trimmed = raw_line.trim_matches(HISTORY_TRIM_CHARS.as_slice());

        if self.temp_stored {
            self.entries.pop_back();
            self.temp_stored = false;
        }

        let added = if trimmed.is_empty() {
            false
        } else {
            self.entries.push_back(trimmed.to_string());
            if self.entries.len() > self.max_entries {
                // Remove oldest entry.
                self.entries.pop_front();
            }
            true
        };

        self.history_index = self.entries.len();

        tracing::debug!(
            message = "history commit",
            added,
            len = self.entries.len()
        );

        if added {
            self.entries.back().map(String::as_str)
        } else {
            None
        }
    }

    /// Stops browsing: the temp entry (if any) is dropped and the fresh line slot is
    /// showing again. Called when a new session starts with an empty line, since the
    /// unfinished text that was parked belonged to the old one.
    pub fn return_to_fresh_line(&mut self) {
        if self.temp_stored {
            self.entries.pop_back();
            self.temp_stored = false;
        }
        self.history_index = self.entries.len();
    }

    /// Moves `history_index` to `target` and shows that entry in `line`.
    ///
    /// Moving up (`target < history_index`):
    /// 1. `target` is clamped to 0.
    /// 2. Already at the oldest entry? The bell rings and nothing changes.
    /// 3. On the fresh line slot, the current line is saved as the temp entry (as is,
    ///    spaces and all). When the temp entry itself is showing, it is overwritten with
    ///    the current line, so edits to it are not lost.
    ///
    /// Moving down (`target > history_index`):
    /// 1. `target` is clamped to the last entry.
    /// 2. Already at the bottom (the fresh line slot, or the temp entry)? The bell rings
    ///    and nothing changes.
    ///
    /// Asking to move to where the index already is does nothing, without ringing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn navigate(
        &mut self,
        target: isize,
        line: &mut LineBuffer,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
    ) -> io::Result<bool> {
        let current = isize::try_from(self.history_index).unwrap_or(isize::MAX);

        let target = match target.cmp(&current) {
            std::cmp::Ordering::Equal => return ok!(false),
            // Going up.
            std::cmp::Ordering::Less => {
                if self.history_index == 0 {
                    tracing::debug!(message = "already at oldest history entry");
                    bell.ring();
                    return ok!(false);
                }
                if self.is_at_fresh_line() {
                    self.entries.push_back(line.as_string());
                    self.temp_stored = true;
                } else if self.temp_stored
                    && self.history_index == self.entries.len() - 1
                    && let Some(temp_entry) = self.entries.back_mut()
                {
                    *temp_entry = line.as_string();
                }
                usize::try_from(target).unwrap_or(0)
            }
            // Going down.
            std::cmp::Ordering::Greater => {
                if self.is_at_bottom() {
                    tracing::debug!(message = "already at newest history entry");
                    bell.ring();
                    return ok!(false);
                }
                usize::try_from(target)
                    .unwrap_or(usize::MAX)
                    .min(self.entries.len() - 1)
            }
        };

        self.history_index = target;
        line.load(&self.entries[target], term)?;

        tracing::debug!(
            message = "history navigate",
            history_index = self.history_index,
            temp_stored = self.temp_stored
        );

        ok!(true)
    }

    /// The lowest position that can be scrolled to: the temp entry if there is one,
    /// otherwise the fresh line slot.
    fn is_at_bottom(&self) -> bool {
        if self.temp_stored {
            self.history_index + 1 == self.entries.len()
        } else {
            self.history_index == self.entries.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BellMock, StdoutMock};
    use pretty_assertions::assert_eq;
    use std::num::NonZeroUsize;
    use test_case::test_case;

    fn history_with(lines: &[&str]) -> HistoryStore {
        let mut history = HistoryStore::new(100);
        for line in lines {
            history.commit(line);
        }
        history
    }

    fn type_text(line: &mut LineBuffer, text: &str) {
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        for ch in text.chars() {
            line.insert(ch, NonZeroUsize::MIN, &mut stdout_mock, &mut bell)
                .unwrap();
        }
    }

    #[test]
    fn test_commit_trims_and_appends() {
        let mut history = HistoryStore::new(10);

        assert_eq!(history.commit("  ls -l \t"), Some("ls -l"));

        assert_eq!(history.entries(), &["ls -l".to_string()]);
        assert_eq!(history.history_index(), 1);
        assert!(history.is_at_fresh_line());
    }

    #[test_case("" ; "empty")]
    #[test_case("   " ; "spaces")]
    #[test_case(" \t \r\n" ; "mixed whitespace")]
    fn test_commit_blank_line_adds_nothing(raw: &str) {
        let mut history = history_with(&["ls", "pwd"]);

        assert_eq!(history.commit(raw), None);

        assert_eq!(history.len(), 2);
        assert_eq!(history.history_index(), 2);
    }

    #[test]
    fn test_commit_replaces_temp_entry() {
        let mut history = history_with(&["ls", "pwd"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "echo hi");

        history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap();
        assert!(history.is_temp_stored());
        assert_eq!(history.len(), 3);

        history.commit("pwd");

        assert_eq!(
            history.entries(),
            &["ls".to_string(), "pwd".to_string(), "pwd".to_string()]
        );
        assert!(!history.is_temp_stored());
        assert_eq!(history.history_index(), 3);
    }

    #[test]
    fn test_commit_blank_line_drops_temp_entry() {
        let mut history = history_with(&["ls"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "half typed");

        history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap();
        assert_eq!(history.len(), 2);

        assert_eq!(history.commit("  "), None);

        assert_eq!(history.entries(), &["ls".to_string()]);
        assert!(!history.is_temp_stored());
        assert_eq!(history.history_index(), 1);
    }

    #[test]
    fn test_commit_evicts_oldest_past_limit() {
        let mut history = HistoryStore::new(2);
        history.commit("one");
        history.commit("two");
        history.commit("three");

        assert_eq!(
            history.entries(),
            &["two".to_string(), "three".to_string()]
        );
        assert_eq!(history.history_index(), 2);
    }

    #[test]
    fn test_commit_over_temp_entry_at_limit_evicts_oldest() {
        let mut history = HistoryStore::new(2);
        history.commit("a");
        history.commit("b");
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "x");

        // Up parks "x" as the temp entry, so there are briefly 3 entries.
        history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap();
        assert_eq!(history.len(), 3);
        history.navigate(2, &mut line, &mut stdout_mock, &mut bell).unwrap();
        assert_eq!(line.as_string(), "x");

        assert_eq!(history.commit("y"), Some("y"));

        assert_eq!(history.entries(), &["b".to_string(), "y".to_string()]);
        assert_eq!(history.history_index(), 2);
        assert!(!history.is_temp_stored());
        assert_eq!(bell.count(), 0);
    }

    #[test]
    fn test_navigate_up_on_empty_history_rings() {
        let mut history = HistoryStore::new(10);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        let moved = history.navigate(-1, &mut line, &mut stdout_mock, &mut bell).unwrap();

        assert!(!moved);
        assert_eq!(bell.count(), 1);
        assert!(history.is_empty());
        assert!(!history.is_temp_stored());
    }

    #[test]
    fn test_navigate_down_from_fresh_line_rings() {
        let mut history = history_with(&["ls"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        let moved = history.navigate(2, &mut line, &mut stdout_mock, &mut bell).unwrap();

        assert!(!moved);
        assert_eq!(bell.count(), 1);
        assert_eq!(history.history_index(), 1);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[test]
    fn test_navigate_to_same_index_is_noop() {
        let mut history = history_with(&["ls"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        let moved = history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap();

        assert!(!moved);
        assert_eq!(bell.count(), 0);
    }

    #[test]
    fn test_temp_slot_round_trip() {
        let mut history = history_with(&["ls", "pwd"]);
        let mut line = LineBuffer::new("cmd> ", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "echo hi");

        // Up: temp entry is created.
        assert!(history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(history.history_index(), 1);
        assert_eq!(line.as_string(), "pwd");
        assert_eq!(
            history.entries(),
            &["ls".to_string(), "pwd".to_string(), "echo hi".to_string()]
        );
        assert!(history.is_temp_stored());

        // Up again: no alert.
        assert!(history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(history.history_index(), 0);
        assert_eq!(line.as_string(), "ls");
        assert_eq!(bell.count(), 0);

        // Down twice: back to the unfinished line.
        assert!(history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(line.as_string(), "pwd");
        assert!(history.navigate(2, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(history.history_index(), 2);
        assert_eq!(line.as_string(), "echo hi");
        assert_eq!(line.cursor(), 7);

        // The temp entry was only added once.
        assert_eq!(history.len(), 3);

        // One more down is the bottom.
        assert!(!history.navigate(3, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(bell.count(), 1);
    }

    #[test]
    fn test_edits_to_temp_entry_are_captured_on_next_scroll_up() {
        let mut history = history_with(&["ls"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "git");

        history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap();
        history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap();
        assert_eq!(line.as_string(), "git");

        type_text(&mut line, " status");
        history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap();

        assert_eq!(history.entries(), &["ls".to_string(), "git status".to_string()]);
        history.navigate(1, &mut line, &mut stdout_mock, &mut bell).unwrap();
        assert_eq!(line.as_string(), "git status");
    }

    #[test]
    fn test_temp_entry_keeps_surrounding_spaces() {
        let mut history = history_with(&["ls"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "  cd ");

        history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap();

        assert_eq!(history.entries()[1], "  cd ");
    }

    #[test]
    fn test_navigate_clamps_page_jumps() {
        let mut history = history_with(&["a", "b", "c", "d", "e"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        // Page up past the oldest entry lands on it.
        assert!(history.navigate(5 - 10, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(history.history_index(), 0);
        assert_eq!(line.as_string(), "a");

        // Page down past the newest entry lands on the temp entry.
        assert!(history.navigate(10, &mut line, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(history.history_index(), 5);
        assert_eq!(line.as_string(), "");
        assert_eq!(bell.count(), 0);
    }

    #[test]
    fn test_navigate_redraws_through_line_buffer() {
        let mut history = history_with(&["pwd"]);
        let mut line = LineBuffer::new("cmd> ", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "ab");

        history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x08\x08  \x08\x08pwd"
        );
    }

    #[test]
    fn test_return_to_fresh_line_drops_temp_entry() {
        let mut history = history_with(&["ls"]);
        let mut line = LineBuffer::new("", 64);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();
        type_text(&mut line, "unfinished");
        history.navigate(0, &mut line, &mut stdout_mock, &mut bell).unwrap();

        history.return_to_fresh_line();

        assert_eq!(history.entries(), &["ls".to_string()]);
        assert!(history.is_at_fresh_line());
    }
}
