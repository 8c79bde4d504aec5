// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineBuffer;
use crate::{Bell, ok};
use std::{io::{self, Write},
          iter::repeat_n,
          num::NonZeroUsize};

impl LineBuffer {
    /// Inserts `count` copies of `ch` at the cursor. The rest of the line shifts right,
    /// and the cursor ends up after the inserted characters.
    ///
    /// If the line would grow past [`Self::max_len`], the bell rings and nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn insert(
        &mut self,
        ch: char,
        count: NonZeroUsize,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
    ) -> io::Result<bool> {
        let count = count.get();

        if self.len().saturating_add(count) > self.max_len {
            tracing::debug!(
                message = "line is full, insert rejected",
                len = self.len(),
                count,
                max_len = self.max_len
            );
            bell.ring();
            return ok!(false);
        }

        let drawn_cursor = self.cursor;
        self.chars.insert_many(self.cursor, repeat_n(ch, count));
        self.cursor += count;
        self.repaint(term, drawn_cursor, self.len())?;

        ok!(true)
    }

    /// Deletes the character under the cursor. The rest of the line shifts left and the
    /// cursor stays put. If the cursor is at the end of the line there is nothing to
    /// delete, so the bell rings and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn delete(&mut self, term: &mut dyn Write, bell: &mut dyn Bell) -> io::Result<bool> {
        if self.cursor >= self.len() {
            bell.ring();
            return ok!(false);
        }

        let drawn_len = self.len();
        self.chars.remove(self.cursor);
        self.repaint(term, self.cursor, drawn_len)?;

        ok!(true)
    }

    /// Replaces the line on screen with `text` and puts the cursor at its end. This is
    /// how [`crate::HistoryStore`] shows a recalled entry. Text longer than
    /// [`Self::max_len`] is cut short.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn load(&mut self, text: &str, term: &mut dyn Write) -> io::Result<()> {
        self.clear_line(term)?;

        self.chars.extend(text.chars().take(self.max_len));
        self.cursor = self.len();

        let output: String = self.chars.iter().collect();
        term.write_all(output.as_bytes())?;
        term.flush()?;

        ok!()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BellMock, StdoutMock};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn line_with(text: &str, cursor: usize) -> LineBuffer {
        let mut line = LineBuffer::new("cmd> ", 16);
        line.chars.extend(text.chars());
        line.cursor = cursor;
        line
    }

    fn count(it: usize) -> NonZeroUsize { NonZeroUsize::new(it).unwrap() }

    #[test]
    fn test_insert_in_middle_shifts_tail() {
        // cmd> This is the command
        //              ^
        let mut line = line_with("This is the command", 8);
        line.max_len = 64;
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        assert!(line.insert('k', count(3), &mut stdout_mock, &mut bell).unwrap());

        // cmd> This is kkkthe command
        //                 ^
        assert_eq!(line.as_string(), "This is kkkthe command");
        assert_eq!(line.cursor(), 11);
        assert_eq!(bell.count(), 0);
    }

    #[test_case("", 0, 1 ; "empty line")]
    #[test_case("abc", 0, 2 ; "at start")]
    #[test_case("abc", 3, 4 ; "at end")]
    #[test_case("abcdef", 2, 5 ; "in middle")]
    fn test_insert_keeps_everything_outside_inserted_range(
        text: &str,
        cursor: usize,
        k: usize,
    ) {
        let mut line = line_with(text, cursor);
        let before = line.chars().to_vec();
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        assert!(line.insert('x', count(k), &mut stdout_mock, &mut bell).unwrap());

        assert_eq!(line.len(), before.len() + k);
        assert_eq!(line.cursor(), cursor + k);
        assert_eq!(&line.chars()[..cursor], &before[..cursor]);
        assert!(line.chars()[cursor..cursor + k].iter().all(|it| *it == 'x'));
        assert_eq!(&line.chars()[cursor + k..], &before[cursor..]);
    }

    #[test]
    fn test_insert_redraws_from_start_of_line() {
        let mut line = line_with("ac", 1);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        line.insert('b', NonZeroUsize::MIN, &mut stdout_mock, &mut bell).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x08abc\x08");
    }

    #[test]
    fn test_insert_past_capacity_is_rejected() {
        let mut line = line_with("0123456789abcde", 15);
        let before = line.clone();
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        let inserted = line.insert('z', count(2), &mut stdout_mock, &mut bell).unwrap();

        assert!(!inserted);
        assert_eq!(line, before);
        assert_eq!(bell.count(), 1);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");

        // Exactly filling the line is fine.
        assert!(line.insert('z', NonZeroUsize::MIN, &mut stdout_mock, &mut bell).unwrap());
        assert_eq!(line.len(), 16);
    }

    #[test]
    fn test_delete_in_middle() {
        // cmd> This is the command
        //              ^
        let mut line = line_with("This is the cmd", 8);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        assert!(line.delete(&mut stdout_mock, &mut bell).unwrap());

        // cmd> This is he cmd
        //              ^
        assert_eq!(line.as_string(), "This is he cmd");
        assert_eq!(line.cursor(), 8);
        assert_eq!(bell.count(), 0);
    }

    #[test]
    fn test_delete_leaves_no_trailing_character_on_screen() {
        let mut line = line_with("abc", 1);
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        line.delete(&mut stdout_mock, &mut bell).unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "\x08ac \x08\x08");
    }

    #[test]
    fn test_delete_at_end_rings_and_does_nothing() {
        let mut line = line_with("abc", 3);
        let before = line.clone();
        let mut stdout_mock = StdoutMock::default();
        let mut bell = BellMock::default();

        assert!(!line.delete(&mut stdout_mock, &mut bell).unwrap());

        assert_eq!(line, before);
        assert_eq!(bell.count(), 1);
    }

    #[test]
    fn test_load_replaces_line_and_puts_cursor_at_end() {
        let mut line = line_with("typing", 2);
        let mut stdout_mock = StdoutMock::default();

        line.load("pwd", &mut stdout_mock).unwrap();

        assert_eq!(line.as_string(), "pwd");
        assert_eq!(line.cursor(), 3);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x08\x08      \x08\x08\x08\x08\x08\x08pwd"
        );
    }

    #[test]
    fn test_load_truncates_to_capacity() {
        let mut line = LineBuffer::new("", 4);
        let mut stdout_mock = StdoutMock::default();

        line.load("abcdefgh", &mut stdout_mock).unwrap();

        assert_eq!(line.as_string(), "abcd");
        assert_eq!(line.cursor(), 4);
    }
}
