// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::core::LineBuffer;
use crate::{BACKSPACE_CHAR, Bell, ok};
use std::io::{self, Write};

impl LineBuffer {
    /// Starts a fresh line: forgets the contents, puts the cursor at 0 and prints the
    /// prompt. The caller is responsible for having moved the terminal to a new line
    /// first (eg: by echoing the newline of the line that was just submitted).
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn reset(&mut self, term: &mut dyn Write) -> io::Result<()> {
        self.chars.clear();
        self.cursor = 0;

        term.write_all(self.prompt.as_bytes())?;
        term.flush()?;

        ok!()
    }

    /// Moves the cursor to `target`. If `target` is outside `[0, len]` the bell rings,
    /// nothing is written, and `false` is returned.
    ///
    /// Moving to where the cursor already is succeeds and leaves the screen looking
    /// the same.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn move_cursor(
        &mut self,
        target: isize,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
    ) -> io::Result<bool> {
        let Some(target) = self.checked_position(target) else {
            tracing::trace!(message = "cursor move rejected", requested = target, len = self.len());
            bell.ring();
            return ok!(false);
        };

        let drawn_cursor = self.cursor;
        self.cursor = target;
        self.repaint(term, drawn_cursor, self.len())?;

        ok!(true)
    }

    /// Blanks out the whole line on screen (leaving the prompt alone) and empties the
    /// buffer. Unlike [`Self::reset`] the prompt is not printed again.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn clear_line(&mut self, term: &mut dyn Write) -> io::Result<()> {
        let drawn_len = self.len();

        let mut output = String::with_capacity(self.cursor + drawn_len * 2);
        push_repeated(&mut output, BACKSPACE_CHAR, self.cursor);
        push_repeated(&mut output, ' ', drawn_len);
        push_repeated(&mut output, BACKSPACE_CHAR, drawn_len);
        term.write_all(output.as_bytes())?;
        term.flush()?;

        self.chars.clear();
        self.cursor = 0;

        ok!()
    }

    /// Erase-and-reprint redraw.
    ///
    /// - `drawn_cursor` is where the terminal cursor currently is, ie: the value of
    ///   `cursor` before the edit.
    /// - `drawn_len` is the length of the line that is currently on screen. When it is
    ///   longer than the new line, the leftover tail is overwritten with spaces.
    ///
    /// Afterwards the terminal cursor is at `self.cursor`.
    pub(super) fn repaint(
        &self,
        term: &mut dyn Write,
        drawn_cursor: usize,
        drawn_len: usize,
    ) -> io::Result<()> {
        let len = self.len();
        let leftover = drawn_len.saturating_sub(len);

        let mut output = String::with_capacity(drawn_cursor + len + leftover * 2 + len);
        push_repeated(&mut output, BACKSPACE_CHAR, drawn_cursor);
        output.extend(self.chars.iter());
        push_repeated(&mut output, ' ', leftover);
        push_repeated(&mut output, BACKSPACE_CHAR, leftover);
        push_repeated(&mut output, BACKSPACE_CHAR, len - self.cursor);

        term.write_all(output.as_bytes())?;
        term.flush()?;

        ok!()
    }
}

fn push_repeated(output: &mut String, ch: char, count: usize) {
    output.extend(std::iter::repeat_n(ch, count));
}
