// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Bell, CommandExecutor, HistoryStore, InputSource, Key, LINE_ENDING,
            LineBuffer, ReaderConfig, ReadlineError, ok};
use std::{io::{self, Write},
          num::NonZeroUsize,
          ops::ControlFlow};

/// One editing session: a fresh [`LineBuffer`] wired to the (long lived)
/// [`HistoryStore`]. [`Session::run`] pulls keys until [`Key::InputEnd`].
///
/// Sessions are created by [`crate::CmdReader::read_cmd`], but you can also drive one
/// directly.
#[derive(Debug)]
pub struct Session<'a> {
    line: LineBuffer,
    history: &'a mut HistoryStore,
    config: &'a ReaderConfig,
}

impl<'a> Session<'a> {
    pub fn new(history: &'a mut HistoryStore, config: &'a ReaderConfig) -> Self {
        Self {
            line: LineBuffer::from_config(config),
            history,
            config,
        }
    }

    #[must_use]
    pub fn line(&self) -> &LineBuffer { &self.line }

    /// Prints the prompt, then handles keys from `source` until it runs out. Rejected
    /// edits ring `bell` and are otherwise ignored, so no key ever ends the session
    /// early. Whatever is left unsubmitted in the line when the input ends is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::IO`] if reading a key, or writing to `term`, fails.
    pub fn run(
        &mut self,
        source: &mut dyn InputSource,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
        executor: &mut dyn CommandExecutor,
    ) -> Result<(), ReadlineError> {
        self.history.return_to_fresh_line();
        self.line.reset(term)?;

        loop {
            let key = source.read_key()?;
            tracing::trace!(message = "key", key = ?key);
            if let ControlFlow::Break(()) = self.handle_key(key, term, bell, executor)? {
                break;
            }
        }

        ok!()
    }

    /// Applies a single key.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `term` fails.
    pub fn handle_key(
        &mut self,
        key: Key,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
        executor: &mut dyn CommandExecutor,
    ) -> io::Result<ControlFlow<()>> {
        let cursor = self.line.cursor();
        let history_index = self.history.history_index();
        let page_size = self.config.page_size.get();

        match key {
            Key::LineBegin | Key::Home => {
                self.line.move_cursor(0, term, bell)?;
            }
            Key::LineEnd | Key::End => {
                self.line.move_cursor(offset(self.line.len(), 0), term, bell)?;
            }
            Key::ArrowLeft => {
                self.line.move_cursor(offset(cursor, -1), term, bell)?;
            }
            Key::ArrowRight => {
                self.line.move_cursor(offset(cursor, 1), term, bell)?;
            }
            Key::Backspace => {
                if self.line.move_cursor(offset(cursor, -1), term, bell)? {
                    self.line.delete(term, bell)?;
                }
            }
            Key::Delete => {
                self.line.delete(term, bell)?;
            }
            Key::Newline => self.submit(term, executor)?,
            Key::ArrowUp => {
                self.navigate(offset(history_index, -1), term, bell)?;
            }
            Key::ArrowDown => {
                self.navigate(offset(history_index, 1), term, bell)?;
            }
            Key::PageUp => {
                self.navigate(offset(history_index, -signed(page_size)), term, bell)?;
            }
            Key::PageDown => {
                self.navigate(offset(history_index, signed(page_size)), term, bell)?;
            }
            Key::Tab => {
                let tab_stop = self.config.tab_stop.get();
                // Already on a stop means there is nothing to pad.
                if let Some(spaces) = NonZeroUsize::new((tab_stop - cursor % tab_stop) % tab_stop) {
                    self.line.insert(' ', spaces, term, bell)?;
                }
            }
            Key::Printable(ch) if Key::is_printable_char(ch) => {
                self.line.insert(ch, NonZeroUsize::MIN, term, bell)?;
            }
            Key::Printable(_) | Key::Insert | Key::Undefined => {
                tracing::debug!(message = "key has no binding", key = ?key);
                bell.ring();
            }
            Key::InputEnd => return ok!(ControlFlow::Break(())),
        }

        ok!(ControlFlow::Continue(()))
    }

    /// Commits the line, moves the terminal to a new line, runs the command, and prints
    /// a fresh prompt.
    fn submit(
        &mut self,
        term: &mut dyn Write,
        executor: &mut dyn CommandExecutor,
    ) -> io::Result<()> {
        let maybe_committed = self.history.commit(&self.line.as_string()).map(str::to_owned);

        term.write_all(LINE_ENDING.as_bytes())?;
        term.flush()?;

        if let Some(committed) = maybe_committed {
            tracing::debug!(message = "executing line", line = %committed);
            executor.execute(&committed);
        }

        self.line.reset(term)
    }

    fn navigate(
        &mut self,
        target: isize,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
    ) -> io::Result<bool> {
        self.history.navigate(target, &mut self.line, term, bell)
    }
}

/// `base + delta`, where going below 0 is allowed. Out of range positions are rejected
/// (with the bell) by the [`LineBuffer`] and [`HistoryStore`] themselves.
fn offset(base: usize, delta: isize) -> isize { signed(base).saturating_add(delta) }

fn signed(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }
