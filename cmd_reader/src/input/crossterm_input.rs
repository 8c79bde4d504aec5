// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputSource, Key};
use crossterm::{event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                terminal::{disable_raw_mode, enable_raw_mode}};
use std::io;

/// Reads keys from the interactive terminal using [`crossterm::event::read`], which
/// blocks.
///
/// The terminal is put into raw mode when this is created, and back into cooked mode
/// when it is dropped. Events that don't map to a key (mouse, resize, focus, key
/// releases) are skipped.
#[derive(Debug)]
pub struct CrosstermInputSource {
    _private: (),
}

impl CrosstermInputSource {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put into raw mode (eg: `stdin` is not a
    /// terminal).
    pub fn try_new() -> io::Result<Self> {
        enable_raw_mode()?;
        tracing::debug!(message = "raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for CrosstermInputSource {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        disable_raw_mode().ok();
        tracing::debug!(message = "raw mode disabled");
    }
}

impl InputSource for CrosstermInputSource {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            let event = event::read()?;
            if let Ok(key) = Key::try_from(event) {
                return Ok(key);
            }
        }
    }
}

impl TryFrom<Event> for Key {
    type Error = ();

    /// Only [`Event::Key`] is of interest; everything else is skipped.
    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) => Key::try_from(key_event),
            _ => Err(()),
        }
    }
}

impl TryFrom<KeyEvent> for Key {
    type Error = ();

    /// Convert [`KeyEvent`] to [`Key`]. Key releases are skipped (returns `Err`).
    ///
    /// | Key event                     | Key                     |
    /// |-------------------------------|-------------------------|
    /// | Printable ASCII (+ Shift)     | [`Key::Printable`]      |
    /// | Ctrl+A, Ctrl+E                | [`Key::LineBegin`], [`Key::LineEnd`] |
    /// | Ctrl+D, Ctrl+C                | [`Key::InputEnd`]       |
    /// | Enter                         | [`Key::Newline`]        |
    /// | Named keys (arrows, Home ...) | Matching variant        |
    /// | Anything else                 | [`Key::Undefined`]      |
    fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
        // Make the code easier to read below using this alias.
        type KC = KeyCode;

        if key_event.kind == KeyEventKind::Release {
            return Err(());
        }

        let key = match key_event.code {
            KC::Char(ch) if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                match ch.to_ascii_lowercase() {
                    'a' => Key::LineBegin,
                    'e' => Key::LineEnd,
                    'c' | 'd' => Key::InputEnd,
                    _ => Key::Undefined,
                }
            }
            KC::Char(ch)
                if key_event.modifiers.difference(KeyModifiers::SHIFT).is_empty()
                    && Key::is_printable_char(ch) =>
            {
                Key::Printable(ch)
            }
            KC::Enter => Key::Newline,
            KC::Backspace => Key::Backspace,
            KC::Delete => Key::Delete,
            KC::Left => Key::ArrowLeft,
            KC::Right => Key::ArrowRight,
            KC::Up => Key::ArrowUp,
            KC::Down => Key::ArrowDown,
            KC::Home => Key::Home,
            KC::End => Key::End,
            KC::PageUp => Key::PageUp,
            KC::PageDown => Key::PageDown,
            KC::Tab => Key::Tab,
            KC::Insert => Key::Insert,
            _ => Key::Undefined,
        };

        Ok(key)
    }
}
