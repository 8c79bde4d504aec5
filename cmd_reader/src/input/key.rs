// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// A logical key, after the raw input has been decoded. This is a closed set. Anything
/// the decoders don't recognize becomes [`Key::Undefined`].
///
/// Some keys have two names (eg: [`Key::LineBegin`] for Ctrl+A and [`Key::Home`] for the
/// Home key) because different decoders produce them. They do the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Key {
    /// Printable ASCII character, including space.
    Printable(char),
    LineBegin,
    Home,
    LineEnd,
    End,
    Backspace,
    Delete,
    Newline,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Tab,
    /// Recognized, but there is no insert / overwrite mode, so it only rings the bell.
    Insert,
    Undefined,
    /// No more input. Ends the current session.
    InputEnd,
}

impl Key {
    /// Maps a plain character to a key. Used for characters that arrive on their own
    /// (not as part of an escape sequence).
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        match ch {
            '\n' | '\r' => Key::Newline,
            '\t' => Key::Tab,
            '\x01' => Key::LineBegin,
            '\x05' => Key::LineEnd,
            '\x04' => Key::InputEnd,
            '\x08' | '\x7F' => Key::Backspace,
            ' '..='~' => Key::Printable(ch),
            _ => Key::Undefined,
        }
    }

    /// `true` for characters that [`crate::LineBuffer`] accepts.
    #[must_use]
    pub fn is_printable_char(ch: char) -> bool { matches!(ch, ' '..='~') }
}
