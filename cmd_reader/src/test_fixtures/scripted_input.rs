// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputSource, Key};
use std::{collections::VecDeque, io};

/// Replays a fixed list of keys, then returns [`Key::InputEnd`] forever.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedInputSource {
    pub keys: VecDeque<Key>,
    /// How many times [`InputSource::read_key`] has been called.
    pub read_count: usize,
}

impl ScriptedInputSource {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            read_count: 0,
        }
    }

    /// Each character becomes a key, see [`Key::from_char`].
    #[must_use]
    pub fn from_text(text: &str) -> Self { Self::new(text.chars().map(Key::from_char)) }

    /// Same as [`Self::from_text`] with a trailing [`Key::Newline`].
    #[must_use]
    pub fn from_str_with_newline(text: &str) -> Self {
        let mut it = Self::from_text(text);
        it.keys.push_back(Key::Newline);
        it
    }

    /// Appends typed text.
    #[must_use]
    pub fn then_text(mut self, text: &str) -> Self {
        self.keys.extend(text.chars().map(Key::from_char));
        self
    }

    /// Appends keys.
    #[must_use]
    pub fn then_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    #[must_use]
    pub fn is_drained(&self) -> bool { self.keys.is_empty() }
}

impl InputSource for ScriptedInputSource {
    fn read_key(&mut self) -> io::Result<Key> {
        self.read_count += 1;
        Ok(self.keys.pop_front().unwrap_or(Key::InputEnd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replays_then_ends() {
        let mut source = ScriptedInputSource::from_text("a").then_keys([Key::ArrowUp]);

        assert_eq!(source.read_key().unwrap(), Key::Printable('a'));
        assert_eq!(source.read_key().unwrap(), Key::ArrowUp);
        assert_eq!(source.read_key().unwrap(), Key::InputEnd);
        assert_eq!(source.read_key().unwrap(), Key::InputEnd);
        assert_eq!(source.read_count, 4);
        assert!(source.is_drained());
    }
}
