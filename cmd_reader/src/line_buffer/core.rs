// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{LineChars, ReaderConfig};

/// The line being typed, and where the edit cursor is inside of it.
///
/// Fields are private so that the invariants listed in the [module
/// docs](crate::line_buffer) can't be broken from the outside. All the mutating methods
/// take the output device and the [`crate::Bell`], since every edit is either echoed or
/// rejected with an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// Characters of the line, without the prompt.
    pub(super) chars: LineChars,

    /// Index into `chars` (0-based). `chars.len()` means "after the last character".
    pub(super) cursor: usize,

    /// Longest line that is accepted.
    pub(super) max_len: usize,

    pub(super) prompt: String,
}

impl LineBuffer {
    #[must_use]
    pub fn new(prompt: impl Into<String>, max_len: usize) -> Self {
        Self {
            chars: LineChars::new(),
            cursor: 0,
            max_len,
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ReaderConfig) -> Self {
        Self::new(config.prompt.clone(), config.max_line_len())
    }

    #[must_use]
    pub fn len(&self) -> usize { self.chars.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.chars.is_empty() }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn max_len(&self) -> usize { self.max_len }

    #[must_use]
    pub fn prompt(&self) -> &str { &self.prompt }

    #[must_use]
    pub fn chars(&self) -> &[char] { &self.chars }

    /// Copy of the line, without the prompt.
    #[must_use]
    pub fn as_string(&self) -> String { self.chars.iter().collect() }

    /// Returns the position if `target` lies in `[0, len]`.
    #[must_use]
    pub fn checked_position(&self, target: isize) -> Option<usize> {
        usize::try_from(target).ok().filter(|it| *it <= self.len())
    }
}
