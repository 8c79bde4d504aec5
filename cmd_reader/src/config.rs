// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DEFAULT_BUFFER_CAPACITY, DEFAULT_PAGE_SIZE, DEFAULT_PROMPT, DEFAULT_TAB_STOP,
            HISTORY_SIZE_MAX};
use std::num::NonZeroUsize;

/// Knobs for a [`crate::CmdReader`]. Use [`Default::default`] and then the `with_*`
/// methods to change what you need.
///
/// ```
/// use r3bl_cmd_reader::ReaderConfig;
/// use std::num::NonZeroUsize;
///
/// let config = ReaderConfig::default()
///     .with_prompt("mcalc> ")
///     .with_tab_stop(NonZeroUsize::new(4).unwrap());
/// assert_eq!(config.tab_stop.get(), 4);
/// assert_eq!(config.max_line_len(), 65_535);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Printed at the start of every fresh line.
    pub prompt: String,

    /// Width between tab stops, in columns of the line (the prompt is not counted).
    pub tab_stop: NonZeroUsize,

    /// How many history entries `PageUp` / `PageDown` jump over.
    pub page_size: NonZeroUsize,

    /// Size of the line buffer, including the terminating slot. The longest line that
    /// can be typed is one less than this, see [`Self::max_line_len`].
    pub buffer_capacity: NonZeroUsize,

    /// Oldest entries are evicted once the history grows past this.
    pub history_max_entries: NonZeroUsize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            tab_stop: non_zero(DEFAULT_TAB_STOP),
            page_size: non_zero(DEFAULT_PAGE_SIZE),
            buffer_capacity: non_zero(DEFAULT_BUFFER_CAPACITY),
            history_max_entries: non_zero(HISTORY_SIZE_MAX),
        }
    }
}

impl ReaderConfig {
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_tab_stop(mut self, tab_stop: NonZeroUsize) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_buffer_capacity(mut self, buffer_capacity: NonZeroUsize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    #[must_use]
    pub fn with_history_max_entries(mut self, history_max_entries: NonZeroUsize) -> Self {
        self.history_max_entries = history_max_entries;
        self
    }

    /// Longest line the [`crate::LineBuffer`] will hold.
    #[must_use]
    pub fn max_line_len(&self) -> usize { self.buffer_capacity.get() - 1 }
}

/// All the defaults are non zero literals.
fn non_zero(value: usize) -> NonZeroUsize { NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN) }
