// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line editing state for [`CmdReader`].
//!
//! [`LineBuffer`] holds the characters of the line being typed and the edit cursor, and
//! echoes every change to the output device.
//!
//! # Architecture
//!
//! | Module   | Responsibility                                               |
//! |----------|--------------------------------------------------------------|
//! | `core`   | [`LineBuffer`] struct, construction, read only accessors      |
//! | `edit`   | Insert, delete, and loading a whole line (from history)       |
//! | `render` | Cursor movement, clearing, the erase-and-reprint redraw       |
//!
//! # Invariants
//!
//! - `0 <= cursor <= len`.
//! - `len <= max_len`, where `max_len` is [`ReaderConfig::max_line_len`].
//! - The terminal cursor is at the same position as `cursor` (counted from the end of
//!   the prompt) between any two calls.
//!
//! # Redraw strategy
//!
//! Every successful edit erases back to the start of the line (with backspaces), prints
//! the whole line again, blanks out any leftover characters from the longer line that
//! was drawn before, and then backspaces to the cursor. The output device only needs to
//! understand plain characters, `\b` and space.
//!
//! [`CmdReader`]: crate::CmdReader
//! [`ReaderConfig::max_line_len`]: crate::ReaderConfig::max_line_len

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules organized by functional responsibility.
mod core;
mod edit;
mod render;

// Public re-exports (expose stable API).
pub use core::*;
