// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_cmd_reader`
//!
//! A synchronous line editing core that sits underneath a command interpreter. It owns
//! three things:
//!
//! 1. [`LineBuffer`] - the line being typed, and the edit cursor inside of it. Every
//!    edit is echoed to an output device ([`std::io::Write`]) by erasing back to the
//!    start of the line and reprinting the whole line. There is no diffing.
//! 2. [`HistoryStore`] - lines that have been submitted, plus a navigation index. When
//!    the user scrolls up from a line they were in the middle of typing, that text is
//!    parked in a "temp entry" at the end of the history, so scrolling back down
//!    restores it verbatim.
//! 3. [`Session`] and [`CmdReader`] - the read loop. Decoded [`Key`]s are pulled from an
//!    [`InputSource`] and dispatched to the buffer or the history until
//!    [`Key::InputEnd`] shows up.
//!
//! Invalid edits (moving past either end of the line, deleting at the end, scrolling
//! past either end of the history, unknown keys) never return an error. They ring the
//! [`Bell`] and leave the state alone. The only errors that surface are I/O errors from
//! the input or output devices, see [`ReadlineError`].
//!
//! # Key bindings
//!
//! | Key                      | Effect                                         |
//! |--------------------------|------------------------------------------------|
//! | Ctrl+A, Home             | Move to start of line                          |
//! | Ctrl+E, End              | Move to end of line                            |
//! | Left, Right              | Move one character                             |
//! | Backspace                | Delete character before the cursor             |
//! | Delete                   | Delete character under the cursor              |
//! | Enter                    | Submit line (added to history, then executed)  |
//! | Up, Down                 | Previous / next history entry                  |
//! | `PageUp`, `PageDown`     | Jump [`ReaderConfig::page_size`] entries       |
//! | Tab                      | Pad with spaces to the next tab stop           |
//! | Ctrl+D                   | End of input                                   |
//!
//! # Batch input
//!
//! A "dofile" ([`CmdReader::open_dofile`]) is a file of pre-recorded keystrokes. When one
//! is pending, the next call to [`CmdReader::read_cmd`] drains it completely and closes
//! it, and only the call after that reads from the interactive source.
//!
//! # Example
//!
//! ```
//! use r3bl_cmd_reader::{BellMock, CmdReader, ReaderConfig, ScriptedInputSource,
//!                       StdoutMock};
//!
//! let mut reader = CmdReader::new(ReaderConfig::default().with_prompt("> "));
//! let mut input = ScriptedInputSource::from_str_with_newline("  ls -al  ");
//! let mut stdout_mock = StdoutMock::default();
//! let mut bell = BellMock::default();
//! let mut executed = vec![];
//!
//! reader
//!     .read_cmd(&mut input, &mut stdout_mock, &mut bell, &mut |line: &str| {
//!         executed.push(line.to_string());
//!     })
//!     .unwrap();
//!
//! assert_eq!(executed, vec!["ls -al".to_string()]);
//! assert_eq!(reader.history.entries(), &["ls -al".to_string()]);
//! assert_eq!(bell.count(), 0);
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
// Only allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod bell;
pub mod config;
pub mod decl_macros;
pub mod error;
pub mod history_store;
pub mod input;
pub mod line_buffer;
pub mod log;
pub mod read_loop;
pub mod test_fixtures;

// Re-export the public API.
pub use bell::*;
pub use config::*;
pub use error::*;
pub use history_store::*;
pub use input::*;
pub use line_buffer::*;
pub use log::*;
pub use read_loop::*;
pub use test_fixtures::*;

// Type aliases.
pub type StdMutex<T> = std::sync::Mutex<T>;

/// Characters of the line being edited. Most command lines fit in the inline storage so
/// no heap allocation happens for them.
pub type LineChars = smallvec::SmallVec<[char; DEFAULT_LINE_INLINE_SIZE]>;

// Constants.
pub const DEFAULT_LINE_INLINE_SIZE: usize = 128;
pub const DEFAULT_BUFFER_CAPACITY: usize = 65_536;
pub const DEFAULT_TAB_STOP: usize = 8;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const HISTORY_SIZE_MAX: usize = 1_000;
pub const DEFAULT_PROMPT: &str = "cmd> ";

pub const BACKSPACE_CHAR: char = '\x08';
pub const BELL_BYTE: u8 = 0x07;
/// The terminal is in raw mode during interactive reads, so a bare `\n` does not return
/// the carriage.
pub const LINE_ENDING: &str = "\r\n";
