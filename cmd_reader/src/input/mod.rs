// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoded keys, and the sources that produce them.
//!
//! The read loop never sees raw bytes or terminal events. It only pulls [`Key`]s from
//! an [`InputSource`]. There are two real sources:
//!
//! - [`CrosstermInputSource`] for an interactive terminal (raw mode, via `crossterm`).
//! - [`ByteInputSource`] for anything that is just a stream of bytes: a batch file
//!   (dofile), or `stdin` when it is piped.
//!
//! Tests use [`crate::ScriptedInputSource`].

// Attach.
pub mod byte_input;
pub mod crossterm_input;
pub mod input_source;
pub mod key;

// Re-export.
pub use byte_input::*;
pub use crossterm_input::*;
pub use input_source::*;
pub use key::*;
