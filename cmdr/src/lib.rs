// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # rdr
//!
//! A command prompt that is wired to the [`r3bl_cmd_reader`] line editing core.
//!
//! ```text
//! rdr [--prompt <PROMPT>] [--tab-stop <N>] [--page-size <N>] [--dofile <PATH>]
//!     [--log-file <PATH>] [--log-level <LEVEL>]
//! ```
//!
//! 1. If `--dofile` is given, its keystrokes are replayed first.
//! 2. Then keys are read from the terminal (in raw mode). When `stdin` is not a terminal
//!    (eg: `echo "ls" | rdr`) its bytes are decoded the same way as a dofile.
//! 3. Every submitted line is echoed back. Ctrl+D ends input.
//!
//! Logs never go to the terminal, since that would garble the line being edited. Use
//! `--log-level debug` and look in the `--log-file` (default `log.txt`).

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
// Only allow unwrap in tests.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod rdr;

// Re-export.
pub use rdr::*;
