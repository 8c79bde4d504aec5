// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Editing mistakes (cursor out of range, delete at end of line, history out of range,
//! unknown keys) are *not* errors in this crate. They ring the [`crate::Bell`] and
//! leave the state unchanged. The types in here are only for failures of the devices
//! that the read loop is wired to.

use miette::{Diagnostic, Report as ErrorReport};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. Used by binaries and the tracing setup.
pub type CommonResult<T> = miette::Result<T>;

/// Error returned from [`crate::CmdReader::read_cmd`] and [`crate::Session::run`].
#[derive(Debug, Error, Diagnostic)]
pub enum ReadlineError {
    /// Reading from the input source, or writing to the output device, failed.
    #[error(transparent)]
    #[diagnostic(code(cmd_reader::io))]
    IO(#[from] io::Error),

    /// The batch file given to [`crate::CmdReader::open_dofile`] could not be opened.
    #[error("can't open dofile {}", path.display())]
    #[diagnostic(
        code(cmd_reader::dofile_open),
        help("check that the file exists and that you have permission to read it")
    )]
    DofileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// For convenience, convert [`ErrorReport`] to [`ReadlineError`], so that
/// `into_diagnostic()` works.
impl From<ErrorReport> for ReadlineError {
    fn from(report: ErrorReport) -> Self {
        ReadlineError::IO(io::Error::other(format!("{report}")))
    }
}
