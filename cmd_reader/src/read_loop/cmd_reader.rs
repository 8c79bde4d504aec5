// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Bell, BoxedInputSource, ByteInputSource, CommandExecutor, HistoryStore,
            InputSource, ReaderConfig, ReadlineError, Session, ok};
use std::{fmt::{Debug, Formatter},
          io::Write,
          path::Path};

/// The process lifetime object that a command interpreter holds on to. It owns the
/// [`HistoryStore`] (which outlives every [`Session`]), the [`ReaderConfig`], and at
/// most one pending batch source.
///
/// There are no globals. Create as many independent readers as you need (eg: one per
/// test).
pub struct CmdReader {
    pub history: HistoryStore,
    pub config: ReaderConfig,
    maybe_batch_source: Option<BoxedInputSource>,
}

impl Debug for CmdReader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmdReader")
            .field("history", &self.history)
            .field("config", &self.config)
            .field("has_pending_batch", &self.has_pending_batch())
            .finish_non_exhaustive()
    }
}

impl CmdReader {
    #[must_use]
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            history: HistoryStore::from_config(&config),
            config,
            maybe_batch_source: None,
        }
    }

    /// Opens a file of recorded keystrokes (a "dofile"). The next call to
    /// [`Self::read_cmd`] replays it instead of reading the interactive source. A
    /// previously pending batch source that was never read is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::DofileOpen`] if the file can't be opened.
    pub fn open_dofile(&mut self, path: impl AsRef<Path>) -> Result<(), ReadlineError> {
        let path = path.as_ref();
        let source =
            ByteInputSource::open(path).map_err(|source| ReadlineError::DofileOpen {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(message = "dofile opened", path = %path.display());
        self.set_batch_source(Box::new(source));

        ok!()
    }

    /// Same as [`Self::open_dofile`] for a source that is already open.
    pub fn set_batch_source(&mut self, source: BoxedInputSource) {
        self.maybe_batch_source = Some(source);
    }

    #[must_use]
    pub fn has_pending_batch(&self) -> bool { self.maybe_batch_source.is_some() }

    /// Runs one [`Session`].
    ///
    /// - If a batch source is pending, it is read until it runs out and then closed.
    ///   `interactive` is not touched.
    /// - Otherwise the session reads from `interactive` until it returns
    ///   [`crate::Key::InputEnd`].
    ///
    /// The batch source is closed even when the session over it fails.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::IO`] if reading a key or writing to `term` fails.
    pub fn read_cmd(
        &mut self,
        interactive: &mut dyn InputSource,
        term: &mut dyn Write,
        bell: &mut dyn Bell,
        executor: &mut dyn CommandExecutor,
    ) -> Result<(), ReadlineError> {
        let mut session = Session::new(&mut self.history, &self.config);

        match self.maybe_batch_source.take() {
            Some(mut batch_source) => {
                tracing::debug!(message = "reading batch source");
                let result = session.run(batch_source.as_mut(), term, bell, executor);
                tracing::debug!(message = "batch source closed", ok = result.is_ok());
                result
            }
            None => {
                tracing::debug!(message = "reading interactive source");
                session.run(interactive, term, bell, executor)
            }
        }
    }
}
