// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::StdMutex;
use std::{io::{Result, Write},
          sync::{Arc, PoisonError}};

/// You can safely clone this struct, since it only contains an `Arc<StdMutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned.
#[derive(Clone, Debug, Default)]
pub struct StdoutMock {
    pub buffer: Arc<StdMutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.get_copy_of_buffer()).into_owned()
    }

    /// Forget everything written so far.
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
