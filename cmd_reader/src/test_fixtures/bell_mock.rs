// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Bell;

/// Counts rings instead of making noise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BellMock {
    count: usize,
}

impl BellMock {
    #[must_use]
    pub fn count(&self) -> usize { self.count }
}

impl Bell for BellMock {
    fn ring(&mut self) { self.count += 1; }
}
