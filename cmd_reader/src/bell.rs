// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::BELL_BYTE;
use std::io::{Write, stderr};

/// The alert that is raised every time an edit is rejected. Ringing the bell never fails
/// and never blocks, and it must not touch the line or the history.
pub trait Bell {
    fn ring(&mut self);
}

/// Writes the ASCII BEL character to `stderr`, so the terminal beeps (or flashes) without
/// disturbing the line that is drawn on `stdout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl Bell for TerminalBell {
    fn ring(&mut self) {
        let mut stderr = stderr().lock();
        // We don't care about the result of this operation.
        stderr.write_all(&[BELL_BYTE]).ok();
        stderr.flush().ok();
    }
}
