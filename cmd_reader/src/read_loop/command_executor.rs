// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Whatever runs a submitted line. It gets the same trimmed text that was added to the
/// history, and is not called at all for blank lines.
///
/// Any `FnMut(&str)` closure works as an executor.
pub trait CommandExecutor {
    fn execute(&mut self, line: &str);
}

impl<F> CommandExecutor for F
where
    F: FnMut(&str),
{
    fn execute(&mut self, line: &str) { self(line) }
}
