// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_cmd_reader::{CommandExecutor, LINE_ENDING};
use std::io::Write;

/// Stands in for a real command interpreter: every submitted line is written back out,
/// on its own line, and counted.
#[derive(Debug)]
pub struct EchoExecutor<W: Write> {
    pub output_device: W,
    pub count: usize,
}

impl<W: Write> EchoExecutor<W> {
    pub fn new(output_device: W) -> Self {
        Self {
            output_device,
            count: 0,
        }
    }
}

impl<W: Write> CommandExecutor for EchoExecutor<W> {
    fn execute(&mut self, line: &str) {
        self.count += 1;
        tracing::info!(message = "execute", count = self.count, line = %line);

        // We don't care about the result of this operation.
        write!(self.output_device, "{line}{LINE_ENDING}").ok();
        self.output_device.flush().ok();
    }
}
