// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stand-ins for the devices that a [`crate::CmdReader`] is wired to, so that sessions
//! can be driven and inspected without a terminal.

// Attach.
pub mod bell_mock;
pub mod scripted_input;
pub mod stdout_mock;

// Re-export.
pub use bell_mock::*;
pub use scripted_input::*;
pub use stdout_mock::*;
