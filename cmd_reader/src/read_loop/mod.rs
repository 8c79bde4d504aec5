// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod cmd_reader;
pub mod command_executor;
pub mod session;


// Re-export.
pub use cmd_reader::*;
pub use command_executor::*;
pub use session::*;
