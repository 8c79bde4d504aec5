// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod app;
pub mod clap_config;
pub mod echo_executor;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use echo_executor::*;
