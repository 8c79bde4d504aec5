// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{TracingConfig, ok};
use tracing::dispatcher;
use tracing_core::LevelFilter;

/// Global default subscriber, which once set, can't be unset or changed. This is great
/// for apps.
///
/// Logging is **DISABLED** by **default**. If this is never called with a level other
/// than [`LevelFilter::OFF`] then the [`tracing::debug!`] etc. calls in this crate go
/// nowhere.
///
/// ```no_run
/// use r3bl_cmd_reader::{TracingConfig, try_initialize_logging_global};
/// use tracing_core::LevelFilter;
///
/// try_initialize_logging_global(TracingConfig::new_file(
///     Some("rdr.log".into()),
///     LevelFilter::DEBUG,
/// ))
/// .unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the log file can't be created or a global subscriber is already
/// installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, so different tests can have different log settings. Returns
/// `None` if the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
