// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::try_create_layers;
use std::fmt::Debug;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` in the `File` variants is the path of the log file. Eg: `/tmp/rdr.log`
/// or `rdr.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level_filter,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|err| miette::miette!("Failed to install global subscriber: {err}"))
    }

    /// Thread local subscriber, which is removed when the returned guard is dropped.
    /// This is great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        Ok(tracing_subscriber::registry().with(layers).set_default())
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}
