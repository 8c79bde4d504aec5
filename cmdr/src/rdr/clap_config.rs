// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};
use r3bl_cmd_reader::{DEFAULT_LOG_FILE_NAME, DEFAULT_PAGE_SIZE, DEFAULT_PROMPT,
                      DEFAULT_TAB_STOP, ReaderConfig, TracingConfig};
use std::{num::NonZeroUsize, path::PathBuf};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "rdr")]
#[command(about = "Line editing command prompt, with history recall and batch input")]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(flatten)]
    pub reader_options: ReaderOption,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct ReaderOption {
    #[arg(long, default_value = DEFAULT_PROMPT, help = "Printed at the start of every line")]
    pub prompt: String,

    #[arg(long, default_value_t = non_zero(DEFAULT_TAB_STOP), help = "Columns between tab stops")]
    pub tab_stop: NonZeroUsize,

    #[arg(long, default_value_t = non_zero(DEFAULT_PAGE_SIZE), help = "History entries skipped by PageUp and PageDown")]
    pub page_size: NonZeroUsize,

    #[arg(long, value_name = "PATH", help = "File of recorded keystrokes to replay before reading the terminal")]
    pub dofile: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Log file, used when --log-level is not `off`"
    )]
    pub log_file: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Off, help = "Log level, `off` disables logging")]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl CLIArg {
    #[must_use]
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig::default()
            .with_prompt(self.reader_options.prompt.clone())
            .with_tab_stop(self.reader_options.tab_stop)
            .with_page_size(self.reader_options.page_size)
    }

    /// The terminal is busy showing the line being edited, so logs only go to a file.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig::new_file(
            Some(self.global_options.log_file.clone()),
            self.global_options.log_level.into(),
        )
    }
}

fn non_zero(value: usize) -> NonZeroUsize { NonZeroUsize::new(value).unwrap_or(NonZeroUsize::MIN) }
