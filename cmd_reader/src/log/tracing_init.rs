// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPreference, TracingConfig, WriterConfig,
            log::rolling_file_appender_impl};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, registry::LookupSpan};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, eg: `tracing_subscriber::registry().with(layers).init()`.
///
/// # Errors
///
/// Returns an error if the file layer can't create its log file.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    return_it.push(Box::new(level_filter));

    if let Some(layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())
    {
        return_it.push(layer);
    }

    if let Some(layer) =
        try_create_file_layer(level_filter, tracing_config.get_writer_config())?
    {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        _ => None,
    }
}

/// Same as [`try_create_display_layer`] but for the file half of the [`WriterConfig`].
/// ANSI colors are turned off since nobody is going to view the file in a terminal
/// emulator that is interpreting them.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!().with_ansi(false);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, tracing_log_file_path)
        | WriterConfig::File(tracing_log_file_path) => {
            let file = rolling_file_appender_impl::try_create(&tracing_log_file_path)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        _ => None,
    })
}
