// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

/// Creates an appender that never rolls over, so a session's log ends up in exactly the
/// file that was asked for.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = match path.parent() {
        // A bare file name like `log.txt` has an empty parent.
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => miette::bail!(
            "Can't access folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        ),
    };

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}
