// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each block.
///
/// ```
/// use r3bl_cmd_reader::{CommonResult, throws};
///
/// fn run() -> CommonResult<()> {
///     throws!({
///         let _answer = 6 * 7;
///     });
/// }
/// # run().unwrap();
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}
