// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, EchoExecutor};
use miette::IntoDiagnostic as _;
use r3bl_cmd_reader::{Bell, BoxedInputSource, ByteInputSource, CmdReader,
                      CommandExecutor, CommonResult, CrosstermInputSource, InputSource,
                      LINE_ENDING, TerminalBell, throws, try_initialize_logging_global};
use std::io::{self, IsTerminal, Write, stdin, stdout};

/// Runs `rdr` with the parsed command line arguments. Returns once the interactive
/// source runs out (Ctrl+D, or the end of piped `stdin`).
///
/// # Errors
///
/// Returns an error if logging can't be set up, the dofile can't be opened, or the
/// terminal can't be read from or written to.
pub fn run_app(cli_arg: CLIArg) -> CommonResult<()> {
    throws!({
        try_initialize_logging_global(cli_arg.tracing_config())?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

        let mut reader = CmdReader::new(cli_arg.reader_config());
        if let Some(dofile) = &cli_arg.reader_options.dofile {
            reader.open_dofile(dofile)?;
        }

        let mut interactive = try_create_interactive_source().into_diagnostic()?;
        let mut term = stdout();
        let mut bell = TerminalBell;
        let mut executor = EchoExecutor::new(stdout());

        run_sessions(
            &mut reader,
            interactive.as_mut(),
            &mut term,
            &mut bell,
            &mut executor,
        )?;

        // Restore the terminal before printing the last line ending.
        drop(interactive);
        write!(term, "{LINE_ENDING}").ok();
        term.flush().ok();

        tracing::debug!(
            message = "Stop logging...",
            executed = executor.count,
            history_len = reader.history.len()
        );
    });
}

/// The pending dofile (if any) gets a session of its own, then the interactive source
/// gets the next one.
///
/// # Errors
///
/// Returns an error if a key can't be read or `term` can't be written to.
pub fn run_sessions(
    reader: &mut CmdReader,
    interactive: &mut dyn InputSource,
    term: &mut dyn Write,
    bell: &mut dyn Bell,
    executor: &mut dyn CommandExecutor,
) -> CommonResult<()> {
    throws!({
        if reader.has_pending_batch() {
            reader.read_cmd(interactive, term, bell, executor)?;
        }
        reader.read_cmd(interactive, term, bell, executor)?;
    });
}

/// Raw mode keys from the terminal, or decoded bytes when `stdin` is redirected.
fn try_create_interactive_source() -> io::Result<BoxedInputSource> {
    let stdin = stdin();
    if stdin.is_terminal() {
        Ok(Box::new(CrosstermInputSource::try_new()?))
    } else {
        Ok(Box::new(ByteInputSource::new(stdin.lock())))
    }
}
