// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use r3bl_cmd_reader::{CommonResult, throws};
use r3bl_cmdr::{CLIArg, run_app};

fn main() -> CommonResult<()> {
    throws!({
        let cli_arg = CLIArg::parse();
        run_app(cli_arg)?;
    })
}
