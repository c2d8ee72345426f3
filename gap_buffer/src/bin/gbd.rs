// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `gbd` replays a list of edits against a gap buffer and prints the buffer, with its
//! gap, after every step.
//!
//! ```text
//! $ gbd --capacity 2 insert:0:A insert:0:B delete:0:1
//! start  [__]  gap_start=0, gap_end=2
//! insert:0:A  A[_]  gap_start=1, gap_end=2
//! insert:0:B  B[]A  gap_start=1, gap_end=1
//! delete:0:1  [_]A  gap_start=0, gap_end=1
//! => A
//! ```

use clap::Parser;
use r3bl_gap_buffer::{EditSession, GapBuffer, GapBufferConfig, TracingConfig};

use crate::clap_config::CLIArgs;

fn main() -> miette::Result<()> {
    let cli_args = CLIArgs::parse();

    let enable_logging = cli_args.global_options.enable_logging;
    if enable_logging {
        TracingConfig::from(cli_args.global_options.log_level).install_global()?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_args = ?cli_args);
    }

    let seed: Vec<char> = cli_args.seed.chars().collect();
    let buffer = GapBuffer::with_config(
        GapBufferConfig {
            initial_capacity: cli_args.capacity,
            growth_policy: cli_args.growth,
        },
        &seed,
    )?;

    let mut session = EditSession::new(buffer);
    for line in session.transcript() {
        println!("{line}");
    }
    for command in &cli_args.commands {
        let line = session.apply(command)?;
        println!("{line}");
    }
    println!("=> {}", session.buffer());

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}

mod clap_config {
    use clap::{Args, Parser};
    use r3bl_gap_buffer::{EditCommand, GrowthPolicy};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "gbd")]
    #[command(about = "🕳️ Watch a gap buffer move its gap around as you edit")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArgs {
        /// Initial capacity of the buffer, in chars.
        #[arg(long, default_value_t = 2)]
        pub capacity: usize,

        /// Text the buffer starts with. Must fit in `--capacity`.
        #[arg(long, default_value = "")]
        pub seed: String,

        /// How the buffer grows when the gap runs out: `doubling` or `fixed:<n>`.
        #[arg(long, default_value = "doubling", value_parser = parse_growth_policy)]
        pub growth: GrowthPolicy,

        /// Edits to apply in order: `insert:<pos>:<char>`, `type:<pos>:<text>`,
        /// `delete:<pos>:<count>`, or `cursor:<pos>`.
        #[arg(value_parser = parse_edit_command)]
        pub commands: Vec<EditCommand>,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `log.txt` for debugging."
        )]
        pub enable_logging: bool,

        #[arg(
            global = true,
            long,
            default_value = "debug",
            help = "Most verbose level written to the log file: error, warn, info, debug, or trace."
        )]
        pub log_level: tracing::Level,
    }

    fn parse_growth_policy(input: &str) -> Result<GrowthPolicy, String> {
        input.parse().map_err(|err: miette::Report| err.to_string())
    }

    fn parse_edit_command(input: &str) -> Result<EditCommand, String> {
        input.parse().map_err(|err: miette::Report| err.to_string())
    }
}
