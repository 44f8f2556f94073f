pub mod calc;
pub mod greet;
pub mod lists;
pub mod run;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use primer_common::config::{Config, DEFAULT_DELAY_MS, DEFAULT_THRESHOLD};
use primer_common::sequence::NumberSequence;

#[derive(Parser)]
#[command(name = "primer")]
#[command(about = "A short tour of everyday Rust: sequences, a calculator and a bit of async.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Milliseconds the async greeting waits before printing
    #[arg(long, global = true, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Hide the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce decorative output; repeat for less
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

/// Inputs for the commands that derive views from a sequence.
#[derive(Args, Clone)]
pub struct SequenceArgs {
    /// Comma separated integers to derive the views from
    #[arg(long, default_value = "5,2,8,1,9,3", allow_hyphen_values = true)]
    pub numbers: NumberSequence,

    /// Keep only numbers strictly greater than this
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i64,
}

impl Default for SequenceArgs {
    fn default() -> Self {
        Self {
            numbers: NumberSequence::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run the list showcase followed by the async greeting
    #[command(alias = "r")]
    Run(SequenceArgs),
    /// Derive doubled, filtered, sorted and summed views of the numbers
    #[command(alias = "l")]
    Lists(SequenceArgs),
    /// Add the operands one after another and show the calculator history
    #[command(alias = "c")]
    Calc {
        #[arg(required = true, num_args = 2.., allow_negative_numbers = true)]
        operands: Vec<i64>,
    },
    /// Wait for the configured delay, then greet
    #[command(alias = "g")]
    Greet,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The chosen subcommand, falling back to `run` with stock inputs.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(SequenceArgs::default()))
    }

    pub fn config(&self) -> Config {
        let threshold: i64 = match self.command() {
            Commands::Run(args) | Commands::Lists(args) => args.threshold,
            Commands::Calc { .. } | Commands::Greet => DEFAULT_THRESHOLD,
        };

        Config {
            no_banner: self.no_banner,
            quiet: self.quiet.min(2),
            delay: Duration::from_millis(self.delay_ms),
            threshold,
        }
    }
}
