//! Command-line front end.
//!
//! ```text
//! cachesim <cache_size> <memory_size> <F|L> <ref>...
//! ```
//!
//! Prints one line on stdout: the hit ratio, or the reason the input was
//! rejected. Diagnostics controlled by `-v` go to stderr.

use clap::Parser;
use log::LevelFilter;

use cachesim::{render_error, SimConfig};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    version,
    about = "Simulate FIFO or LRU cache replacement and print the hit ratio",
    allow_negative_numbers = true
)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// <cache_size> <memory_size> <policy: F|L> <ref>...
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    // Rejections are reported, not signalled through the exit code.
    match SimConfig::from_args(&args.args) {
        Ok(config) => println!("{}", config.run()),
        Err(err) => println!("{}", render_error(&err)),
    }
}
