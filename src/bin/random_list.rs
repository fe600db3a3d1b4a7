use std::process::ExitCode;

use clap::Parser;
use memprobe::cli::RandomListArgs;
use memprobe::{pointer_chase, runner};

fn main() -> ExitCode {
    let args = RandomListArgs::parse();
    runner::execute("random_list", args.verbose, || pointer_chase::run(&args))
}
