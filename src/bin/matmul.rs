use std::process::ExitCode;

use clap::Parser;
use memprobe::cli::MatmulArgs;
use memprobe::{matmul, runner};

fn main() -> ExitCode {
    let args = MatmulArgs::parse();
    runner::execute("matmul", args.verbose, || matmul::run(&args))
}
