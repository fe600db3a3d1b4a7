use std::process::ExitCode;

use clap::Parser;
use memprobe::cli::SeqScanArgs;
use memprobe::{runner, seq_scan};

fn main() -> ExitCode {
    let args = SeqScanArgs::parse();
    runner::execute("seq_scan", args.verbose, || seq_scan::run(&args))
}
