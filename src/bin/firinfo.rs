//! firinfo: inspect FIR filter descriptor files from the command line.
//!
//! Prints a summary block per file, or the specific load error when a
//! file fails to parse. Exit status is nonzero if any file failed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use firkin::read_filter;

/// Inspect FIR filter descriptor files
#[derive(Parser, Debug)]
#[command(name = "firinfo", version, about)]
struct Args {
    /// Descriptor files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also list every tap coefficient
    #[arg(long)]
    taps: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut failures = 0usize;
    for path in &args.files {
        println!("{}:", path.display());
        match read_filter(path) {
            Ok(d) => {
                let dc_gain: f64 = d.coefficients.iter().sum();
                println!("  name:    {}", d.name);
                println!("  type:    {}", d.kind);
                println!("  order:   {} ({} taps)", d.order, d.tap_count());
                println!("  sfreq:   {} Hz", d.sampling_frequency);
                println!("  dc gain: {dc_gain}");
                if args.taps {
                    for (i, c) in d.coefficients.iter().enumerate() {
                        println!("  h[{i}] = {c}");
                    }
                }
            }
            Err(e) => {
                println!("  error: {e}");
                failures += 1;
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
