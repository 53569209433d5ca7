//! `b64` — base64 encode, decode and inspect stdin.
//!
//! Usage:
//!   b64 encode [--url]
//!   b64 decode [--url]
//!   b64 info
//!   b64 check
//!
//! Log verbosity is taken from the `B64_LOG` environment variable.

use b64_codec::cli::{run, CliOptions};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_env("B64_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&options, &input) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(&output).and_then(|()| stdout.flush()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
