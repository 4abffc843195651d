//! bobbin-tests - interactive test runner for the bobbin emulator
//!
//! Exits 0 when every registered test passes, 1 otherwise.

use bobbin_tests::cli::{self, Cli};
use bobbin_tests::common::logging;
use clap::Parser;

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
