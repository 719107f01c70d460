//! Payment System CLI
//!
//! Runs the built-in payment scenario against a wallet and prints each
//! confirmation followed by the remaining balance. Command-line arguments
//! are ignored.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace deductions and dispatch on stderr

use payment_system::{Result, Scenario};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    Scenario::demo().run(&mut handle)?;

    Ok(())
}
