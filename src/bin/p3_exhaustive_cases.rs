//! Pattern 3: Exhaustive Cases
//! Example: One arm per log level, checked by the compiler
//!
//! Run with: cargo run --bin p3_exhaustive_cases

use exhaustive_cases::console;
use exhaustive_cases::dispatch::checked::{log, LogLevel};

fn main() {
    console::init();

    println!("{}", log(LogLevel::Error, "Failed to stop Dr. Kronish!"));
}
