//! Pattern 4: Exhaustive Cases After the Set Grows
//! Example: `Warning` has no arm, so it crashes in the catch-all
//!
//! Run with: cargo run --bin p4_exhaustive_cases_warning

use exhaustive_cases::console;
use exhaustive_cases::dispatch::unchecked::{log, LogLevel};

fn main() {
    console::init();

    // Panics with "Unexpected object: Warning"
    println!("{}", log(LogLevel::Warning, "Low on Cameronium."));
}
