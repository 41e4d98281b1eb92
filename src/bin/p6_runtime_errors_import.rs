//! Pattern 6: Runtime Errors from an Untyped Module
//! Example: The report compiles fine and still congratulates nobody
//!
//! Run with: cargo run --bin p6_runtime_errors_import

use anyhow::Context;
use colored::Colorize;
use exhaustive_cases::console;
use exhaustive_cases::scores::{audit_report, congratulate_player, legacy, sample_roster};

fn main() -> anyhow::Result<()> {
    console::init();

    let players = sample_roster();
    let player_report =
        legacy::report_player_scores(&players).context("failed to score the roster")?;

    println!("{player_report}");
    println!("{}", congratulate_player(&player_report["topPlayer"]));

    for defect in audit_report(&player_report) {
        eprintln!("{} {}", "defect:".yellow().bold(), defect);
    }

    Ok(())
}
