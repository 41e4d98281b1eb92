use tracing::debug;

use crate::error::{assert_never, UncoveredTagError};
use crate::log_line::LogLine;

crate::closed_tags! {
    /// The lesson's levels after `Warning` was added.
    pub enum LogLevel {
        Error,
        Info,
        Warning,
    }
}

/// Formats `message` under `level`, except that nobody added the `Warning` arm.
///
/// The wildcard arm keeps this compiling, so the missing arm only shows up at
/// run time: `Warning` falls into the catch-all and panics.
///
/// ```should_panic
/// use exhaustive_cases::dispatch::unchecked::{log, LogLevel};
///
/// log(LogLevel::Warning, "Low on Cameronium.");
/// ```
#[allow(clippy::wildcard_enum_match_arm)]
pub fn log(level: LogLevel, message: &str) -> LogLine {
    debug!(%level, "dispatching log line");
    match level {
        LogLevel::Error => LogLine::new("Error", message),
        LogLevel::Info => LogLine::new("Info", message),
        // LogLevel::Warning => LogLine::new("Warning", message),
        uncovered => assert_never(UncoveredTagError::new(uncovered.label())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn covered_levels_still_format() {
        assert_eq!(log(LogLevel::Error, "a"), "Error: a");
        assert_eq!(log(LogLevel::Info, "b"), "Info: b");
    }

    #[test]
    #[should_panic(expected = "Unexpected object: Warning")]
    fn warning_crashes_at_run_time() {
        log(LogLevel::Warning, "Low on Cameronium.");
    }

    #[test]
    fn only_warning_is_uncovered() {
        let uncovered: Vec<LogLevel> = LogLevel::ALL
            .iter()
            .copied()
            .filter(|&level| panic::catch_unwind(|| log(level, "probe")).is_err())
            .collect();
        assert_eq!(uncovered, vec![LogLevel::Warning]);
    }
}
