use tracing::debug;

use crate::error::{Residual, UncoveredTagError};
use crate::log_line::LogLine;

crate::closed_tags! {
    /// The two levels the lesson starts with.
    pub enum LogLevel {
        Error,
        Info,
    }
}

/// Formats `message` under `level`.
///
/// There is one arm per level and no wildcard. Adding a level to the set
/// without adding its arm does not compile:
///
/// ```compile_fail,E0004
/// use exhaustive_cases::{closed_tags, LogLine};
///
/// closed_tags! {
///     enum LogLevel { Error, Info, Warning }
/// }
///
/// fn log(level: LogLevel, message: &str) -> LogLine {
///     match level {
///         LogLevel::Error => LogLine::new("Error", message),
///         LogLevel::Info => LogLine::new("Info", message),
///     }
/// }
/// ```
///
/// ```
/// use exhaustive_cases::dispatch::checked::{log, LogLevel};
///
/// let line = log(LogLevel::Error, "Failed to stop Dr. Kronish!");
/// assert_eq!(line, "Error: Failed to stop Dr. Kronish!");
/// ```
pub fn log(level: LogLevel, message: &str) -> LogLine {
    debug!(%level, "dispatching log line");
    match level {
        LogLevel::Error => LogLine::new("Error", message),
        LogLevel::Info => LogLine::new("Info", message),
    }
}

/// Formats a level that may not have been resolved to a `LogLevel`.
///
/// The `Err` arm is the catch-all. With `R = Infallible` it is uninhabited and
/// costs nothing; with `R = UncoveredTagError` reaching it panics.
pub fn log_resolved<R: Residual>(level: Result<LogLevel, R>, message: &str) -> LogLine {
    match level {
        Ok(LogLevel::Error) => LogLine::new("Error", message),
        Ok(LogLevel::Info) => LogLine::new("Info", message),
        Err(residual) => residual.assert_never(),
    }
}

/// Parses `label` and formats `message` under it.
pub fn log_label(label: &str, message: &str) -> Result<LogLine, UncoveredTagError> {
    let level: LogLevel = label.parse()?;
    Ok(log(level, message))
}
