use std::convert::Infallible;

use thiserror::Error;

/// A tag value reached a dispatcher that has no arm for it.
///
/// This is a programming defect. [`assert_never`] turns it into a panic, so it
/// terminates the current run instead of producing a log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unexpected object: {value}")]
pub struct UncoveredTagError {
    value: String,
}

impl UncoveredTagError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The offending value, as it was presented.
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("cannot report scores for an empty roster")]
    EmptyRoster,
    #[error("total hit points overflow an i64")]
    HpOverflow,
}

/// What is left over after every explicit arm of a dispatch has matched.
///
/// When the arms cover the whole tag set the residual is [`Infallible`] and
/// the catch-all arm can never run. When the value came from somewhere the
/// compiler cannot see, such as a parsed label, the residual is an
/// [`UncoveredTagError`] and reaching the catch-all is fatal.
pub trait Residual {
    fn assert_never(self) -> !;
}

impl Residual for Infallible {
    fn assert_never(self) -> ! {
        match self {}
    }
}

impl Residual for UncoveredTagError {
    fn assert_never(self) -> ! {
        tracing::error!(value = %self.value, "uncovered tag reached the catch-all arm");
        panic!("{self}")
    }
}

/// The catch-all arm of a dispatcher.
pub fn assert_never<R: Residual>(residual: R) -> ! {
    residual.assert_never()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncovered_tag_message_names_the_value() {
        let err = UncoveredTagError::new("Warning");
        assert_eq!(err.value(), "Warning");
        assert_eq!(err.to_string(), "Unexpected object: Warning");
    }

    #[test]
    #[should_panic(expected = "Unexpected object: Debug")]
    fn assert_never_on_uncovered_tag_panics() {
        assert_never(UncoveredTagError::new("Debug"));
    }

    #[test]
    fn infallible_residual_is_never_produced() {
        let resolved: Result<u8, Infallible> = Ok(3);
        let value = match resolved {
            Ok(value) => value,
            Err(never) => assert_never(never),
        };
        assert_eq!(value, 3);
    }

    #[test]
    fn empty_roster_message() {
        assert_eq!(
            ScoreError::EmptyRoster.to_string(),
            "cannot report scores for an empty roster"
        );
        assert_eq!(ScoreError::HpOverflow.to_string(), "total hit points overflow an i64");
    }
}
