use std::fmt;

/// The output of a dispatch: `"<Tag>: <Message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogLine(String);

impl LogLine {
    pub fn new(label: &str, message: &str) -> Self {
        LogLine(format!("{label}: {message}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for LogLine {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LogLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
