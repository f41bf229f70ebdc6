/// A single log entry: the opening line plus every continuation line
/// that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// `YYYY-MM-DD HH:MM:SS`, carried through as text
    pub timestamp: String,
    /// Severity tag, e.g. `INFO`
    pub level: String,
    /// Text after `LEVEL:` on the opening line
    pub first_line_remainder: String,
    /// Opening remainder and all continuation lines, newline-terminated
    pub body: String,
}

impl LogEntry {
    pub fn new(timestamp: String, level: String, first_line_remainder: String) -> Self {
        let body = format!("{}\n", first_line_remainder);
        Self {
            timestamp,
            level,
            first_line_remainder,
            body,
        }
    }

    /// Collapsed header text: the timestamp, one space, then the remainder
    /// from its first space onward. A remainder without spaces is used whole.
    pub fn summary(&self) -> String {
        let remainder = self.first_line_remainder.as_str();
        let start = remainder.find(' ').unwrap_or(0);
        format!("{} {}", self.timestamp, &remainder[start..])
    }

    pub(crate) fn push_continuation(&mut self, line: &str) {
        self.body.push_str(line);
        if !line.ends_with('\n') {
            self.body.push('\n');
        }
    }
}
