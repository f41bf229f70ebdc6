use crate::line_pattern::match_log_line;
use crate::log_entry::LogEntry;
use log::debug;
use std::iter::FusedIterator;

/// Groups raw lines into [`LogEntry`] values.
///
/// A line matching the entry pattern closes the entry in progress and opens
/// a new one. Other lines are appended to the open entry, or dropped when no
/// entry has been opened yet. Lines may carry their line terminator.
pub struct LogEntries<I> {
    lines: I,
    current: Option<LogEntry>,
    discarded: usize,
    exhausted: bool,
}

pub fn parse_entries<I, S>(lines: I) -> LogEntries<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LogEntries::new(lines.into_iter())
}

/// Parses a whole text buffer, keeping each line's terminator.
pub fn parse_str(text: &str) -> Vec<LogEntry> {
    parse_entries(text.split_inclusive('\n')).collect()
}

impl<I, S> LogEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            current: None,
            discarded: 0,
            exhausted: false,
        }
    }
}

impl<I, S> Iterator for LogEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = LogEntry;

    fn next(&mut self) -> Option<LogEntry> {
        if self.exhausted {
            return None;
        }

        for line in self.lines.by_ref() {
            let line = line.as_ref();

            let Some(header) = match_log_line(line) else {
                match self.current.as_mut() {
                    Some(entry) => entry.push_continuation(line),
                    None => self.discarded += 1,
                }
                continue;
            };

            if self.current.is_none() && self.discarded > 0 {
                debug!("Discarded {} line(s) before first log entry", self.discarded);
            }

            debug!("Log entry at {} [{}]", header.timestamp, header.level);
            let opened = LogEntry::new(
                header.timestamp.to_string(),
                header.level.to_string(),
                header.remainder.to_string(),
            );

            if let Some(done) = self.current.replace(opened) {
                return Some(done);
            }
        }

        self.exhausted = true;
        if self.current.is_none() && self.discarded > 0 {
            debug!("No log entry found in {} line(s)", self.discarded);
        }
        self.current.take()
    }
}

impl<I, S> FusedIterator for LogEntries<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_single_entry_with_continuation() {
        let entries = parse_str("2023-01-01 10:00:00 INFO: hello\nworld\n");
        assert_eq!(
            entries,
            vec![LogEntry {
                timestamp: "2023-01-01 10:00:00".to_string(),
                level: "INFO".to_string(),
                first_line_remainder: " hello".to_string(),
                body: " hello\nworld\n".to_string(),
            }]
        );
    }

    #[test]
    fn test_leading_garbage_is_discarded() {
        let entries = parse_str("garbage\n2023-01-01 10:00:00 ERROR: boom\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, "ERROR");
        assert_eq!(entries[0].body, " boom\n");
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse_str("").is_empty());
        assert_eq!(parse_entries(Vec::<String>::new()).count(), 0);
    }

    #[test]
    fn test_no_matching_lines_yields_nothing() {
        assert!(parse_str("a\nb\n  2023-01-01 10:00:00 INFO: indented\n").is_empty());
    }

    #[test]
    fn test_back_to_back_entries() {
        let entries =
            parse_str("2023-01-01 10:00:00 INFO: a\n2023-01-01 10:00:01 WARN: b\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body, " a\n");
        assert_eq!(entries[1].timestamp, "2023-01-01 10:00:01");
        assert_eq!(entries[1].level, "WARN");
        assert_eq!(entries[1].body, " b\n");
    }

    #[test]
    fn test_continuations_belong_to_preceding_entry() {
        let text = "\
2023-01-01 10:00:00 INFO: first
  one
  two
2023-01-01 10:00:01 DEBUG: second
2023-01-01 10:00:02 ERROR: third
Traceback:
  line 2023-01-01 10:00:03 INFO: not a boundary
";
        let entries = parse_str(text);
        let bodies: Vec<&str> = entries.iter().map(|e| e.body.as_str()).collect();
        assert_eq!(
            bodies,
            vec![
                " first\n  one\n  two\n",
                " second\n",
                " third\nTraceback:\n  line 2023-01-01 10:00:03 INFO: not a boundary\n",
            ]
        );
    }

    #[test]
    fn test_prepending_garbage_does_not_change_result() {
        let text = "2023-01-01 10:00:00 INFO: a\nx\n2023-01-01 10:00:01 INFO: b\n";
        let prefixed = format!("noise\nmore noise\n\n{}", text);
        assert_eq!(parse_str(text), parse_str(&prefixed));
    }

    #[test]
    fn test_missing_final_newline() {
        let entries = parse_str("2023-01-01 10:00:00 INFO: a\ntail");
        assert_eq!(entries[0].body, " a\ntail\n");

        let entries = parse_str("2023-01-01 10:00:00 INFO: a");
        assert_eq!(entries[0].body, " a\n");
    }

    #[test]
    fn test_crlf_continuations_are_verbatim() {
        let entries = parse_str("2023-01-01 10:00:00 INFO: a\r\nb\r\n");
        assert_eq!(entries[0].first_line_remainder, " a");
        assert_eq!(entries[0].body, " a\nb\r\n");
    }

    #[test]
    fn test_lines_without_terminators() {
        let lines = ["2023-01-01 10:00:00 INFO: a", "b", "2023-01-01 10:00:01 INFO: c"];
        let entries: Vec<LogEntry> = parse_entries(lines).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].body, " a\nb\n");
        assert_eq!(entries[1].body, " c\n");
    }

    #[test]
    fn test_is_lazy_and_fused() {
        let pulled = Cell::new(0);
        let lines = [
            "2023-01-01 10:00:00 INFO: a\n",
            "2023-01-01 10:00:01 INFO: b\n",
            "2023-01-01 10:00:02 INFO: c\n",
        ]
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1));

        let mut entries = parse_entries(lines);
        assert_eq!(entries.next().unwrap().first_line_remainder, " a");
        assert_eq!(pulled.get(), 2);
        assert!(entries.next().is_some());
        assert!(entries.next().is_some());
        assert_eq!(pulled.get(), 3);
        assert!(entries.next().is_none());
        assert!(entries.next().is_none());
    }
}
