/// Parts of a line starting with `YYYY-MM-DD HH:MM:SS LEVEL:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLineHeader<'a> {
    pub timestamp: &'a str,
    pub level: &'a str,
    pub remainder: &'a str,
}

/// Length of `YYYY-MM-DD HH:MM:SS`.
const TIMESTAMP_LEN: usize = 19;

/// Byte layout of the timestamp: `d` is an ASCII digit, anything else is a
/// literal separator.
const TIMESTAMP_SHAPE: &[u8; TIMESTAMP_LEN] = b"dddd-dd-dd dd:dd:dd";

pub fn match_log_line(line: &str) -> Option<LogLineHeader<'_>> {
    let bytes = line.as_bytes();
    if bytes.len() < TIMESTAMP_LEN {
        return None;
    }

    for (&b, &shape) in bytes.iter().zip(TIMESTAMP_SHAPE.iter()) {
        let ok = match shape {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        };
        if !ok {
            return None;
        }
    }

    let mut pos = TIMESTAMP_LEN;
    if bytes.get(pos) != Some(&b' ') {
        return None;
    }
    pos += 1;

    let level_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_uppercase) {
        pos += 1;
    }
    if pos == level_start || bytes.get(pos) != Some(&b':') {
        return None;
    }
    let level_end = pos;

    // Everything matched so far is ASCII, so these are char boundaries.
    Some(LogLineHeader {
        timestamp: &line[..TIMESTAMP_LEN],
        level: &line[level_start..level_end],
        remainder: strip_line_ending(&line[level_end + 1..]),
    })
}

fn strip_line_ending(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}
