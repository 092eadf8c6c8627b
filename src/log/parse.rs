use crate::log::record::{LogRecord, Method};
use once_cell::sync::Lazy;
use regex::Regex;

/// Access-log line pattern.
///
/// Pieces are matched in order, each separated by arbitrary (non-greedy) text:
/// 1) ip:       dotted quad, shape only (no octet range check)
/// 2) date:     anything between `[` and `]`, kept verbatim
/// 3) request:  `"METHOD url ...trailing..."` followed by a space
/// 4) duration: integer token at the very end of the line
///
/// Example:
/// 1.2.3.4 - - [10/Oct/2020:13:55:36] "GET /index.html HTTP/1.1" 200 150
const LOG_LINE_RE: &str = concat!(
    r#"(?P<ip>[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}).*?"#,
    r#"\[(?P<date>.*?)\].*?"#,
    r#""(?P<method>GET|POST|PUT|DELETE|HEAD|OPTIONS) "#,
    r#"(?P<url>\S+).*?" "#,
    r#"(?:.*? )?(?P<duration>[0-9]+)$"#,
);

static LOG_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOG_LINE_RE).expect("access log pattern compiles"));

/// Parse one access-log line into a record.
///
/// Lines that don't fit the grammar yield `None`; callers skip them silently.
/// A trailing line terminator (`\n` or `\r\n`) is ignored.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let caps = LOG_LINE.captures(line)?;

    // Digit runs too long for u64 are treated like any other mismatch.
    let duration = caps.name("duration")?.as_str().parse::<u64>().ok()?;
    let method: Method = caps.name("method")?.as_str().parse().ok()?;

    Some(LogRecord {
        ip: caps.name("ip")?.as_str().to_string(),
        method,
        url: caps.name("url")?.as_str().to_string(),
        date: caps.name("date")?.as_str().to_string(),
        duration,
    })
}
