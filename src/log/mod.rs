//! Access-log line grammar and the record it produces.

pub mod parse;
pub mod record;

pub use parse::parse_line;
pub use record::{LogRecord, Method};
