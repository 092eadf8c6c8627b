//! Aggregation model: fold parsed access-log records into running statistics.

pub mod summary;

pub use summary::Summary;

use crate::log::{LogRecord, Method, parse_line};
use std::collections::BTreeMap;

/// Number of slowest requests kept by the accumulator.
pub const SLOW_CAPACITY: usize = 3;

/// Per-run statistics over every record passed to [`Accumulator::process`].
///
/// One accumulator is shared across all input files of a run, so the order
/// records arrive in matters: it decides which of several equally slow
/// requests survive in the slow list.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    total: u64,
    method_counts: BTreeMap<Method, u64>,
    ip_counts: BTreeMap<String, u64>,

    /// Sorted by duration desc; equal durations keep arrival order.
    slowest: Vec<LogRecord>,
}

/// Tally of lines fed through the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub matched: u64,
    pub skipped: u64,
}

impl LineStats {
    pub fn add(&mut self, other: LineStats) {
        self.matched += other.matched;
        self.skipped += other.skipped;
    }
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn method_counts(&self) -> &BTreeMap<Method, u64> {
        &self.method_counts
    }

    pub fn ip_counts(&self) -> &BTreeMap<String, u64> {
        &self.ip_counts
    }

    pub fn slowest(&self) -> &[LogRecord] {
        &self.slowest
    }

    /// Fold one record into the running statistics.
    pub fn process(&mut self, record: LogRecord) {
        self.total += 1;
        *self.method_counts.entry(record.method).or_default() += 1;
        *self.ip_counts.entry(record.ip.clone()).or_default() += 1;
        self.admit_slow(record);
    }

    /// Parse a raw line and process it if it matches. Returns whether it did.
    pub fn consume_line(&mut self, line: &str) -> bool {
        match parse_line(line) {
            Some(record) => {
                self.process(record);
                true
            }
            None => false,
        }
    }

    pub fn consume_lines<I, S>(&mut self, lines: I) -> LineStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = LineStats::default();
        for line in lines {
            if self.consume_line(line.as_ref()) {
                stats.matched += 1;
            } else {
                stats.skipped += 1;
            }
        }
        stats
    }

    /// Combine another accumulator's results into this one.
    ///
    /// Counters are summed. The other side's slow requests go through the
    /// same admission rule as live records, in their kept order.
    pub fn merge(&mut self, other: Accumulator) {
        self.total += other.total;
        for (method, count) in other.method_counts {
            *self.method_counts.entry(method).or_default() += count;
        }
        for (ip, count) in other.ip_counts {
            *self.ip_counts.entry(ip).or_default() += count;
        }
        for record in other.slowest {
            self.admit_slow(record);
        }
    }

    // Compare against the current minimum only, then append, re-sort and
    // truncate. A candidate that merely ties the minimum is rejected once the
    // list is full, so the first-seen record wins.
    fn admit_slow(&mut self, record: LogRecord) {
        let admit = match self.slowest.last() {
            Some(min) if self.slowest.len() >= SLOW_CAPACITY => record.duration > min.duration,
            _ => true,
        };
        if !admit {
            return;
        }

        self.slowest.push(record);
        self.slowest.sort_by(|a, b| b.duration.cmp(&a.duration));
        self.slowest.truncate(SLOW_CAPACITY);
    }
}
