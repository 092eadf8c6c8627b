use crate::log::{LogRecord, Method};
use crate::model::Accumulator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many IPs the default summary reports.
pub const DEFAULT_TOP_IPS: usize = 3;

/// Final, immutable result of a run. Serialized as-is into the output JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_requests: u64,
    pub method_counts: BTreeMap<Method, u64>,

    /// `[ip, count]` pairs, highest count first.
    pub top_ips: Vec<(String, u64)>,

    /// Slowest requests, highest duration first.
    pub slow_requests: Vec<LogRecord>,
}

impl Accumulator {
    /// The `n` most frequent client IPs, by request count desc.
    ///
    /// Order among IPs with equal counts is not part of the contract; today
    /// it follows the histogram's key order.
    pub fn top_ips(&self, n: usize) -> Vec<(String, u64)> {
        let mut ips: Vec<(String, u64)> = self
            .ip_counts()
            .iter()
            .map(|(ip, count)| (ip.clone(), *count))
            .collect();
        ips.sort_by(|a, b| b.1.cmp(&a.1));
        ips.truncate(n);
        ips
    }

    pub fn build_summary(&self) -> Summary {
        Summary {
            total_requests: self.total(),
            method_counts: self.method_counts().clone(),
            top_ips: self.top_ips(DEFAULT_TOP_IPS),
            slow_requests: self.slowest().to_vec(),
        }
    }
}
