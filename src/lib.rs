//! Access-log summarizer: parse web-server request lines and report request
//! totals, per-method counts, the busiest client IPs and the slowest requests.

pub mod input;
pub mod log;
pub mod logging;
pub mod model;
pub mod render;

pub type Result<T> = anyhow::Result<T>;
