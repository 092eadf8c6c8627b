//! Output rendering for the finished summary.

pub mod json;

pub use json::{render_json_summary, write_summary};
