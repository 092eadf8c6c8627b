use crate::Result;
use crate::model::Summary;
use anyhow::Context;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Render the summary as pretty-printed JSON with 4-space indentation.
pub fn render_json_summary(summary: &Summary) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    summary.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write the rendered summary to `path`, replacing any existing file.
pub fn write_summary(path: &Path, summary: &Summary) -> Result<String> {
    let json = render_json_summary(summary)?;
    fs::write(path, &json).with_context(|| format!("write summary {}", path.display()))?;
    Ok(json)
}
