use anyhow::Result;
use serde_json::Value;

/// Renders the response body for stdout.
pub fn render_json(data: &Value, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(json)
}
