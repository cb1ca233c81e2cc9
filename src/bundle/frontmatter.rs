//! Parse optional YAML frontmatter from markdown resources.
//!
//! Only used for display purposes; the writer emits resource content
//! verbatim and never rewrites frontmatter.

use serde_yaml::Value;

/// Parse content into optional YAML frontmatter (between first `---` and
/// second `---`) and body. Returns `None` if no valid frontmatter
/// (missing delimiters or not a mapping).
pub fn parse_frontmatter_and_body(content: &str) -> Option<(Value, String)> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() < 3 || lines[0].trim() != "---" {
        return None;
    }
    let end_idx = lines[1..].iter().position(|l| l.trim() == "---")?;
    let end_idx = end_idx + 1;
    let frontmatter_str = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..].join("\n");
    let value: Value = serde_yaml::from_str(&frontmatter_str).ok()?;
    if value.as_mapping().is_none() && !value.is_null() {
        return None;
    }
    Some((value, body))
}

/// Get a string value from a frontmatter Value by top-level key.
pub fn get_str(value: &Value, key: &str) -> Option<String> {
    let mapping = value.as_mapping()?;
    let v = mapping.get(Value::String(key.to_string()))?;
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract the `description` field from a markdown resource, if any.
pub fn description_of(content: &str) -> Option<String> {
    let (frontmatter, _) = parse_frontmatter_and_body(content)?;
    get_str(&frontmatter, "description")
}
