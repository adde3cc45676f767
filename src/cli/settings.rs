//! Settings display with API keys scrubbed.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Replace each known API key in `text` with `...` and its last four characters.
pub fn scrub_sensitive_info(
    openai_api_key: Option<&str>,
    anthropic_api_key: Option<&str>,
    text: &str,
) -> String {
    let mut result = text.to_string();
    for key in [openai_api_key, anthropic_api_key].into_iter().flatten() {
        if key.is_empty() {
            continue;
        }
        let tail: String = {
            let chars: Vec<char> = key.chars().collect();
            chars[chars.len().saturating_sub(4)..].iter().collect()
        };
        result = result.replace(key, &format!("...{tail}"));
    }
    result
}

/// Render `args` as a sorted `Option settings:` listing.
pub fn format_settings<T>(
    args: &T,
    openai_api_key: Option<&str>,
    anthropic_api_key: Option<&str>,
) -> String
where
    T: Serialize,
{
    let mut output = String::from("Option settings:\n");
    let value = serde_json::to_value(args).unwrap_or(Value::Null);

    if let Value::Object(map) = value {
        let entries: BTreeMap<String, String> = map
            .into_iter()
            .map(|(key, value)| (key, render_value(&value)))
            .collect();

        for (key, val) in entries {
            let val = scrub_sensitive_info(openai_api_key, anthropic_api_key, &val);
            output.push_str(&format!("  - {key}: {val}\n"));
        }
    }

    output
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
