//! Human-readable release report formatting.

use chrono::{Local, TimeZone};
use serde_yaml::Value;
use spinbrew_release::ReleaseInfo;

/// Prints one release's metadata fields, one per line: `- ` prefix on the
/// first field, two-space indent on the rest. `lastUpdate` is rendered as a
/// local-time string instead of raw epoch milliseconds.
pub fn print_release(release: &ReleaseInfo) {
    for (count, (key, value)) in release.fields().enumerate() {
        let prefix = if count == 0 { "- " } else { "  " };
        let rendered = if key.as_str() == Some("lastUpdate") {
            epoch_millis_to_local(value)
        } else {
            scalar_to_string(value)
        };
        println!("{prefix}{}: {rendered}", scalar_to_string(key));
    }
}

/// Renders an epoch-milliseconds value as `YYYY-MM-DD HH:MM:SS` in local
/// time. Values that are not epoch millis are passed through as-is.
fn epoch_millis_to_local(value: &Value) -> String {
    let millis = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    };
    millis
        .and_then(|ms| Local.timestamp_opt(ms / 1000, 0).single())
        .map_or_else(
            || scalar_to_string(value),
            |at| at.format("%Y-%m-%d %H:%M:%S").to_string(),
        )
}

/// Renders a YAML scalar for report output.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_owned())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_millis_truncate_to_seconds() {
        let rendered = epoch_millis_to_local(&Value::Number(1_533_119_348_000_i64.into()));
        let expected = Local
            .timestamp_opt(1_533_119_348, 0)
            .single()
            .expect("valid timestamp")
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn non_epoch_value_passes_through() {
        let rendered = epoch_millis_to_local(&Value::String("unknown".to_owned()));
        assert_eq!(rendered, "unknown");
    }

    #[test]
    fn scalars_render_without_quotes() {
        assert_eq!(scalar_to_string(&Value::String("1.2.3".to_owned())), "1.2.3");
        assert_eq!(scalar_to_string(&Value::Bool(true)), "true");
        assert_eq!(scalar_to_string(&Value::Null), "null");
    }
}
