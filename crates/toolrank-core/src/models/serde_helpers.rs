//! Lenient field deserializers for records produced by external collaborators.
//!
//! A malformed field never rejects the whole record: it deserializes to
//! `None` and the scoring layer applies that field's documented default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse RFC 3339, `YYYY-MM-DD HH:MM:SS`, or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_datetime(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    parse_date(input).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc())
}

/// Parse `YYYY-MM-DD`, or the date part of a full timestamp.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(input).ok().map(|dt| dt.date_naive()))
}

pub fn datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => {
            let parsed = parse_datetime(&s);
            if parsed.is_none() {
                tracing::warn!(value = %s, "unparseable timestamp, treating as absent");
            }
            parsed
        }
        Some(other) => {
            tracing::warn!(value = %other, "non-string timestamp, treating as absent");
            None
        }
    })
}

pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let parsed = parse_date(&s);
            if parsed.is_none() {
                tracing::warn!(value = %s, "unparseable date, treating as absent");
            }
            parsed
        }
        _ => None,
    })
}

/// Non-negative finite number; numeric strings are accepted.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(signed_value(Option::<Value>::deserialize(deserializer)?).filter(|v| *v >= 0.0))
}

/// Finite number of either sign; numeric strings are accepted.
pub fn signed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(signed_value(Option::<Value>::deserialize(deserializer)?))
}

/// Non-negative integer count; fractional values are truncated.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(signed_value(Option::<Value>::deserialize(deserializer)?)
        .filter(|v| *v >= 0.0)
        .map(|v| v as u64))
}

/// Any value that fails to deserialize as `T` (wrong type, null, unknown
/// shape) becomes `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            tracing::warn!(value = %value, error = %e, "malformed field, using default");
            T::default()
        }),
    })
}

/// Boolean flag; `"true"`/`"yes"`/`1` and `"false"`/`"no"`/`0` are accepted.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) if n.as_f64() == Some(1.0) => Some(true),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Some(false),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => {
                tracing::warn!(value = %s, "unparseable flag, treating as absent");
                None
            }
        },
        Some(other) => {
            tracing::warn!(value = %other, "non-boolean flag, treating as absent");
            None
        }
    })
}

/// Free text; numbers are stringified, anything else is empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => {
            tracing::warn!(value = %other, "non-text field, treating as absent");
            None
        }
    })
}

/// List of strings. A bare string becomes a one-element list; null and
/// non-list values become empty; non-text elements are dropped.
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => vec![s],
        Some(Value::Array(items)) => {
            let total = items.len();
            let kept: Vec<String> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect();
            if kept.len() < total {
                tracing::warn!(dropped = total - kept.len(), "non-text list elements dropped");
            }
            kept
        }
        Some(other) => {
            tracing::warn!(value = %other, "non-list field, treating as empty");
            Vec::new()
        }
    })
}

fn signed_value(value: Option<Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_timestamp_shapes() {
        assert!(parse_datetime("2025-07-01T12:00:00Z").is_some());
        assert!(parse_datetime("2025-07-01 12:00:00").is_some());
        assert_eq!(
            parse_datetime("2025-07-01").map(|d| d.to_rfc3339()),
            Some("2025-07-01T00:00:00+00:00".to_string())
        );
        assert!(parse_datetime("last tuesday").is_none());
    }

    #[test]
    fn numeric_strings_with_separators_are_accepted() {
        assert_eq!(signed_value(Some(Value::String("1,200".into()))), Some(1200.0));
        assert_eq!(signed_value(Some(Value::String("n/a".into()))), None);
        assert_eq!(signed_value(Some(Value::Bool(true))), None);
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Shapes {
        #[serde(deserialize_with = "flag")]
        flag: Option<bool>,
        #[serde(deserialize_with = "strings")]
        list: Vec<String>,
        #[serde(deserialize_with = "or_default")]
        count: u32,
    }

    #[test]
    fn flags_lists_and_defaults_tolerate_bad_shapes() {
        let s: Shapes = serde_json::from_str(r#"{"flag":"Yes","list":"solo","count":"x"}"#).unwrap();
        assert_eq!(s.flag, Some(true));
        assert_eq!(s.list, vec!["solo"]);
        assert_eq!(s.count, 0);

        let s: Shapes = serde_json::from_str(r#"{"flag":{},"list":[1,null,"b"],"count":null}"#).unwrap();
        assert_eq!(s.flag, None);
        assert_eq!(s.list, vec!["1", "b"]);
        assert_eq!(s.count, 0);
    }
}
