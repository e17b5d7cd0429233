use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::value_kind;

/// A display string. Numbers and booleans are written out as text; any other
/// shape is dropped with a warning.
pub fn display_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            log::warn!("expected text, found {}; ignoring it", value_kind(&other));
            None
        }
    })
}

/// `T`, or `T::default()` with a warning when the value has the wrong shape.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        log::warn!("ignoring malformed value: {e}");
        T::default()
    }))
}

/// A list whose malformed entries are skipped. Anything other than a list
/// yields an empty one.
pub fn seq_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            log::warn!("expected a list, found {}; ignoring it", value_kind(&other));
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .filter_map(|item| {
            T::deserialize(item)
                .inspect_err(|e| log::warn!("skipping malformed list entry: {e}"))
                .ok()
        })
        .collect())
}
