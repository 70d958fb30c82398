//! Lenient field decoders.
//!
//! Stored collections are written by page scripts with no validation, so a
//! field can hold any JSON type. These decoders turn a wrongly typed field
//! into `None` instead of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode an optional field, treating a value of the wrong type as absent.
///
/// Use with `#[serde(default, deserialize_with = "crate::de::lenient")]`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Decode an identifier that may be stored as a string or a number.
///
/// Older records use numeric ids; they compare as their decimal text.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_text))
}

/// The string form of a JSON id value, if it has one.
///
/// Strings are returned as-is and numbers in their decimal form. Anything
/// else (objects, arrays, booleans, null) has no usable id.
pub fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
