use std::collections::BTreeMap;

/// Field values entered by the user, keyed by field name.
///
/// Owned by the surrounding application (forms, persisted profile). The engine only reads it.
pub type UserData = BTreeMap<String, serde_json::Value>;

/// Strict equality between a user-data field and an expected string value.
///
/// Only a JSON string equal to `expected` matches; `"true"` does not match boolean `true`.
pub fn field_matches(data: &UserData, field: &str, expected: &str) -> bool {
    matches!(data.get(field), Some(serde_json::Value::String(s)) if s == expected)
}
