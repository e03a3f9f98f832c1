use serde_json::Value;

use crate::types::{Step, UserData};

/// Required fields of `step` not yet satisfied by `data`, in declaration order.
///
/// A field is missing when it is absent, `null`, a blank string, or an array shorter
/// than the step's `minItems` (one entry when unset).
pub fn missing_fields<'s>(step: &'s Step, data: &UserData) -> Vec<&'s str> {
    let min_items = step.min_items.unwrap_or(1) as usize;
    step.required
        .iter()
        .filter(|field| !is_present(data.get(field.as_str()), min_items))
        .map(String::as_str)
        .collect()
}

pub fn is_step_complete(step: &Step, data: &UserData) -> bool {
    missing_fields(step, data).is_empty()
}

fn is_present(value: Option<&Value>, min_items: usize) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => items.len() >= min_items,
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn step(required: &[&str], min_items: Option<u32>) -> Step {
        Step {
            id: "s".into(),
            name: "S".into(),
            route: "/s".into(),
            required: required.iter().map(|s| s.to_string()).collect(),
            min_items,
            description: None,
            conditional: None,
            validation: None,
        }
    }

    fn data(v: serde_json::Value) -> UserData {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn blank_and_null_values_are_missing() {
        let s = step(&["name", "bio", "age"], None);
        let d = data(json!({"name": "  ", "bio": null, "age": 31}));
        assert_eq!(missing_fields(&s, &d), vec!["name", "bio"]);
    }

    #[test]
    fn collections_honor_min_items() {
        let s = step(&["experiences"], Some(2));
        assert!(!is_step_complete(&s, &data(json!({"experiences": ["a"]}))));
        assert!(is_step_complete(&s, &data(json!({"experiences": ["a", "b"]}))));
    }

    #[test]
    fn empty_collection_is_missing_without_min_items() {
        let s = step(&["photos"], None);
        assert!(!is_step_complete(&s, &data(json!({"photos": []}))));
    }

    #[test]
    fn booleans_and_objects_count_as_present() {
        let s = step(&["agreed", "agency"], None);
        assert!(is_step_complete(
            &s,
            &data(json!({"agreed": false, "agency": {"name": "x"}}))
        ));
    }
}
